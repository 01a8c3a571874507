use anyhow::{Context, Result};
use onepass::{Authenticator, Config, HashAlgorithm, Secret, TokenOptions};

pub fn generate_token(
    config: Config,
    secret: &str,
    label: &str,
    algorithm: Option<HashAlgorithm>,
    period: Option<u64>,
) -> Result<()> {
    let authenticator = Authenticator::new(config);
    let options = TokenOptions { algorithm, period };

    let token = authenticator
        .generate(&Secret::from(secret), label, &options)
        .context("Failed to generate token")?;
    let ttl = authenticator
        .seconds_remaining(period.unwrap_or(authenticator.config().default_period))?;

    println!("{}", token);
    eprintln!("ttl: {}", ttl);
    Ok(())
}
