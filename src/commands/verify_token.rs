use anyhow::{Context, Result};
use onepass::{Authenticator, Config, Secret, Token};

pub fn verify_token(config: Config, token: &str, secret: &str) -> Result<bool> {
    let valid = Authenticator::new(config)
        .verify(&Token::from(token.trim()), &Secret::from(secret))
        .context("Failed to verify token")?;

    println!("{}", if valid { "valid" } else { "invalid" });
    Ok(valid)
}
