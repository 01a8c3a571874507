use anyhow::Result;
use onepass::{Authenticator, Config};

pub fn generate_secret(config: Config) -> Result<()> {
    let secret = Authenticator::new(config).generate_secret();
    println!("{}", secret.as_str());
    Ok(())
}
