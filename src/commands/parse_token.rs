use anyhow::{Context, Result};
use onepass::{parsers::parse_key_uri, Config};

pub fn parse_token(config: Config, token: &str, json: bool) -> Result<()> {
    let key_uri =
        parse_key_uri(token.trim(), &config).context("Failed to parse token from url")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&key_uri)?);
        return Ok(());
    }

    println!("url={}", key_uri.url());
    println!("version={}", key_uri.version());
    println!("label={}", key_uri.label());
    println!("provider={}", key_uri.provider().unwrap_or_default());
    println!("account={}", key_uri.account());
    println!("secret={}", key_uri.secret());
    println!("period={}", key_uri.period());
    println!("algorithm={}", key_uri.algorithm());
    Ok(())
}
