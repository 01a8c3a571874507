use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use onepass::{Config, HashAlgorithm};
use std::path::PathBuf;

use crate::commands::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to TOML file overriding scheme, version and token defaults
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Command
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a freshly generated secret
    Secret,
    /// Generate a token for the current time slice
    Generate {
        /// Shared secret
        #[arg(short, long, value_name = "SECRET")]
        secret: String,
        /// Account label, `provider:account` or `account`
        #[arg(short, long, value_name = "LABEL")]
        label: String,
        /// HMAC algorithm (defaults to the configured one)
        #[arg(short, long, value_name = "ALGORITHM")]
        algorithm: Option<HashAlgorithm>,
        /// Time slice width in seconds (defaults to the configured one)
        #[arg(short, long, value_name = "SECONDS")]
        period: Option<u64>,
    },
    /// Verify a token against a secret
    Verify {
        /// Token uri
        #[arg(short, long, value_name = "TOKEN")]
        token: String,
        /// Shared secret
        #[arg(short, long, value_name = "SECRET")]
        secret: String,
    },
    /// Decode a token and print its fields
    Parse {
        /// Token uri
        #[arg(short, long, value_name = "TOKEN")]
        token: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Cli::parse();

        let config = match cli.config.as_ref() {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        match &cli.command {
            Some(Commands::Secret) => generate_secret(config),
            Some(Commands::Generate {
                secret,
                label,
                algorithm,
                period,
            }) => generate_token(config, secret, label, *algorithm, *period),
            Some(Commands::Verify { token, secret }) => {
                match verify_token(config, token, secret)? {
                    true => Ok(()),
                    false => Err(anyhow!("Token is invalid or expired")),
                }
            }
            Some(Commands::Parse { token, json }) => parse_token(config, token, *json),
            None => {
                Cli::command().print_help().ok();
                Ok(())
            }
        }
    }
}
