use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{config::Config, enums::HashAlgorithm, error::Error, parsers::parse_key_uri};

/// Read-only view of a decoded onepass key URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyUri {
    pub(crate) url: String,
    pub(crate) scheme: String,
    pub(crate) version: String,
    pub(crate) label: String,
    pub(crate) provider: Option<String>,
    pub(crate) account: String,
    pub(crate) secret: String,
    pub(crate) period: u64,
    pub(crate) algorithm: HashAlgorithm,
    pub(crate) issuer: Option<String>,
}

impl KeyUri {
    /// The URI as normalized by the parser.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// The MAC carried by the token, empty when the URI had none.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn period(&self) -> u64 {
        self.period
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }
}

/// Decodes with the default protocol configuration.
impl FromStr for KeyUri {
    type Err = Error;

    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        parse_key_uri(uri, &Config::default())
    }
}
