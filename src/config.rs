//! Protocol configuration, loadable from TOML.
//!
//! ```toml
//! scheme = "onepass"
//! version = "1.1"
//! default_period = 30
//! default_algorithm = "HMACSHA1"
//! sanitize = "first"
//! key_wrapping = "none"
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    enums::{HashAlgorithm, KeyWrapping, Sanitize},
    error::{Error, Result},
};

pub const DEFAULT_SCHEME: &str = "onepass";
pub const DEFAULT_VERSION: &str = "1.1";
pub const DEFAULT_PERIOD: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scheme: String,
    pub version: String,
    pub default_period: u64,
    pub default_algorithm: HashAlgorithm,
    pub sanitize: Sanitize,
    pub key_wrapping: KeyWrapping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
            default_period: DEFAULT_PERIOD,
            default_algorithm: HashAlgorithm::default(),
            sanitize: Sanitize::default(),
            key_wrapping: KeyWrapping::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        toml::from_str::<Config>(data)
            .map_err(|err| Error::Config(err.to_string()))?
            .validated()
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))?;
        Self::from_toml_str(data.as_str())
    }

    fn validated(self) -> Result<Self> {
        if self.default_period == 0 {
            return Err(Error::InvalidPeriod(self.default_period));
        }
        if self.scheme.is_empty() || self.version.is_empty() {
            return Err(Error::Config("scheme and version must not be empty".into()));
        }
        Ok(self)
    }
}
