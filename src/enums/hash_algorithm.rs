use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::Error;

/// Keyed hash used to derive the token MAC. The wire tag is the serde name.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "HMACSHA1")]
    #[value(name = "HMACSHA1", alias = "sha1")]
    HmacSha1,
    #[serde(rename = "HMACSHA256")]
    #[value(name = "HMACSHA256", alias = "sha256")]
    HmacSha256,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::HmacSha1 => "HMACSHA1",
            HashAlgorithm::HmacSha256 => "HMACSHA256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "HMACSHA1" => Ok(HashAlgorithm::HmacSha1),
            "HMACSHA256" => Ok(HashAlgorithm::HmacSha256),
            _ => Err(Error::UnsupportedAlgorithm(tag.to_owned())),
        }
    }
}
