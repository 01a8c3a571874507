use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated, percent-encoded onepass key URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Token {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl From<&str> for Token {
    fn from(uri: &str) -> Self {
        Self(uri.to_owned())
    }
}
