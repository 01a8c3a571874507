use serde::{Deserialize, Serialize};

use crate::enums::HashAlgorithm;

/// Per-token overrides. Unset fields fall back to the authenticator's config.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenOptions {
    pub algorithm: Option<HashAlgorithm>,
    pub period: Option<u64>,
}

impl TokenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn with_period(mut self, period: u64) -> Self {
        self.period = Some(period);
        self
    }
}
