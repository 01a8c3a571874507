use serde::{Deserialize, Serialize};

/// Optional transformation of the shared secret before it keys the HMAC.
///
/// `SelfHmac` replaces the secret with the sanitized MAC of the secret keyed by
/// itself, using the token's algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyWrapping {
    #[default]
    None,
    SelfHmac,
}
