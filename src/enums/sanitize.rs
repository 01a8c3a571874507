use serde::{Deserialize, Serialize};

/// How `=` and `+` are removed from the Base64 MAC before it goes into a URI.
///
/// `First` drops only the first occurrence of each character, which is what
/// already issued tokens carry. `All` drops every occurrence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sanitize {
    #[default]
    First,
    All,
}

impl Sanitize {
    pub fn apply(self, encoded: &str) -> String {
        match self {
            Sanitize::First => encoded.replacen('=', "", 1).replacen('+', "", 1),
            Sanitize::All => encoded.chars().filter(|c| !matches!(c, '=' | '+')).collect(),
        }
    }
}
