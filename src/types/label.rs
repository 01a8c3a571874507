use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Account binding of a token: `provider:account` or a bare `account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    raw: String,
    provider: Option<String>,
    account: String,
}

impl Label {
    /// Splits on the first `:`. Rejects an empty label, empty parts, and
    /// anything that would not survive as a URI path: `?`, `#` and `.`/`..`
    /// segments.
    pub fn parse(raw: &str) -> Result<Self> {
        let (provider, account) = split_label(raw);
        if account.is_empty()
            || provider.is_some_and(str::is_empty)
            || raw.contains(|c: char| matches!(c, '?' | '#'))
            || raw.split('/').any(|segment| matches!(segment, "." | ".."))
        {
            return Err(Error::InvalidLabel(raw.to_owned()));
        }
        Ok(Self {
            raw: raw.to_owned(),
            provider: provider.map(str::to_owned),
            account: account.to_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn account(&self) -> &str {
        &self.account
    }
}

/// Lenient `(provider, account)` projection of a label.
///
/// Anything after the first `:` is the account, so `a:b:c` yields `a` and `b:c`.
pub fn split_label(raw: &str) -> (Option<&str>, &str) {
    match raw.split_once(':') {
        Some((provider, account)) => (Some(provider), account),
        None => (None, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_and_account() {
        let label = Label::parse("soma-lounge:iot@zigbang.com").unwrap();
        assert_eq!(label.provider(), Some("soma-lounge"));
        assert_eq!(label.account(), "iot@zigbang.com");
        assert_eq!(label.as_str(), "soma-lounge:iot@zigbang.com");
    }

    #[test]
    fn bare_account() {
        let label = Label::parse("aloneuser").unwrap();
        assert_eq!(label.provider(), None);
        assert_eq!(label.account(), "aloneuser");
    }

    #[test]
    fn extra_separators_stay_in_account() {
        assert_eq!(split_label("a:b:c"), (Some("a"), "b:c"));
    }

    #[test]
    fn empty_parts_are_rejected() {
        for raw in ["", ":account", "provider:", ":"] {
            assert_eq!(Label::parse(raw), Err(Error::InvalidLabel(raw.into())));
        }
    }

    #[test]
    fn path_breaking_labels_are_rejected() {
        for raw in [".", "..", "team/../acct", "acct/.", "./acct", "a?b", "p:a#b"] {
            assert_eq!(Label::parse(raw), Err(Error::InvalidLabel(raw.into())));
        }
    }

    #[test]
    fn dots_and_delimiters_inside_segments_are_fine() {
        for raw in ["p:a&x=1", "a.b:c.d", "team/acct", "p:...", "a:.."] {
            assert_eq!(Label::parse(raw).unwrap().as_str(), raw);
        }
    }
}
