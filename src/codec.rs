//! Serialization of a derived MAC into a onepass key URI.
//!
//! Decoding lives in [`crate::parsers`].

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt::Write;

use crate::{enums::HashAlgorithm, types::Token};

/// ASCII escaped when the whole URI is encoded: controls, space, `%` and every
/// character that is neither reserved nor unreserved. Non-ASCII is always
/// escaped.
const URI_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Builds `scheme://version/label?secret=..&period=..&algorithm=..[&issuer=..]`
/// and percent-encodes it.
pub fn encode(
    scheme: &str,
    version: &str,
    label: &str,
    mac: &str,
    period: u64,
    algorithm: HashAlgorithm,
    issuer: Option<&str>,
) -> Token {
    let mut uri = format!(
        "{}://{}/{}?secret={}&period={}&algorithm={}",
        scheme, version, label, mac, period, algorithm
    );
    if let Some(issuer) = issuer {
        write!(uri, "&issuer={}", issuer).ok();
    }
    Token::from(utf8_percent_encode(&uri, URI_ESCAPE).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuer_is_appended_for_provider_labels() {
        let token = encode(
            "onepass",
            "1.1",
            "soma-lounge:iot@zigbang.com",
            "IPUk20SL5oI9I5vA2UScV7TuG68",
            30,
            HashAlgorithm::HmacSha1,
            Some("soma-lounge"),
        );
        assert_eq!(
            token.as_str(),
            "onepass://1.1/soma-lounge:iot@zigbang.com?secret=IPUk20SL5oI9I5vA2UScV7TuG68\
             &period=30&algorithm=HMACSHA1&issuer=soma-lounge"
        );
    }

    #[test]
    fn bare_account_has_no_issuer() {
        let token = encode(
            "onepass",
            "1.1",
            "aloneuser",
            "abc+/d",
            60,
            HashAlgorithm::HmacSha256,
            None,
        );
        assert_eq!(
            token.as_str(),
            "onepass://1.1/aloneuser?secret=abc+/d&period=60&algorithm=HMACSHA256"
        );
    }

    #[test]
    fn unsafe_characters_are_escaped() {
        let token = encode(
            "onepass",
            "1.1",
            "my shop:jöe",
            "m",
            30,
            HashAlgorithm::HmacSha1,
            Some("my shop"),
        );
        assert_eq!(
            token.as_str(),
            "onepass://1.1/my%20shop:j%C3%B6e?secret=m&period=30&algorithm=HMACSHA1\
             &issuer=my%20shop"
        );
    }
}
