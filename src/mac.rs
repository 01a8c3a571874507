//! HMAC derivation over the canonical `label + time slice` message.

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{digest::KeyInit, Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use std::borrow::Cow;

use crate::{
    enums::{HashAlgorithm, KeyWrapping, Sanitize},
    error::{Error, Result},
};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Keyed hash of `message` under `secret`, Base64 encoded and sanitized.
pub fn compute_mac(
    message: &str,
    secret: &str,
    algorithm: HashAlgorithm,
    sanitize: Sanitize,
) -> Result<String> {
    let digest = match algorithm {
        HashAlgorithm::HmacSha1 => digest::<HmacSha1>(secret.as_bytes(), message.as_bytes())?,
        HashAlgorithm::HmacSha256 => digest::<HmacSha256>(secret.as_bytes(), message.as_bytes())?,
    };
    Ok(sanitize.apply(&STANDARD.encode(digest)))
}

/// Same as [`compute_mac`] but takes the algorithm as its wire tag.
pub fn compute_mac_tagged(
    message: &str,
    secret: &str,
    algorithm: &str,
    sanitize: Sanitize,
) -> Result<String> {
    compute_mac(message, secret, algorithm.parse()?, sanitize)
}

/// The string that actually keys the HMAC for `secret`.
pub fn signing_key<'a>(
    secret: &'a str,
    algorithm: HashAlgorithm,
    wrapping: KeyWrapping,
    sanitize: Sanitize,
) -> Result<Cow<'a, str>> {
    match wrapping {
        KeyWrapping::None => Ok(Cow::Borrowed(secret)),
        KeyWrapping::SelfHmac => compute_mac(secret, secret, algorithm, sanitize).map(Cow::Owned),
    }
}

fn digest<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|_| Error::InvalidKey)?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn hmac_sha1_known_answer() {
        assert_eq!(
            compute_mac(FOX, "key", HashAlgorithm::HmacSha1, Sanitize::First).unwrap(),
            "3nybhbi3iqa8ino29wqQcBydtNk"
        );
    }

    #[test]
    fn hmac_sha256_known_answer_per_sanitize_mode() {
        // raw: 97yD9DBThCSxMpjmqm+xQ+9NWaFJRhdZl0edvC0aPNg=
        assert_eq!(
            compute_mac(FOX, "key", HashAlgorithm::HmacSha256, Sanitize::First).unwrap(),
            "97yD9DBThCSxMpjmqmxQ+9NWaFJRhdZl0edvC0aPNg"
        );
        assert_eq!(
            compute_mac(FOX, "key", HashAlgorithm::HmacSha256, Sanitize::All).unwrap(),
            "97yD9DBThCSxMpjmqmxQ9NWaFJRhdZl0edvC0aPNg"
        );
    }

    #[test]
    fn canonical_token_message() {
        let secret = "1666329317842-98bdd778-f907-4675-9829-b033e8a28bde";
        let message = "soma-lounge:iot@zigbang.com00000000034f89f6";
        assert_eq!(
            compute_mac(message, secret, HashAlgorithm::HmacSha1, Sanitize::First).unwrap(),
            "IPUk20SL5oI9I5vA2UScV7TuG68"
        );
        assert_eq!(
            compute_mac(message, secret, HashAlgorithm::HmacSha256, Sanitize::First).unwrap(),
            "pRVMmMrooTBDwL3SivLCYDnn5DqLoaRd/0J50HBMt0"
        );
    }

    #[test]
    fn tagged_rejects_unknown_algorithm() {
        assert_eq!(
            compute_mac_tagged(FOX, "key", "HMACMD5", Sanitize::First),
            Err(Error::UnsupportedAlgorithm("HMACMD5".into()))
        );
        assert_eq!(
            compute_mac_tagged(FOX, "key", "HMACSHA1", Sanitize::First).unwrap(),
            "3nybhbi3iqa8ino29wqQcBydtNk"
        );
    }

    #[test]
    fn self_hmac_wraps_the_secret() {
        let secret = "1666329317842-98bdd778-f907-4675-9829-b033e8a28bde";
        let plain = signing_key(secret, HashAlgorithm::HmacSha1, KeyWrapping::None, Sanitize::First)
            .unwrap();
        let wrapped =
            signing_key(secret, HashAlgorithm::HmacSha1, KeyWrapping::SelfHmac, Sanitize::First)
                .unwrap();

        assert_eq!(plain, secret);
        assert_eq!(wrapped, "aoOCfBWemGSyrzSy4VEiPQRle80");
    }

    #[test]
    fn empty_secret_is_still_a_valid_key() {
        assert!(compute_mac(FOX, "", HashAlgorithm::HmacSha1, Sanitize::All).is_ok());
    }
}
