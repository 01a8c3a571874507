use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared secret keying every token for one enrollment.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// `<unix millis>-<uuid v4>`, the uuid drawn from the OS rng.
    pub fn generate_at(unix_millis: u64) -> Self {
        let mut random = [0u8; 16];
        OsRng.fill_bytes(&mut random);
        let id = uuid::Builder::from_random_bytes(random).into_uuid();
        Self(format!("{}-{}", unix_millis, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl From<String> for Secret {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl From<&str> for Secret {
    fn from(secret: &str) -> Self {
        Self(secret.to_owned())
    }
}

impl AsRef<str> for Secret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Secret;

    #[test]
    fn generated_secret_layout() {
        let secret = Secret::generate_at(1_666_329_317_842);
        let (millis, id) = secret.as_str().split_once('-').unwrap();

        assert_eq!(millis, "1666329317842");
        let id = uuid::Uuid::parse_str(id).unwrap();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn generated_secrets_differ() {
        assert_ne!(Secret::generate_at(0), Secret::generate_at(0));
    }

    #[test]
    fn debug_does_not_leak() {
        let secret = Secret::from("hunter2");
        assert!(!format!("{:?}", secret).contains("hunter2"));
    }
}
