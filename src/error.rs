/// Errors raised while deriving, encoding or decoding onepass tokens.
///
/// A token that simply does not match is not an error: verification reports
/// it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("period must be a positive number of seconds, got {0}")]
    InvalidPeriod(u64),
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("malformed key uri: {0}")]
    MalformedUri(String),
    #[error("invalid label: {0:?}")]
    InvalidLabel(String),
    #[error("hmac key was rejected")]
    InvalidKey,
    #[error("failed to load config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
