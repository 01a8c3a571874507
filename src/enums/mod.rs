mod hash_algorithm;
mod key_wrapping;
mod sanitize;

pub use hash_algorithm::HashAlgorithm;
pub use key_wrapping::KeyWrapping;
pub use sanitize::Sanitize;
