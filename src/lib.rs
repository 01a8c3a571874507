//! Time-sliced HMAC one-time tokens carried as `onepass://` key URIs.
//!
//! ```
//! use onepass::{Authenticator, Config, TokenOptions};
//!
//! let authenticator = Authenticator::new(Config::default());
//! let secret = authenticator.generate_secret();
//! let token = authenticator
//!     .generate(&secret, "soma-lounge:iot@zigbang.com", &TokenOptions::default())
//!     .unwrap();
//!
//! assert!(token.as_str().starts_with("onepass://1.1/"));
//! ```

pub mod authenticator;
pub mod codec;
pub mod config;
pub mod enums;
pub mod error;
pub mod mac;
pub mod parsers;
pub mod time_slice;
pub mod types;

pub use authenticator::Authenticator;
pub use config::Config;
pub use enums::{HashAlgorithm, KeyWrapping, Sanitize};
pub use error::{Error, Result};
pub use time_slice::{Clock, FixedClock, SystemClock};
pub use types::{KeyUri, Label, Secret, Token, TokenOptions};
