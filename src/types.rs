mod key_uri;
mod label;
mod secret;
mod token;
mod token_options;

pub use key_uri::KeyUri;
pub use label::{split_label, Label};
pub use secret::Secret;
pub use token::Token;
pub use token_options::TokenOptions;
