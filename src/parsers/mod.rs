mod parse_key_uri;

pub use parse_key_uri::parse_key_uri;
