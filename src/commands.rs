mod generate_secret;
mod generate_token;
mod parse_token;
mod verify_token;

pub use generate_secret::generate_secret;
pub use generate_token::generate_token;
pub use parse_token::parse_token;
pub use verify_token::verify_token;
