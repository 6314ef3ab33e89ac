//! Password generation and output.

pub mod charset;
mod error;
mod generate;
mod request;

pub use charset::CharClass;
pub use error::PasswordError;
pub use generate::Generator;
pub use request::{MIN_LENGTH, PasswordRequest};
