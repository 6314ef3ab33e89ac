//! Password generation settings.

use crate::entropy::EntropySource;
use crate::pass::PasswordRequest;

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
    pub source: EntropySource,
    pub to_clipboard: bool,
    pub show_entropy: bool,
}

impl Settings {
    /// The request each generated password is built from.
    pub fn request(&self) -> PasswordRequest {
        PasswordRequest {
            length: self.pass_length,
            uppercase: self.uppercase,
            digits: self.digits,
            special: self.special,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            number_of_passwords: 5,
            uppercase: true,
            digits: true,
            special: true,
            source: EntropySource::default(),
            to_clipboard: false,
            show_entropy: true,
        }
    }
}
