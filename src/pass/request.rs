//! Validated password request.

use super::PasswordError;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 4;

/// Length and class toggles for one password. Lowercase is always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl PasswordRequest {
    /// Build a request, rejecting lengths below [`MIN_LENGTH`].
    pub fn new(
        length: usize,
        uppercase: bool,
        digits: bool,
        special: bool,
    ) -> Result<Self, PasswordError> {
        let request = Self {
            length,
            uppercase,
            digits,
            special,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), PasswordError> {
        if self.length < MIN_LENGTH {
            return Err(PasswordError::InvalidLength {
                length: self.length,
                min: MIN_LENGTH,
            });
        }
        Ok(())
    }
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            digits: true,
            special: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_lengths() {
        for length in 0..MIN_LENGTH {
            assert_eq!(
                PasswordRequest::new(length, true, true, true),
                Err(PasswordError::InvalidLength { length, min: 4 })
            );
        }
    }

    #[test]
    fn accepts_minimum() {
        let request = PasswordRequest::new(4, false, false, false).unwrap();
        assert_eq!(request.length, 4);
    }

    #[test]
    fn error_message_names_minimum() {
        let err = PasswordRequest::new(2, true, true, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password length must be at least 4 characters (got 2)"
        );
    }
}
