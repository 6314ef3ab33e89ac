use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password length must be at least {min} characters (got {length})")]
    InvalidLength { length: usize, min: usize },

    #[error("Cannot generate {requested} unique passwords: only {capacity} are possible")]
    BatchTooLarge { requested: usize, capacity: u128 },

    #[error(
        "Gave up after {attempts} attempts with {produced} of {requested} unique passwords"
    )]
    BatchExhausted {
        requested: usize,
        produced: usize,
        attempts: usize,
    },
}
