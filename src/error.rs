//! Error types shared by the generator, random source and policy layer.
//!
//! None of the messages carry password content: only lengths, counts and
//! the names of violated rules.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PasswordError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PasswordError {
    #[error("Invalid password length {requested}. Must be between {min} and {max}.")]
    InvalidLength {
        requested: usize,
        min: usize,
        max: usize,
    },
    #[error(
        "At least one character set must be selected (uppercase, lowercase, numbers, or symbols)."
    )]
    InvalidCharset,
    #[error("Cannot choose from an empty alphabet")]
    EmptyAlphabet,
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Password policy is malformed: {}", violations.join("; "))]
    PolicyViolation { violations: Vec<String> },
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}
