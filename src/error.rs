//! Error types for the crate

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Input must contain at least one value")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
