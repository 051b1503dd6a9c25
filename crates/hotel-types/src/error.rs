use std::fmt;

/// Result type for hotel-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown booking filter name
    InvalidFilter(String),

    /// Stay date that is neither `YYYY-MM-DD` nor RFC3339
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFilter(name) => {
                write!(f, "Unknown filter '{}' (expected all, active or past)", name)
            }
            Error::InvalidDate(raw) => write!(f, "Invalid date: {}", raw),
        }
    }
}

impl std::error::Error for Error {}
