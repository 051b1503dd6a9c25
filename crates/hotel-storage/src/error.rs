use std::fmt;

/// Result type for hotel-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the storage layer
#[derive(Debug)]
pub enum Error {
    /// Stored value could not be decoded or encoded
    Json(serde_json::Error),

    /// Snapshot file could not be read or written
    Io(std::io::Error),

    /// Backend refused the operation (quota, disabled storage, ...)
    Backend(String),

    /// Snapshot file does not have the expected shape
    Snapshot(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "Stored data is malformed: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Backend(msg) => write!(f, "Storage unavailable: {}", msg),
            Error::Snapshot(msg) => write!(f, "Invalid storage snapshot: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Backend(_) | Error::Snapshot(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
