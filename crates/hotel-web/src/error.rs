use std::fmt;

/// Result type for hotel-web operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the web layer
#[derive(Debug)]
pub enum Error {
    /// Storage layer error
    Storage(hotel_storage::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// No user is signed in
    NotSignedIn,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Storage(err) => write!(f, "Storage error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::NotSignedIn => write!(f, "No signed-in user"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Storage(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::NotSignedIn => None,
        }
    }
}

impl From<hotel_storage::Error> for Error {
    fn from(err: hotel_storage::Error) -> Self {
        Error::Storage(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
