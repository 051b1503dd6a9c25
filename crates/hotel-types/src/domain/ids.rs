use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifiers are persisted either as strings or as numbers
/// (`Date.now()`-style ids), so both forms are accepted on read.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }
    };
}

define_id!(
    /// Registered user identifier
    UserId
);

define_id!(
    /// Booking identifier
    BookingId
);

define_id!(
    /// Room identifier (e.g. "R101")
    RoomId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_is_read_as_string() {
        let id: BookingId = serde_json::from_str("1704067200000").unwrap();
        assert_eq!(id.as_str(), "1704067200000");
    }

    #[test]
    fn test_string_id_round_trips_as_string() {
        let id: RoomId = serde_json::from_str("\"R101\"").unwrap();
        assert_eq!(id, RoomId::from("R101"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"R101\"");
    }
}
