use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Which bookings are visible in the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    /// Confirmed and not yet checked out
    Active,
    /// Checked out, regardless of status
    Past,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Past];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Past => "past",
        }
    }

    /// Id of the radio input that selects this filter on the page
    pub fn input_id(&self) -> &'static str {
        match self {
            FilterMode::All => "filterAll",
            FilterMode::Active => "filterActive",
            FilterMode::Past => "filterPast",
        }
    }

    pub fn from_input_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.input_id() == id)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "past" => Ok(FilterMode::Past),
            other => Err(Error::InvalidFilter(other.to_string())),
        }
    }
}
