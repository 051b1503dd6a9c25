use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BookingId, RoomId, UserId};
use crate::util::{nights_between, serde_stay_date, serde_timestamp};

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    #[serde(rename = "confirmed", alias = "confirmada")]
    Confirmed,
    #[serde(rename = "cancelled", alias = "cancelada", alias = "canceled")]
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// A reservation of one room by one user for a date range.
///
/// Read-only from the point of view of this workspace; records are owned by
/// the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    /// Bare dates are read as 00:00 UTC of that day
    #[serde(alias = "fechaInicio", with = "serde_stay_date")]
    pub check_in: DateTime<Utc>,
    #[serde(alias = "fechaFin", with = "serde_stay_date")]
    pub check_out: DateTime<Utc>,
    #[serde(alias = "personas")]
    pub guests: u32,
    /// Amount actually charged, independent of nights x nightly price
    pub total: f64,
    #[serde(alias = "estado")]
    pub status: BookingStatus,
    #[serde(alias = "fechaReserva", with = "serde_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    /// Whether the stay has already elapsed at `now`
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.check_out < now
    }

    pub fn nights(&self) -> u32 {
        nights_between(self.check_in, self.check_out)
    }
}
