use chrono::NaiveDate;
use hotel_types::{BookingStatus, FilterMode};
use serde::Serialize;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// Header counters, always computed over the unfiltered list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingStatsViewModel {
    pub total_bookings: usize,
    pub active_bookings: usize,
    pub total_spent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingListViewModel {
    pub filter: FilterMode,
    /// Empty means the call-to-action is shown instead of a list
    pub cards: Vec<BookingCardViewModel>,
}

impl BookingListViewModel {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingCardViewModel {
    Booking(BookingSummaryViewModel),
    /// Booking whose room no longer exists in the catalogue
    MissingRoom { booking_id: String, room_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummaryViewModel {
    pub booking_id: String,
    pub room_name: String,
    pub room_image: String,
    pub status: BookingStatus,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_badge: Option<StayBadge>,
}

/// Secondary badge for confirmed bookings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StayBadge {
    Completed,
    Upcoming,
}

/// Everything the bookings page shows at once (used for JSON output)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingPageViewModel {
    pub stats: BookingStatsViewModel,
    pub list: BookingListViewModel,
}
