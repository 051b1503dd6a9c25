use chrono::{DateTime, NaiveDate, Utc};
use hotel_types::BookingStatus;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingDetailViewModel {
    pub booking_id: String,
    pub room_name: String,
    pub room_description: String,
    pub room_image: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub guests: u32,
    pub created_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub services: Vec<String>,
    pub cost: CostBreakdownViewModel,
}

/// `total_paid` comes straight from the booking and may differ from
/// `nights_subtotal`; both are shown as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdownViewModel {
    pub nightly_price: f64,
    pub nights: u32,
    pub nights_subtotal: f64,
    pub total_paid: f64,
}
