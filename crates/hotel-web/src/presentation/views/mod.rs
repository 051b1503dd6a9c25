// Views turn view models into HTML fragments.
// All interpolated values are escaped here; view models carry raw data.

pub mod bookings;
pub mod details;
pub mod navbar;
pub mod notification;

pub use bookings::{BookingListView, EmptyStateView};
pub use details::BookingDetailView;
pub use navbar::UserMenuView;
pub use notification::NotificationView;

use hotel_types::BookingStatus;

pub(crate) fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "Confirmed",
        BookingStatus::Cancelled => "Cancelled",
    }
}

pub(crate) fn status_icon(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "check-circle",
        BookingStatus::Cancelled => "x-circle",
    }
}
