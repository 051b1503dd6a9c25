pub mod bookings;
pub mod details;
pub mod navbar;

pub use bookings::{
    BookingCardViewModel, BookingListViewModel, BookingPageViewModel, BookingStatsViewModel,
    BookingSummaryViewModel, StayBadge,
};
pub use details::{BookingDetailViewModel, CostBreakdownViewModel};
pub use navbar::UserMenuViewModel;
