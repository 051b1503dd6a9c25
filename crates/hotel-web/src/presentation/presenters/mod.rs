pub mod bookings;
pub mod details;
pub mod navbar;

pub use bookings::{compute_stats, filter_bookings, present_booking_list, stay_badge};
pub use details::present_booking_detail;
pub use navbar::{link_prefix, present_user_menu};
