//! # Presentation Layer
//!
//! Page markup is produced with an adaptation of the **MVVM** pattern so
//! that every rendering decision can be tested without a browser.
//!
//! ```text
//! [ Controller ] --> [ Presenter ] --> [ ViewModel ] --> [ View ] --> HTML fragment
//!   (page state)       (Converter)       (Contract)       (Markup)
//! ```
//!
//! ## Where does code go?
//!
//! ### `view_models/` (The Data Contract)
//! * Plain data, `Serialize`. Raw values (dates, amounts), never pre-formatted strings.
//!
//! ### `presenters/` (The Transformation Logic)
//! * Pure functions from domain records to view models.
//! * Filtering, statistics, badge selection, nights and cost arithmetic live here.
//!
//! ### `views/` (The Markup)
//! * `fmt::Display` implementations that emit HTML fragments.
//! * Every interpolated value goes through `formatters::Escaped` / `escape_html`.
//!
//! ### `formatters/` (The Utilities)
//! * Escaping, price and date formatting shared by all views.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Change which bookings are "active" | **`presenters/`** |
//! | Change a CSS class or label | **`views/`** |
//! | Change how prices look | **`formatters/`** |

pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;

pub use view_models::{
    BookingCardViewModel, BookingDetailViewModel, BookingListViewModel, BookingPageViewModel,
    BookingStatsViewModel, BookingSummaryViewModel, CostBreakdownViewModel, StayBadge,
    UserMenuViewModel,
};
