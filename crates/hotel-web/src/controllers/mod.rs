pub mod bookings;
pub mod navbar;

pub use bookings::{BookingListController, BookingPageEvent};
pub use navbar::{NavbarController, NavbarEvent};

/// What the page should do after handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Stay on the page
    Continue,
    /// The page navigated away; nothing further should be rendered
    Redirected(String),
}

impl PageOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, PageOutcome::Redirected(_))
    }
}
