//! Page logic for the hotel site.
//!
//! Controllers own page state and react to discrete page events; all
//! markup comes from the presentation layer, and all page access goes
//! through the `Document` binding trait so the whole flow runs without a
//! browser.

pub mod config;
pub mod controllers;
pub mod document;
pub mod error;
pub mod notifications;
pub mod presentation;

pub use config::SiteConfig;
pub use controllers::{
    BookingListController, BookingPageEvent, NavbarController, NavbarEvent, PageOutcome,
};
pub use document::{Document, MemoryDocument};
pub use error::{Error, Result};
pub use notifications::{Notification, NotificationCenter, NotificationId, NotificationKind};
pub use presentation::formatters::{escape_html, escape_html_opt};
