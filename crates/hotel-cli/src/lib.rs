//! `hotel` renders the pages of the hotel site outside a browser.
//!
//! The browser's `localStorage` is replaced by a JSON snapshot file
//! (`key -> value`); each command runs the same page lifecycle the site
//! runs and prints the resulting markup or view model.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
