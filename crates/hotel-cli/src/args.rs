use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use hotel_types::{BookingId, FilterMode};
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "hotel")]
#[command(about = "Render the hotel site's pages from a storage snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON object of storage keys, standing in for the browser's localStorage
    #[arg(long, default_value = "storage.json", global = true)]
    pub snapshot: PathBuf,

    /// Site configuration (TOML); falls back to $HOTEL_CONFIG, then defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "html", global = true)]
    pub format: OutputFormat,

    /// Render as if it were this instant (RFC 3339)
    #[arg(long, global = true, value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Statistics and booking cards of the signed-in user
    Bookings {
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: FilterMode,
    },

    /// Detail view of one booking
    Details {
        #[arg(value_parser = parse_booking_id)]
        id: BookingId,
    },

    /// User menu of the navigation bar
    Navbar {
        /// Page the menu is rendered on; pages under /html/ get `../` links
        #[arg(long, default_value = "/index.html")]
        path: String,
    },

    /// Sign out, clearing every session key in the snapshot
    Logout,
}

fn parse_now(raw: &str) -> Result<DateTime<Utc>, String> {
    hotel_types::parse_timestamp(raw).map_err(|e| e.to_string())
}

fn parse_filter(raw: &str) -> Result<FilterMode, String> {
    raw.parse().map_err(|e: hotel_types::Error| e.to_string())
}

fn parse_booking_id(raw: &str) -> Result<BookingId, String> {
    Ok(BookingId::from(raw))
}
