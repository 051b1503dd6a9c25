use anyhow::{Context, Result};
use hotel_storage::{Clock, FixedClock, LocalBookingStore, MemoryStore, SessionStore, SystemClock};
use hotel_web::{MemoryDocument, NavbarController, SiteConfig};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::rc::Rc;

use super::BookingPage;
use crate::args::Cli;
use crate::types::OutputFormat;

const USER_MENU_ITEM: &str = "userMenuItem";

/// Storage, clock and site settings shared by every command
pub struct HandlerContext {
    pub format: OutputFormat,
    pub site: SiteConfig,
    snapshot: PathBuf,
    local: Rc<MemoryStore>,
    transient: Rc<MemoryStore>,
    clock: Rc<dyn Clock>,
}

impl HandlerContext {
    pub fn open(cli: &Cli) -> Result<Self> {
        let site = SiteConfig::load(cli.config.as_deref()).context("Failed to load site config")?;

        let local = if cli.snapshot.exists() {
            MemoryStore::load_snapshot(&cli.snapshot).with_context(|| {
                format!("Failed to read storage snapshot {}", cli.snapshot.display())
            })?
        } else {
            tracing::info!(path = %cli.snapshot.display(), "no snapshot, starting with empty storage");
            MemoryStore::new()
        };

        let clock: Rc<dyn Clock> = match cli.now {
            Some(now) => Rc::new(FixedClock::new(now)),
            None => Rc::new(SystemClock),
        };

        Ok(Self {
            format: cli.format,
            site,
            snapshot: cli.snapshot.clone(),
            local: Rc::new(local),
            transient: Rc::new(MemoryStore::new()),
            clock,
        })
    }

    pub fn session(&self) -> SessionStore {
        SessionStore::new(self.local.clone(), self.transient.clone())
    }

    pub fn booking_page(&self) -> BookingPage {
        BookingPage::new(
            self.session(),
            LocalBookingStore::new(self.local.clone()),
            MemoryDocument::bookings_page(),
            self.clock.clone(),
            self.site.clone(),
        )
    }

    pub fn navbar(&self, path: &str) -> NavbarController<MemoryDocument> {
        let document = MemoryDocument::new(path).with_elements(&[USER_MENU_ITEM]);
        NavbarController::new(self.session(), document, self.site.clone())
    }

    /// Write storage back to the snapshot file
    pub fn save(&self) -> Result<()> {
        self.local
            .save_snapshot(&self.snapshot)
            .with_context(|| format!("Failed to write storage snapshot {}", self.snapshot.display()))
    }

    /// Print the view model as JSON or the rendered markup, per `--format`
    pub fn render<T: Serialize>(&self, view_model: &T, html: impl Display) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(view_model)?);
            }
            OutputFormat::Html => {
                print!("{}", html);
            }
        }
        Ok(())
    }
}
