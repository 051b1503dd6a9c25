//! TestWorld pattern for declarative test setup.
//!
//! Provides a fluent interface for:
//! - Seeding storage with users, rooms and bookings
//! - Pinning the clock
//! - Building page controllers wired to the seeded storage
//! - Running the CLI against a snapshot of the same storage

use anyhow::Result;
use assert_cmd::Command;
use chrono::{DateTime, Utc};
use hotel_storage::{
    keys, BookingRepository, Clock, FixedClock, KeyValueStore, LocalBookingStore, MemoryStore,
    RoomRepository, SessionStore, StorageChannel,
};
use hotel_types::{Booking, Room, RoomId, User, UserId};
use hotel_web::{BookingListController, MemoryDocument, NavbarController, SiteConfig};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```
/// use hotel_testing::{BookingBuilder, TestWorld};
/// use hotel_testing::fixtures;
///
/// let world = TestWorld::new()
///     .with_user(&fixtures::guest_user())
///     .with_room(&fixtures::suite_room())
///     .with_booking(&BookingBuilder::new("b1").build());
///
/// let mut page = world.booking_page();
/// page.init();
/// assert_eq!(page.bookings().len(), 1);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    local: Rc<MemoryStore>,
    transient: Rc<MemoryStore>,
    clock: Rc<FixedClock>,
    channel: StorageChannel,
    site: SiteConfig,
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated environment with empty storage.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            local: Rc::new(MemoryStore::new()),
            transient: Rc::new(MemoryStore::new()),
            clock: Rc::new(FixedClock::new(fixtures::default_now())),
            channel: StorageChannel::new(),
            site: SiteConfig::default(),
            rooms: Vec::new(),
            bookings: Vec::new(),
        }
    }

    pub fn with_now(self, now: DateTime<Utc>) -> Self {
        self.clock.set(now);
        self
    }

    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    /// Sign `user` in, writing the session record and the legacy keys.
    pub fn with_user(self, user: &User) -> Self {
        self.session()
            .store_user(user)
            .expect("Failed to store session user");
        self
    }

    /// Write a raw session record, bypassing validation.
    pub fn with_raw_session(self, raw: &str) -> Self {
        self.local
            .set_item(keys::CURRENT_USER, raw)
            .expect("Failed to write session record");
        self
    }

    pub fn with_room(mut self, room: &Room) -> Self {
        self.rooms.push(room.clone());
        self.write_list(keys::ROOMS, &self.rooms);
        self
    }

    pub fn with_rooms(self, rooms: &[Room]) -> Self {
        rooms.iter().fold(self, |world, room| world.with_room(room))
    }

    pub fn with_booking(mut self, booking: &Booking) -> Self {
        self.bookings.push(booking.clone());
        self.write_list(keys::BOOKINGS, &self.bookings);
        self
    }

    pub fn with_bookings(self, bookings: &[Booking]) -> Self {
        bookings
            .iter()
            .fold(self, |world, booking| world.with_booking(booking))
    }

    /// Store `raw` under `key` as-is.
    pub fn with_item(self, key: &str, raw: &str) -> Self {
        self.local
            .set_item(key, raw)
            .expect("Failed to write storage item");
        self
    }

    fn write_list<T: serde::Serialize>(&self, key: &str, items: &[T]) {
        let raw = serde_json::to_string(items).expect("Failed to serialize fixture list");
        self.local
            .set_item(key, &raw)
            .expect("Failed to write fixture list");
    }

    pub fn local(&self) -> &MemoryStore {
        &self.local
    }

    pub fn transient(&self) -> &MemoryStore {
        &self.transient
    }

    pub fn clock(&self) -> &FixedClock {
        &self.clock
    }

    pub fn channel(&self) -> &StorageChannel {
        &self.channel
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn session(&self) -> SessionStore {
        SessionStore::new(self.local.clone(), self.transient.clone())
    }

    pub fn repo(&self) -> LocalBookingStore {
        LocalBookingStore::new(self.local.clone())
    }

    /// Bookings page controller over the seeded storage.
    pub fn booking_page(&self) -> BookingListController<LocalBookingStore, MemoryDocument> {
        self.booking_page_with(MemoryDocument::bookings_page())
    }

    pub fn booking_page_with(
        &self,
        document: MemoryDocument,
    ) -> BookingListController<LocalBookingStore, MemoryDocument> {
        self.booking_page_over(self.repo(), document)
    }

    /// Bookings page controller over a caller-supplied repository.
    pub fn booking_page_over<R>(
        &self,
        repo: R,
        document: MemoryDocument,
    ) -> BookingListController<R, MemoryDocument>
    where
        R: BookingRepository + RoomRepository,
    {
        let clock: Rc<dyn Clock> = self.clock.clone();
        BookingListController::new(self.session(), repo, document, clock, self.site.clone())
    }

    /// Navbar controller for a page at `path` with a user menu slot.
    pub fn navbar(&self, path: &str) -> NavbarController<MemoryDocument> {
        let document = MemoryDocument::new(path).with_elements(&["userMenuItem"]);
        NavbarController::new(self.session(), document, self.site.clone())
    }

    /// Write the persistent store to a snapshot file and return its path.
    pub fn write_snapshot(&self) -> Result<PathBuf> {
        let path = self.temp_dir.path().join("storage.json");
        self.local.save_snapshot(&path)?;
        Ok(path)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.temp_dir.path().join("storage.json")
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Configure a CLI command with this environment's snapshot and clock.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("hotel")`)
    /// and call `write_snapshot` first.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--snapshot")
            .arg(self.snapshot_path())
            .arg("--now")
            .arg(self.clock.now().to_rfc3339());
        cmd.env_remove("HOTEL_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

/// Repository whose every call fails, for exercising load errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRepository;

impl BookingRepository for FailingRepository {
    fn user_bookings(&self, _user_id: &UserId) -> hotel_storage::Result<Vec<Booking>> {
        Err(hotel_storage::Error::Backend(
            "storage unavailable".to_string(),
        ))
    }
}

impl RoomRepository for FailingRepository {
    fn room_by_id(&self, _room_id: &RoomId) -> hotel_storage::Result<Option<Room>> {
        Err(hotel_storage::Error::Backend(
            "storage unavailable".to_string(),
        ))
    }
}
