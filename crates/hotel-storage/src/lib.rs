//! Storage layer for the hotel site.
//!
//! Everything the pages read lives in a browser-style key/value store
//! (`localStorage` / `sessionStorage`). This crate provides:
//! - `KeyValueStore`: the storage seam, with `MemoryStore` as the in-process backend
//! - `SessionStore`: the signed-in user record and logout cleanup
//! - `LocalBookingStore`: booking and room lookups over the same store
//! - `StorageChannel`: storage-change notifications (cross-tab updates)
//! - `Clock`: the source of "now" used by date-sensitive rendering

pub mod channel;
pub mod clock;
pub mod error;
pub mod keys;
pub mod kv;
pub mod repository;
pub mod session;

pub use channel::{StorageChange, StorageChannel, Subscription};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use kv::{KeyValueStore, MemoryStore};
pub use repository::{BookingRepository, LocalBookingStore, RoomRepository};
pub use session::SessionStore;
