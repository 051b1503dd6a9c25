use hotel_types::{Booking, Room, RoomId, UserId};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

use crate::keys;
use crate::{KeyValueStore, Result};

pub trait BookingRepository {
    /// Bookings owned by `user_id`, in storage order
    fn user_bookings(&self, user_id: &UserId) -> Result<Vec<Booking>>;
}

pub trait RoomRepository {
    fn room_by_id(&self, room_id: &RoomId) -> Result<Option<Room>>;
}

/// Booking and room lookups over the site's key/value storage
#[derive(Clone)]
pub struct LocalBookingStore {
    store: Rc<dyn KeyValueStore>,
}

impl LocalBookingStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn all_bookings(&self) -> Result<Vec<Booking>> {
        self.read_list(keys::BOOKINGS)
    }

    pub fn all_rooms(&self) -> Result<Vec<Room>> {
        self.read_list(keys::ROOMS)
    }

    /// A missing key reads as an empty list and a value that is not a JSON
    /// array is an error. Records that fail to decode are skipped.
    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(Vec::new());
        };
        let records: Vec<Value> = serde_json::from_str(&raw)?;
        let total = records.len();
        let decoded: Vec<T> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(key, index, error = %err, "skipping unreadable record");
                    None
                }
            })
            .collect();
        if decoded.len() < total {
            tracing::debug!(key, kept = decoded.len(), total, "partial list read");
        }
        Ok(decoded)
    }
}

impl BookingRepository for LocalBookingStore {
    fn user_bookings(&self, user_id: &UserId) -> Result<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .all_bookings()?
            .into_iter()
            .filter(|b| &b.user_id == user_id)
            .collect();
        tracing::debug!(user_id = %user_id, count = bookings.len(), "user bookings read");
        Ok(bookings)
    }
}

impl RoomRepository for LocalBookingStore {
    fn room_by_id(&self, room_id: &RoomId) -> Result<Option<Room>> {
        Ok(self.all_rooms()?.into_iter().find(|r| &r.id == room_id))
    }
}

impl<T: BookingRepository + ?Sized> BookingRepository for Rc<T> {
    fn user_bookings(&self, user_id: &UserId) -> Result<Vec<Booking>> {
        (**self).user_bookings(user_id)
    }
}

impl<T: RoomRepository + ?Sized> RoomRepository for Rc<T> {
    fn room_by_id(&self, room_id: &RoomId) -> Result<Option<Room>> {
        (**self).room_by_id(room_id)
    }
}
