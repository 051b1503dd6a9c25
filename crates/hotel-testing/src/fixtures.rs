//! Sample records.

use chrono::{DateTime, TimeZone, Utc};
use hotel_types::{
    Booking, BookingId, BookingStatus, Role, Room, RoomId, User, UserId, parse_stay_date,
};

/// Instant every `TestWorld` starts at: 2024-06-15 12:00 UTC
pub fn default_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .single()
        .expect("valid fixture date")
}

pub fn guest_user() -> User {
    User {
        id: UserId::new("u-100"),
        name: "Ana María López".to_string(),
        email: "ana@example.com".to_string(),
        role: Role::Ordinary,
    }
}

pub fn admin_user() -> User {
    User {
        id: UserId::new("u-1"),
        name: "Carlos Admin".to_string(),
        email: "admin@example.com".to_string(),
        role: Role::Admin,
    }
}

pub fn suite_room() -> Room {
    Room {
        id: RoomId::new("R101"),
        name: "Presidential Suite".to_string(),
        description: "Ocean view with private terrace".to_string(),
        price: 250.0,
        image: "presidential.jpg".to_string(),
        services: vec![
            "WiFi".to_string(),
            "Breakfast".to_string(),
            "Spa access".to_string(),
        ],
    }
}

pub fn standard_room() -> Room {
    Room {
        id: RoomId::new("R201"),
        name: "Standard Double".to_string(),
        description: "Two queen beds".to_string(),
        price: 90.0,
        image: "standard.jpg".to_string(),
        services: Vec::new(),
    }
}

/// Fluent construction of bookings with sensible defaults.
///
/// # Example
/// ```
/// use hotel_testing::BookingBuilder;
///
/// let booking = BookingBuilder::new("b1")
///     .room("R101")
///     .stay("2024-07-01", "2024-07-04")
///     .total(750.0)
///     .build();
/// assert_eq!(booking.nights(), 3);
/// ```
pub struct BookingBuilder {
    booking: Booking,
}

impl BookingBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            booking: Booking {
                id: BookingId::new(id),
                user_id: guest_user().id,
                room_id: suite_room().id,
                check_in: parse_stay_date("2024-07-01").expect("valid fixture date"),
                check_out: parse_stay_date("2024-07-03").expect("valid fixture date"),
                guests: 2,
                total: 500.0,
                status: BookingStatus::Confirmed,
                created_at: Utc
                    .with_ymd_and_hms(2024, 5, 20, 8, 15, 0)
                    .single()
                    .expect("valid fixture date"),
            },
        }
    }

    pub fn user(mut self, user_id: &str) -> Self {
        self.booking.user_id = UserId::new(user_id);
        self
    }

    pub fn room(mut self, room_id: &str) -> Self {
        self.booking.room_id = RoomId::new(room_id);
        self
    }

    /// Dates as `YYYY-MM-DD` or full timestamps
    pub fn stay(mut self, check_in: &str, check_out: &str) -> Self {
        self.booking.check_in = parse_stay_date(check_in).expect("valid check-in date");
        self.booking.check_out = parse_stay_date(check_out).expect("valid check-out date");
        self
    }

    pub fn guests(mut self, guests: u32) -> Self {
        self.booking.guests = guests;
        self
    }

    pub fn total(mut self, total: f64) -> Self {
        self.booking.total = total;
        self
    }

    pub fn cancelled(mut self) -> Self {
        self.booking.status = BookingStatus::Cancelled;
        self
    }

    pub fn build(self) -> Booking {
        self.booking
    }
}
