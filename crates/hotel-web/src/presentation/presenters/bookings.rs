use chrono::{DateTime, Utc};
use hotel_types::{Booking, FilterMode, Room, RoomId};

use crate::presentation::view_models::{
    BookingCardViewModel, BookingListViewModel, BookingStatsViewModel, BookingSummaryViewModel,
    StayBadge,
};

pub fn compute_stats(bookings: &[Booking]) -> BookingStatsViewModel {
    let confirmed = bookings.iter().filter(|b| b.is_confirmed());

    BookingStatsViewModel {
        total_bookings: bookings.len(),
        active_bookings: confirmed.clone().count(),
        total_spent: confirmed.map(|b| b.total).sum(),
    }
}

/// Visible subset for `filter` at `now`, in list order.
pub fn filter_bookings(bookings: &[Booking], filter: FilterMode, now: DateTime<Utc>) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|b| match filter {
            FilterMode::All => true,
            FilterMode::Active => b.is_confirmed() && !b.is_past(now),
            FilterMode::Past => b.is_past(now),
        })
        .collect()
}

/// Completed / Upcoming for confirmed bookings, nothing for cancelled ones.
pub fn stay_badge(booking: &Booking, now: DateTime<Utc>) -> Option<StayBadge> {
    if !booking.is_confirmed() {
        return None;
    }
    if booking.is_past(now) {
        Some(StayBadge::Completed)
    } else {
        Some(StayBadge::Upcoming)
    }
}

/// Build the card list for the current filter.
///
/// `lookup_room` returning `None` produces an error card for that booking;
/// the remaining bookings are unaffected.
pub fn present_booking_list(
    bookings: &[Booking],
    filter: FilterMode,
    now: DateTime<Utc>,
    mut lookup_room: impl FnMut(&RoomId) -> Option<Room>,
) -> BookingListViewModel {
    let cards = filter_bookings(bookings, filter, now)
        .into_iter()
        .map(|booking| match lookup_room(&booking.room_id) {
            Some(room) => BookingCardViewModel::Booking(BookingSummaryViewModel {
                booking_id: booking.id.to_string(),
                room_name: room.name,
                room_image: room.image,
                status: booking.status,
                check_in: booking.check_in.date_naive(),
                check_out: booking.check_out.date_naive(),
                guests: booking.guests,
                total: booking.total,
                stay_badge: stay_badge(booking, now),
            }),
            None => BookingCardViewModel::MissingRoom {
                booking_id: booking.id.to_string(),
                room_id: booking.room_id.to_string(),
            },
        })
        .collect();

    BookingListViewModel { filter, cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hotel_types::{BookingId, BookingStatus, UserId, parse_stay_date};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn booking(id: &str, room: &str, check_out: &str, status: BookingStatus, total: f64) -> Booking {
        Booking {
            id: BookingId::new(id),
            user_id: UserId::new("u1"),
            room_id: RoomId::new(room),
            check_in: parse_stay_date("2024-01-01").unwrap(),
            check_out: parse_stay_date(check_out).unwrap(),
            guests: 2,
            total,
            status,
            created_at: Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap(),
        }
    }

    fn room(id: &str) -> Room {
        Room {
            id: RoomId::new(id),
            name: format!("Room {}", id),
            description: String::new(),
            price: 100.0,
            image: format!("{}.jpg", id),
            services: Vec::new(),
        }
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking("1", "R1", "2024-07-01", BookingStatus::Confirmed, 300.0),
            booking("2", "R1", "2024-03-01", BookingStatus::Confirmed, 200.0),
            booking("3", "R2", "2024-02-01", BookingStatus::Cancelled, 150.0),
        ]
    }

    fn ids(bookings: &[&Booking]) -> Vec<String> {
        bookings.iter().map(|b| b.id.to_string()).collect()
    }

    #[test]
    fn test_stats_exclude_cancelled_from_spend_and_active() {
        let stats = compute_stats(&sample());
        assert_eq!(stats.total_bookings, 3);
        assert_eq!(stats.active_bookings, 2);
        assert_eq!(stats.total_spent, 500.0);
    }

    #[test]
    fn test_stats_on_empty_list() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.active_bookings, 0);
        assert_eq!(stats.total_spent, 0.0);
    }

    #[test]
    fn test_filters() {
        let bookings = sample();
        assert_eq!(ids(&filter_bookings(&bookings, FilterMode::All, now())), ["1", "2", "3"]);
        assert_eq!(ids(&filter_bookings(&bookings, FilterMode::Active, now())), ["1"]);
        assert_eq!(ids(&filter_bookings(&bookings, FilterMode::Past, now())), ["2", "3"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let bookings = sample();
        let first = ids(&filter_bookings(&bookings, FilterMode::Past, now()));
        let second = ids(&filter_bookings(&bookings, FilterMode::Past, now()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_cancelled_future_booking_is_neither_active_nor_past() {
        let bookings = vec![booking("9", "R1", "2030-01-01", BookingStatus::Cancelled, 10.0)];
        assert!(filter_bookings(&bookings, FilterMode::Active, now()).is_empty());
        assert!(filter_bookings(&bookings, FilterMode::Past, now()).is_empty());
        assert_eq!(stay_badge(&bookings[0], now()), None);
    }

    #[test]
    fn test_stay_badges() {
        let bookings = sample();
        assert_eq!(stay_badge(&bookings[0], now()), Some(StayBadge::Upcoming));
        assert_eq!(stay_badge(&bookings[1], now()), Some(StayBadge::Completed));
        assert_eq!(stay_badge(&bookings[2], now()), None);
    }

    #[test]
    fn test_missing_room_yields_error_card_and_keeps_others() {
        let mut bookings = sample();
        bookings.insert(1, booking("4", "R999", "2024-08-01", BookingStatus::Confirmed, 80.0));

        let list = present_booking_list(&bookings, FilterMode::All, now(), |id| {
            (id.as_str() != "R999").then(|| room(id.as_str()))
        });

        assert_eq!(list.cards.len(), 4);
        assert_eq!(
            list.cards[1],
            BookingCardViewModel::MissingRoom {
                booking_id: "4".to_string(),
                room_id: "R999".to_string(),
            }
        );
        assert!(matches!(list.cards[0], BookingCardViewModel::Booking(_)));
        assert!(matches!(list.cards[3], BookingCardViewModel::Booking(_)));
    }

    #[test]
    fn test_list_json_shape() {
        let bookings = vec![booking("7", "R404", "2024-01-02", BookingStatus::Cancelled, 1.0)];
        let list = present_booking_list(&bookings, FilterMode::Past, now(), |_| None);

        insta::assert_json_snapshot!(list, @r#"
        {
          "filter": "past",
          "cards": [
            {
              "kind": "missing_room",
              "booking_id": "7",
              "room_id": "R404"
            }
          ]
        }
        "#);
    }
}
