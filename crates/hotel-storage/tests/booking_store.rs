use hotel_storage::{BookingRepository, KeyValueStore, LocalBookingStore, MemoryStore, RoomRepository};
use hotel_types::{BookingStatus, RoomId, UserId};
use serde_json::json;
use std::rc::Rc;

fn seeded_store() -> Rc<MemoryStore> {
    let store = MemoryStore::from_snapshot_value(json!({
        "hotel_rooms": [
            {"id": "R101", "nombre": "Suite Presidencial", "descripcion": "Vista al mar",
             "precio": 250.0, "imagen": "suite.jpg", "servicios": ["WiFi", "Spa"]},
            {"id": "R102", "name": "Standard", "price": 90.0}
        ],
        "hotel_bookings": [
            {"id": 3, "userId": "u1", "roomId": "R102", "fechaInicio": "2024-02-01",
             "fechaFin": "2024-02-03", "personas": 1, "total": 180, "estado": "confirmada",
             "fechaReserva": "2024-01-20T10:00:00Z"},
            {"id": 1, "userId": "u2", "roomId": "R101", "fechaInicio": "2024-01-10",
             "fechaFin": "2024-01-12", "personas": 2, "total": 500, "estado": "confirmada",
             "fechaReserva": "2024-01-01T10:00:00Z"},
            {"id": 2, "userId": "u1", "roomId": "R101", "fechaInicio": "2024-01-05",
             "fechaFin": "2024-01-06", "personas": 2, "total": 250, "estado": "cancelada",
             "fechaReserva": "2024-01-02T10:00:00Z"}
        ]
    }))
    .expect("valid snapshot");
    Rc::new(store)
}

#[test]
fn test_user_bookings_keep_storage_order() {
    let repo = LocalBookingStore::new(seeded_store());

    let bookings = repo.user_bookings(&UserId::new("u1")).unwrap();
    let ids: Vec<&str> = bookings.iter().map(|b| b.id.as_str()).collect();

    assert_eq!(ids, vec!["3", "2"]);
    assert_eq!(bookings[1].status, BookingStatus::Cancelled);
}

#[test]
fn test_room_lookup() {
    let repo = LocalBookingStore::new(seeded_store());

    let suite = repo.room_by_id(&RoomId::new("R101")).unwrap().expect("room exists");
    assert_eq!(suite.services, vec!["WiFi".to_string(), "Spa".to_string()]);

    let standard = repo.room_by_id(&RoomId::new("R102")).unwrap().expect("room exists");
    assert!(standard.services.is_empty());
    assert_eq!(standard.description, "");

    assert!(repo.room_by_id(&RoomId::new("R999")).unwrap().is_none());
}

#[test]
fn test_missing_keys_read_as_empty() {
    let repo = LocalBookingStore::new(Rc::new(MemoryStore::new()));

    assert!(repo.user_bookings(&UserId::new("u1")).unwrap().is_empty());
    assert!(repo.room_by_id(&RoomId::new("R101")).unwrap().is_none());
}

#[test]
fn test_malformed_bookings_are_an_error() {
    let store = Rc::new(MemoryStore::new());
    store.set_item("hotel_bookings", "{\"oops\": true}").unwrap();
    let repo = LocalBookingStore::new(store);

    let err = repo.user_bookings(&UserId::new("u1")).unwrap_err();
    assert!(err.to_string().starts_with("Stored data is malformed"));
}

#[test]
fn test_unreadable_booking_is_skipped() {
    let store = MemoryStore::from_snapshot_value(json!({
        "hotel_bookings": [
            {"id": 1, "userId": "u1", "roomId": "R101", "checkIn": "2024-01-10",
             "checkOut": "2024-01-12", "guests": 2, "total": 500, "status": "confirmed",
             "createdAt": "2024-01-01T10:00:00Z"},
            {"id": 2, "userId": "u1", "roomId": "R101", "checkIn": "2024-02-10",
             "checkOut": "2024-02-12", "guests": 2, "total": 500, "status": "confirmed"}
        ]
    }))
    .expect("valid snapshot");
    let repo = LocalBookingStore::new(Rc::new(store));

    let bookings = repo.user_bookings(&UserId::new("u1")).unwrap();
    let ids: Vec<&str> = bookings.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn test_unreadable_room_does_not_hide_others() {
    let store = MemoryStore::from_snapshot_value(json!({
        "hotel_rooms": [
            {"id": "R100", "name": "No price"},
            {"id": "R101", "name": "Suite", "price": 250.0}
        ]
    }))
    .expect("valid snapshot");
    let repo = LocalBookingStore::new(Rc::new(store));

    assert!(repo.room_by_id(&RoomId::new("R100")).unwrap().is_none());
    let suite = repo.room_by_id(&RoomId::new("R101")).unwrap().expect("room exists");
    assert_eq!(suite.name, "Suite");
}

#[test]
fn test_timestamp_stay_dates_are_read() {
    let store = MemoryStore::from_snapshot_value(json!({
        "hotel_bookings": [
            {"id": 1, "userId": "u1", "roomId": "R101", "checkIn": "2024-01-10T15:00:00Z",
             "checkOut": "2024-01-11T16:00:00Z", "guests": 1, "total": 120, "status": "confirmed",
             "createdAt": "2024-01-01T10:00:00Z"}
        ]
    }))
    .expect("valid snapshot");
    let repo = LocalBookingStore::new(Rc::new(store));

    let bookings = repo.user_bookings(&UserId::new("u1")).unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].nights(), 2);
}
