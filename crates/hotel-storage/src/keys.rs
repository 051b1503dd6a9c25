//! Storage keys shared by every page of the site.

/// Primary session record (JSON-encoded `User`)
pub const CURRENT_USER: &str = "hotel_current_user";

/// All bookings of all users (JSON array)
pub const BOOKINGS: &str = "hotel_bookings";

/// Room catalogue (JSON array)
pub const ROOMS: &str = "hotel_rooms";

/// Older pages wrote the session under these keys as well.
pub const LEGACY_SESSION_KEYS: [&str; 5] =
    ["currentUser", "isLoggedIn", "userEmail", "userName", "userId"];

/// Every key that must disappear on logout
pub fn session_keys() -> impl Iterator<Item = &'static str> {
    std::iter::once(CURRENT_USER).chain(LEGACY_SESSION_KEYS)
}

/// Keys whose change (from another tab) affects the navigation bar
pub fn affects_navbar(key: Option<&str>) -> bool {
    matches!(key, Some(CURRENT_USER) | Some("isLoggedIn"))
}
