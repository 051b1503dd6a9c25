use serde::{Deserialize, Serialize};

use super::ids::RoomId;

/// Room catalogue entry, joined against bookings by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: String,
    /// Nightly price
    #[serde(alias = "precio")]
    pub price: f64,
    /// Image file name, relative to the room image directory
    #[serde(default, alias = "imagen")]
    pub image: String,
    #[serde(default, alias = "servicios")]
    pub services: Vec<String>,
}
