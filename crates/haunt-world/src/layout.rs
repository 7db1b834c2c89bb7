//! House layout data and the reference 13-room house.
//!
//! The set of rooms and how they connect is configuration, not logic. A
//! [`HouseLayout`] names the rooms, lists undirected connections between
//! them by name, and picks the room hunters start in. [`House::from_layout`]
//! validates and freezes it.
//!
//! [`House::from_layout`]: crate::house::House::from_layout

use serde::{Deserialize, Serialize};

/// Default maximum number of hunters in one room.
pub const MAX_HUNTERS: usize = 4;

/// Rooms of the reference house, in index order.
const REFERENCE_ROOMS: [&str; 13] = [
    "Van",
    "Hallway",
    "Master Bedroom",
    "Boy's Bedroom",
    "Bathroom",
    "Basement",
    "Basement Hallway",
    "Right Storage Room",
    "Left Storage Room",
    "Kitchen",
    "Living Room",
    "Garage",
    "Utility Room",
];

/// Undirected connections of the reference house.
const REFERENCE_CONNECTIONS: [(&str, &str); 12] = [
    ("Van", "Hallway"),
    ("Hallway", "Master Bedroom"),
    ("Hallway", "Boy's Bedroom"),
    ("Hallway", "Bathroom"),
    ("Hallway", "Kitchen"),
    ("Hallway", "Basement"),
    ("Basement", "Basement Hallway"),
    ("Basement Hallway", "Right Storage Room"),
    ("Basement Hallway", "Left Storage Room"),
    ("Kitchen", "Living Room"),
    ("Kitchen", "Garage"),
    ("Garage", "Utility Room"),
];

/// Rooms, connections and start room of a house.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseLayout {
    /// Room names, unique. Order fixes each room's index.
    #[serde(default = "default_rooms")]
    pub rooms: Vec<String>,

    /// Undirected connections, by room name.
    #[serde(default = "default_connections")]
    pub connections: Vec<(String, String)>,

    /// Room every hunter starts in.
    #[serde(default = "default_start_room")]
    pub start_room: String,

    /// Maximum number of hunters per room.
    #[serde(default = "default_room_capacity")]
    pub room_capacity: usize,
}

impl Default for HouseLayout {
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
            connections: default_connections(),
            start_room: default_start_room(),
            room_capacity: default_room_capacity(),
        }
    }
}

impl HouseLayout {
    /// The reference house: 13 rooms, hunters start in the Van.
    pub fn reference() -> Self {
        Self::default()
    }
}

fn default_rooms() -> Vec<String> {
    REFERENCE_ROOMS.iter().map(|s| (*s).to_owned()).collect()
}

fn default_connections() -> Vec<(String, String)> {
    REFERENCE_CONNECTIONS
        .iter()
        .map(|(a, b)| ((*a).to_owned(), (*b).to_owned()))
        .collect()
}

fn default_start_room() -> String {
    String::from("Van")
}

const fn default_room_capacity() -> usize {
    MAX_HUNTERS
}
