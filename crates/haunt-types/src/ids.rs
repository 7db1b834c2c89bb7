//! Type-safe identifiers for the actors and rooms of a haunting.
//!
//! Actors get strongly-typed UUID v7 wrappers so a hunter id can never be
//! passed where a ghost id is expected. Rooms are addressed by a dense
//! index instead: the house is built once and never grows, so a slice
//! position is a stable identity for the whole run.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a hunter.
    HunterId
}

define_id! {
    /// Unique identifier for the ghost.
    GhostId
}

/// Position of a room in the house graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl RoomId {
    /// Return the index into the house's room list.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for RoomId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_values() {
        let a = HunterId::new();
        let b = HunterId::new();
        assert_ne!(a, b);
        assert_ne!(GhostId::new().into_inner(), Uuid::nil());
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = HunterId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }

    #[test]
    fn room_id_serializes_as_index() {
        let json = serde_json::to_string(&RoomId(7)).ok();
        assert_eq!(json.as_deref(), Some("7"));
    }
}
