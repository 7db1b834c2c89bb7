//! Error types for the `haunt-world` crate.
//!
//! Contention is not an error here: a busy or full destination during a
//! move is reported through [`MoveOutcome`](crate::house::MoveOutcome) and
//! retried by the actor on its next tick. The variants below are lookup and
//! construction failures that indicate a caller bug or bad layout data.

use haunt_types::{GhostId, HunterId, RoomId};

/// Errors that can occur during house construction or room operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// A room index is outside the house.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room name used in the layout does not exist.
    #[error("unknown room name: {0}")]
    UnknownRoom(String),

    /// Two rooms in the layout share a name.
    #[error("duplicate room name: {0}")]
    DuplicateRoom(String),

    /// A layout connection links a room to itself.
    #[error("room {0} cannot connect to itself")]
    SelfConnection(String),

    /// The layout has no rooms.
    #[error("house layout has no rooms")]
    EmptyHouse,

    /// The layout's per-room capacity is zero.
    #[error("room capacity must be at least 1")]
    ZeroCapacity,

    /// The destination of a move is not adjacent to the source.
    #[error("{to} is not adjacent to {from}")]
    NotAdjacent {
        /// Source room.
        from: RoomId,
        /// Requested destination.
        to: RoomId,
    },

    /// The room already holds its maximum number of hunters.
    #[error("room {room} is at capacity ({capacity})")]
    RoomAtCapacity {
        /// The full room.
        room: String,
        /// Maximum capacity.
        capacity: usize,
    },

    /// The hunter is not in the room it claims to be in.
    #[error("hunter {hunter} is not in room {room}")]
    HunterNotInRoom {
        /// The hunter.
        hunter: HunterId,
        /// The room.
        room: RoomId,
    },

    /// The ghost is not in the room it claims to be in.
    #[error("ghost {ghost} is not in room {room}")]
    GhostNotInRoom {
        /// The ghost.
        ghost: GhostId,
        /// The room.
        room: RoomId,
    },

    /// The room already has a resident ghost.
    #[error("room {0} is already haunted")]
    AlreadyHaunted(RoomId),
}
