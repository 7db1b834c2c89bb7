//! Rooms, the house graph, and instrument readings for the Haunt simulation.
//!
//! This crate models the physical side of a haunting: rooms as
//! capacity-bounded, mutex-guarded containers of hunters and evidence, the
//! fixed adjacency between them, the protocol for moving between two rooms
//! without deadlocking, and the generation of ghostly and mundane readings.
//!
//! # Modules
//!
//! - [`casebook`] -- A hunter's personal evidence collection.
//! - [`error`] -- Error types for house construction and room operations.
//! - [`house`] -- The [`House`] graph and the two-room move protocol.
//! - [`layout`] -- [`HouseLayout`] data and the reference 13-room house.
//! - [`readings`] -- Ghostly and mundane reading generation.
//! - [`room`] -- [`Room`] with its lock-guarded [`RoomState`].
//!
//! [`Room`]: room::Room
//! [`RoomState`]: room::RoomState

pub mod casebook;
pub mod error;
pub mod house;
pub mod layout;
pub mod readings;
pub mod room;

pub use casebook::Casebook;
pub use error::WorldError;
pub use house::{House, MoveOutcome};
pub use layout::{HouseLayout, MAX_HUNTERS};
pub use room::{Occupant, Room, RoomState};
