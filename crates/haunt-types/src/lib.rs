//! Shared type definitions for the Haunt simulation.
//!
//! This crate is the vocabulary every other crate in the workspace speaks:
//! identifiers, the evidence and ghost enumerations, the evidence value
//! type with its classification rule, and the events the actors emit.
//!
//! # Modules
//!
//! - [`ids`] -- UUID wrappers for actors, dense index for rooms
//! - [`enums`] -- Evidence classes and ghost classes with their lookup tables
//! - [`evidence`] -- The [`Evidence`] value and [`classify`]
//! - [`events`] -- [`SimEvent`] and actor exit reasons
//! - [`error`] -- Decoding errors

pub mod enums;
pub mod error;
pub mod events;
pub mod evidence;
pub mod ids;

pub use enums::{EvidenceClass, GhostClass};
pub use error::EvidenceError;
pub use events::{GhostExit, HunterExit, SimEvent};
pub use evidence::{Classification, Evidence, classify};
pub use ids::{GhostId, HunterId, RoomId};
