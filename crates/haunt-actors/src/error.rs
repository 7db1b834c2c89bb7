//! Error types for the haunt-actors crate.
//!
//! Contention between actors is never an error here. These variants only
//! surface when an actor's view of the house disagrees with the house
//! itself, which points at a setup mistake rather than bad luck.

use haunt_world::WorldError;

/// Errors that can stop an actor.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// A house operation failed.
    #[error("house error: {0}")]
    World(#[from] WorldError),

    /// The actor could not take its place in the house.
    #[error("{actor} could not enter {room}: {source}")]
    Entry {
        /// Name of the actor.
        actor: String,
        /// Room it tried to enter.
        room: String,
        /// Underlying failure.
        source: WorldError,
    },
}
