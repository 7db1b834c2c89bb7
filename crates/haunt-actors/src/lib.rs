//! Hunter and ghost actors for the haunt simulation.
//!
//! This crate holds the per-actor state machines. Each actor owns its
//! private counters and touches shared state only through the house's
//! room locks and the run's [`SimulationControl`]. Threads are spawned by
//! the caller; every actor exposes a `tick` that performs one step without
//! sleeping and a `run` loop that sleeps between ticks.
//!
//! # Modules
//!
//! - [`config`] -- Boredom, fear, evidence and tick limits ([`ActorLimits`])
//! - [`context`] -- Shared handles passed to every actor ([`ActorContext`])
//! - [`control`] -- Stop flag and evidence ledger ([`SimulationControl`])
//! - [`error`] -- Error types ([`ActorError`])
//! - [`ghost`] -- The ghost ([`GhostActor`], [`GhostReport`])
//! - [`hunter`] -- Hunters ([`HunterActor`], [`HunterReport`])
//! - [`sink`] -- Event destinations ([`EventSink`], [`RecordingSink`])

pub mod config;
pub mod context;
pub mod control;
pub mod error;
pub mod ghost;
pub mod hunter;
pub mod sink;

pub use config::ActorLimits;
pub use context::ActorContext;
pub use control::{Credit, EvidenceLedger, SimulationControl};
pub use error::ActorError;
pub use ghost::{GhostActor, GhostReport};
pub use hunter::{HunterAction, HunterActor, HunterProfile, HunterReport};
pub use sink::{EventSink, NullSink, RecordingSink};
