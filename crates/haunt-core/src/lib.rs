//! Configuration, roster, thread runner and outcome evaluation for a
//! haunting.
//!
//! This crate turns a `haunt-config.yaml` document into a finished run:
//! it builds the house, drafts the hunters, starts one thread per actor,
//! joins them and decides who won.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `haunt-config.yaml` into
//!   strongly-typed structs.
//! - [`outcome`] -- Evidence coverage, ghost hypothesis and winner
//!   ([`SimulationOutcome`]).
//! - [`roster`] -- Specialty draws without replacement ([`SpecialtyPool`]).
//! - [`runner`] -- [`Haunting`]: prepare, spawn, join, evaluate.

pub mod config;
pub mod outcome;
pub mod roster;
pub mod runner;

pub use config::{ConfigError, GhostConfig, HuntersConfig, LoggingConfig, SimulationConfig};
pub use outcome::{
    Hypothesis, ItemizedEvidence, RunWindow, SimulationOutcome, Winner, coverage, evaluate,
    hypothesize,
};
pub use roster::{SetupError, SpecialtyPool, draft};
pub use runner::{Haunting, RunnerError, log_simulation_end, random_ghost_class};
