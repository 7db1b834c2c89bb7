//! Event sink that writes every simulation event to `tracing`.
//!
//! Lifecycle events (joins, exits, the evidence goal) log at `info`;
//! per-tick events log at `debug` so `RUST_LOG=haunt=debug` shows the full
//! play-by-play.

use haunt_actors::EventSink;
use haunt_types::SimEvent;
use tracing::{debug, info};

/// Forwards events to the installed subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: SimEvent) {
        match event {
            SimEvent::HunterJoined {
                hunter,
                specialty,
                room,
            } => info!(target: "haunt", %hunter, %specialty, %room, "Hunter joined"),
            SimEvent::GhostAwoke { class, room } => {
                debug!(target: "haunt", %class, %room, "Ghost awoke");
            }
            SimEvent::EvidenceDeposited { room, evidence } => {
                debug!(target: "haunt", %room, %evidence, "Evidence left");
            }
            SimEvent::EvidenceCollected {
                hunter,
                room,
                evidence,
                ghostly_held,
            } => info!(target: "haunt", %hunter, %room, %evidence, ghostly_held, "Evidence collected"),
            SimEvent::MundaneReading {
                hunter,
                room,
                evidence,
            } => debug!(target: "haunt", %hunter, %room, %evidence, "Ordinary reading"),
            SimEvent::HunterMoved { hunter, from, to } => {
                debug!(target: "haunt", %hunter, %from, %to, "Hunter moved");
            }
            SimEvent::HunterMoveBlocked { hunter, from, to } => {
                debug!(target: "haunt", %hunter, %from, %to, "Hunter move blocked");
            }
            SimEvent::GhostMoved { from, to } => {
                debug!(target: "haunt", %from, %to, "Ghost moved");
            }
            SimEvent::GhostMoveBlocked { from, to } => {
                debug!(target: "haunt", %from, %to, "Ghost move blocked");
            }
            SimEvent::EvidenceReviewed {
                reviewer,
                partner,
                evidence,
            } => debug!(target: "haunt", %reviewer, %partner, %evidence, "Evidence reviewed"),
            SimEvent::FearIncreased { hunter, room, fear } => {
                debug!(target: "haunt", %hunter, %room, fear, "Hunter frightened");
            }
            SimEvent::HunterExited { hunter, reason } => {
                info!(target: "haunt", %hunter, %reason, "Hunter left");
            }
            SimEvent::GhostExited { reason } => info!(target: "haunt", %reason, "Ghost ended"),
            SimEvent::EvidenceThresholdReached { hunter, total } => {
                info!(target: "haunt", %hunter, total, "Evidence goal reached");
            }
        }
    }
}
