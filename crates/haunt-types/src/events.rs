//! Observable events emitted by the actors.
//!
//! The simulation core never prints. Every noteworthy state change is
//! described by a [`SimEvent`] and handed to whatever sink the driver
//! installed; displaying, counting or discarding them is the sink's job.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{EvidenceClass, GhostClass};
use crate::evidence::Evidence;

/// Why a hunter stopped hunting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HunterExit {
    /// Collected enough ghostly evidence personally.
    EvidenceComplete,
    /// Fear reached the maximum.
    Spooked,
    /// Idle timer ran out.
    Bored,
    /// The simulation was halted because the evidence goal was reached.
    Halted,
    /// The configured tick bound was reached.
    TickLimit,
}

impl fmt::Display for HunterExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EvidenceComplete => "has collected enough evidence",
            Self::Spooked => "is too afraid to continue",
            Self::Bored => "got bored and left",
            Self::Halted => "stopped, the case is closed",
            Self::TickLimit => "ran out of time",
        })
    }
}

/// Why the ghost stopped haunting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GhostExit {
    /// Boredom counter ran out.
    Exhausted,
    /// The simulation was halted because the evidence goal was reached.
    Halted,
    /// The configured tick bound was reached.
    TickLimit,
}

impl fmt::Display for GhostExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exhausted => "got bored and faded away",
            Self::Halted => "was identified",
            Self::TickLimit => "ran out of time",
        })
    }
}

/// A state change observed during the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    /// A hunter entered the house.
    HunterJoined {
        /// Hunter name.
        hunter: String,
        /// The hunter's instrument.
        specialty: EvidenceClass,
        /// Starting room name.
        room: String,
    },
    /// The ghost started haunting.
    GhostAwoke {
        /// The ghost's kind.
        class: GhostClass,
        /// Starting room name.
        room: String,
    },
    /// The ghost left evidence in a room.
    EvidenceDeposited {
        /// Room name.
        room: String,
        /// What was left.
        evidence: Evidence,
    },
    /// A hunter picked up evidence left in a room.
    EvidenceCollected {
        /// Hunter name.
        hunter: String,
        /// Room name.
        room: String,
        /// What was collected.
        evidence: Evidence,
        /// Ghostly items the hunter now holds.
        ghostly_held: u32,
    },
    /// A hunter found nothing of its specialty and logged an ordinary reading.
    MundaneReading {
        /// Hunter name.
        hunter: String,
        /// Room name.
        room: String,
        /// The reading taken.
        evidence: Evidence,
    },
    /// A hunter moved to an adjacent room.
    HunterMoved {
        /// Hunter name.
        hunter: String,
        /// Room left.
        from: String,
        /// Room entered.
        to: String,
    },
    /// A hunter tried to move but the destination was busy or full.
    HunterMoveBlocked {
        /// Hunter name.
        hunter: String,
        /// Current room.
        from: String,
        /// Intended destination.
        to: String,
    },
    /// The ghost moved to an adjacent room.
    GhostMoved {
        /// Room left.
        from: String,
        /// Room entered.
        to: String,
    },
    /// The ghost tried to move but the destination was busy.
    GhostMoveBlocked {
        /// Current room.
        from: String,
        /// Intended destination.
        to: String,
    },
    /// While comparing notes, a hunter reported ghostly evidence its partner
    /// does not hold.
    EvidenceReviewed {
        /// The hunter holding the evidence.
        reviewer: String,
        /// The partner it was shown to.
        partner: String,
        /// The evidence reviewed.
        evidence: Evidence,
    },
    /// A hunter shared a room with the ghost.
    FearIncreased {
        /// Hunter name.
        hunter: String,
        /// Room name.
        room: String,
        /// Fear after the increment.
        fear: u32,
    },
    /// A hunter stopped.
    HunterExited {
        /// Hunter name.
        hunter: String,
        /// Why.
        reason: HunterExit,
    },
    /// The ghost stopped.
    GhostExited {
        /// Why.
        reason: GhostExit,
    },
    /// The team's ghostly evidence total reached the goal. No evidence
    /// event follows this one.
    EvidenceThresholdReached {
        /// Hunter whose collection completed the goal.
        hunter: String,
        /// Ghostly items collected across all hunters.
        total: u32,
    },
}

impl SimEvent {
    /// Whether this event reports evidence entering or leaving a room or a
    /// hunter's collection.
    pub const fn is_evidence_event(&self) -> bool {
        matches!(
            self,
            Self::EvidenceDeposited { .. }
                | Self::EvidenceCollected { .. }
                | Self::MundaneReading { .. }
        )
    }
}
