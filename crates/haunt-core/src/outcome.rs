//! Outcome evaluation.
//!
//! After every actor has stopped, the reports are folded into a
//! [`SimulationOutcome`]: which evidence classes the unspooked hunters saw
//! as ghostly, which ghost that coverage points to, and who won.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use haunt_actors::{ActorLimits, GhostReport, HunterReport};
use haunt_types::{EvidenceClass, GhostClass};
use serde::Serialize;

/// Which ghost the collected evidence points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hypothesis {
    /// Coverage matched exactly one signature.
    Identified(GhostClass),
    /// Coverage matched no signature.
    Unknown,
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identified(class) => write!(f, "{class}"),
            Self::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

/// Who won the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// The team collected the goal's worth of ghostly evidence.
    Hunters,
    /// Every hunter was spooked.
    Ghost,
    /// Neither side met its condition.
    Undetermined,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hunters => "hunters",
            Self::Ghost => "ghost",
            Self::Undetermined => "undetermined",
        };
        f.write_str(label)
    }
}

/// Evidence classes observed as ghostly by hunters who were not spooked.
pub fn coverage(hunters: &[HunterReport], fear_max: u32) -> BTreeSet<EvidenceClass> {
    hunters
        .iter()
        .filter(|h| h.fear < fear_max)
        .flat_map(|h| h.evidence.iter())
        .filter(|e| e.is_ghostly())
        .map(haunt_types::Evidence::class)
        .collect()
}

/// The ghost whose three-class signature equals `coverage` exactly.
pub fn hypothesize(coverage: &BTreeSet<EvidenceClass>) -> Hypothesis {
    GhostClass::ALL
        .into_iter()
        .find(|ghost| {
            let signature: BTreeSet<EvidenceClass> = ghost.signature().into_iter().collect();
            signature == *coverage
        })
        .map_or(Hypothesis::Unknown, Hypothesis::Identified)
}

/// One item from a hunter's collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemizedEvidence {
    /// Holder.
    pub hunter: String,
    /// Evidence class.
    pub class: EvidenceClass,
    /// Raw reading.
    pub reading: f64,
    /// Whether the reading falls in the ghostly band.
    pub ghostly: bool,
}

/// Everything known once the run is over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    /// Who won.
    pub winner: Winner,
    /// The team's guess.
    pub hypothesis: Hypothesis,
    /// The ghost's real kind.
    pub actual: GhostClass,
    /// Classes behind the guess.
    pub coverage: Vec<EvidenceClass>,
    /// Ghostly items collected across all hunters.
    pub ghostly_total: u32,
    /// Hunters whose fear reached the maximum.
    pub spooked: usize,
    /// Every item held by every hunter.
    pub evidence: Vec<ItemizedEvidence>,
    /// Per-hunter reports.
    pub hunters: Vec<HunterReport>,
    /// Ghost report.
    pub ghost: GhostReport,
    /// When the actors were started.
    pub started_at: DateTime<Utc>,
    /// When the last actor was joined.
    pub finished_at: DateTime<Utc>,
}

impl SimulationOutcome {
    /// Whether the hypothesis names the actual ghost.
    pub fn hypothesis_correct(&self) -> bool {
        self.hypothesis == Hypothesis::Identified(self.actual)
    }
}

/// Timing of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunWindow {
    /// Start.
    pub started_at: DateTime<Utc>,
    /// End.
    pub finished_at: DateTime<Utc>,
}

/// Fold actor reports into the final outcome.
pub fn evaluate(
    hunters: Vec<HunterReport>,
    ghost: GhostReport,
    ghostly_total: u32,
    limits: &ActorLimits,
    window: RunWindow,
) -> SimulationOutcome {
    let covered = coverage(&hunters, limits.fear_max);
    let hypothesis = hypothesize(&covered);
    let spooked = hunters.iter().filter(|h| h.fear >= limits.fear_max).count();

    let winner = if ghostly_total >= limits.evidence_goal {
        Winner::Hunters
    } else if !hunters.is_empty() && spooked == hunters.len() {
        Winner::Ghost
    } else {
        Winner::Undetermined
    };

    let evidence = hunters
        .iter()
        .flat_map(|h| {
            h.evidence.iter().map(|e| ItemizedEvidence {
                hunter: h.name.clone(),
                class: e.class(),
                reading: e.reading(),
                ghostly: e.is_ghostly(),
            })
        })
        .collect();

    SimulationOutcome {
        winner,
        hypothesis,
        actual: ghost.class,
        coverage: covered.into_iter().collect(),
        ghostly_total,
        spooked,
        evidence,
        hunters,
        ghost,
        started_at: window.started_at,
        finished_at: window.finished_at,
    }
}
