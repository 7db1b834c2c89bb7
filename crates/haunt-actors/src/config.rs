//! Thresholds shared by every actor in a run.
//!
//! These values map onto the `limits` key of `haunt-config.yaml`. The
//! [`ActorLimits`] struct bundles them so callers (the runner, tests) can
//! override the defaults in one place.

use serde::{Deserialize, Serialize};

/// Limits that decide when actors stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorLimits {
    /// Boredom budget for hunters and the ghost (default: 100).
    ///
    /// A hunter's idle counter and the ghost's boredom counter both start
    /// here and reset here on contact with the other side.
    #[serde(default = "default_boredom_max")]
    pub boredom_max: u32,

    /// Fear at which a hunter is spooked and leaves (default: 100).
    #[serde(default = "default_fear_max")]
    pub fear_max: u32,

    /// Ghostly items needed to finish the hunt (default: 3).
    ///
    /// Applies both to a single hunter's collection and to the team total.
    #[serde(default = "default_evidence_goal")]
    pub evidence_goal: u32,

    /// Ticks after which an actor halts on its own; 0 means no limit
    /// (default: 0).
    #[serde(default)]
    pub tick_limit: u64,
}

const fn default_boredom_max() -> u32 {
    100
}

const fn default_fear_max() -> u32 {
    100
}

const fn default_evidence_goal() -> u32 {
    3
}

impl Default for ActorLimits {
    fn default() -> Self {
        Self {
            boredom_max: default_boredom_max(),
            fear_max: default_fear_max(),
            evidence_goal: default_evidence_goal(),
            tick_limit: 0,
        }
    }
}

impl ActorLimits {
    /// Whether an actor that has completed `ticks` ticks must halt.
    pub const fn tick_limit_reached(&self, ticks: u64) -> bool {
        self.tick_limit > 0 && ticks >= self.tick_limit
    }
}
