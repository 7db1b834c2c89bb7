//! Handles every actor thread shares.

use std::sync::Arc;

use haunt_world::House;

use crate::config::ActorLimits;
use crate::control::SimulationControl;
use crate::sink::EventSink;

/// The house, run control, event sink and limits for one run.
#[derive(Clone)]
pub struct ActorContext {
    /// The haunted house.
    pub house: Arc<House>,
    /// Stop flag and evidence ledger.
    pub control: Arc<SimulationControl>,
    /// Where events are reported.
    pub sink: Arc<dyn EventSink>,
    /// Thresholds.
    pub limits: ActorLimits,
}

impl ActorContext {
    /// Bundle the shared handles.
    pub fn new(
        house: Arc<House>,
        control: Arc<SimulationControl>,
        sink: Arc<dyn EventSink>,
        limits: ActorLimits,
    ) -> Self {
        Self {
            house,
            control,
            sink,
            limits,
        }
    }
}

impl std::fmt::Debug for ActorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorContext")
            .field("rooms", &self.house.room_count())
            .field("stop_requested", &self.control.is_stop_requested())
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
