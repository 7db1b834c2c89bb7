//! Thread runner for a haunting.
//!
//! [`Haunting::prepare`] turns a [`SimulationConfig`] into a built house, a
//! drafted roster and a chosen ghost without starting anything.
//! [`Haunting::run`] then places the actors, starts one named OS thread for
//! the ghost and one per hunter, joins them all and evaluates the outcome.
//!
//! Each actor owns a `StdRng` seeded from the run's master generator, so a
//! fixed seed fixes every actor's draws. Thread interleaving is still up to
//! the scheduler.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Utc;
use haunt_actors::{
    ActorContext, ActorError, EventSink, GhostActor, HunterActor, HunterProfile,
    SimulationControl,
};
use haunt_types::{GhostClass, RoomId};
use haunt_world::{House, Room, WorldError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::config::{ConfigError, SimulationConfig};
use crate::outcome::{self, RunWindow, SimulationOutcome};
use crate::roster::{self, SetupError};

/// Errors that can occur while preparing or running a haunting.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The configuration failed validation.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The cast could not be assembled.
    #[error("setup error: {source}")]
    Setup {
        /// The underlying setup error.
        #[from]
        source: SetupError,
    },

    /// The house could not be built.
    #[error("house error: {source}")]
    World {
        /// The underlying house error.
        #[from]
        source: WorldError,
    },

    /// An actor failed.
    #[error("actor error: {source}")]
    Actor {
        /// The underlying actor error.
        #[from]
        source: ActorError,
    },

    /// The OS refused to start a thread.
    #[error("failed to spawn thread for {actor}: {source}")]
    Spawn {
        /// Thread name.
        actor: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An actor thread panicked.
    #[error("actor thread {actor} panicked")]
    ActorPanicked {
        /// Thread name.
        actor: String,
    },
}

/// A prepared run.
#[derive(Debug)]
pub struct Haunting {
    config: SimulationConfig,
    house: Arc<House>,
    control: Arc<SimulationControl>,
    roster: Vec<HunterProfile>,
    ghost_class: GhostClass,
    ghost_room: RoomId,
    seed: u64,
    rng: StdRng,
}

impl Haunting {
    /// Validate the configuration, build the house, draft the hunters and
    /// pick the ghost.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`], [`RunnerError::World`] or
    /// [`RunnerError::Setup`] for the corresponding failure.
    pub fn prepare(config: SimulationConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let house = House::from_layout(&config.house)?;
        let start_capacity = house.room(house.start_room())?.capacity();
        let roster = roster::draft(&config.hunters.names, start_capacity, &mut rng)?;

        let ghost_class = config
            .ghost
            .class
            .unwrap_or_else(|| random_ghost_class(&mut rng));
        let ghost_room = match &config.ghost.start_room {
            Some(name) => house
                .room_by_name(name)
                .map(Room::id)
                .ok_or_else(|| SetupError::UnknownGhostRoom(name.clone()))?,
            None => RoomId(rng.random_range(0..house.room_count())),
        };

        info!(
            seed,
            rooms = house.room_count(),
            hunters = roster.len(),
            ghost = %ghost_class,
            ghost_room = %house.room_name(ghost_room),
            "Haunting prepared"
        );

        Ok(Self {
            control: Arc::new(SimulationControl::new(config.limits.evidence_goal)),
            house: Arc::new(house),
            roster,
            ghost_class,
            ghost_room,
            seed,
            rng,
            config,
        })
    }

    /// The master seed in use.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The ghost's true kind.
    pub const fn ghost_class(&self) -> GhostClass {
        self.ghost_class
    }

    /// Where the ghost will start.
    pub const fn ghost_room(&self) -> RoomId {
        self.ghost_room
    }

    /// The drafted hunters.
    pub fn roster(&self) -> &[HunterProfile] {
        &self.roster
    }

    /// The house.
    pub fn house(&self) -> &House {
        &self.house
    }

    /// A handle to the house that outlives [`Haunting::run`], for observers
    /// that watch rooms while actors are moving.
    pub fn shared_house(&self) -> Arc<House> {
        Arc::clone(&self.house)
    }

    /// Place the actors, run every thread to completion and evaluate.
    ///
    /// If any actor fails, a stop is requested so the others wind down
    /// before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Actor`] if an actor cannot enter the house or
    /// fails mid-run, [`RunnerError::Spawn`] if a thread cannot start and
    /// [`RunnerError::ActorPanicked`] if one panics.
    pub fn run(mut self, sink: Arc<dyn EventSink>) -> Result<SimulationOutcome, RunnerError> {
        let limits = self.config.limits;
        let ctx = ActorContext::new(
            Arc::clone(&self.house),
            Arc::clone(&self.control),
            sink,
            limits,
        );
        let hunter_rest = Duration::from_millis(self.config.hunters.rest_ms);
        let ghost_rest = Duration::from_millis(self.config.ghost.rest_ms);

        let ghost = GhostActor::haunt(self.ghost_class, self.ghost_room, ghost_rest, ctx.clone())?;
        let hunters = self
            .roster
            .drain(..)
            .map(|profile| HunterActor::enter(profile, hunter_rest, ctx.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        let started_at = Utc::now();
        info!(hunters = hunters.len(), "Haunting started");

        let ghost_rng = StdRng::from_rng(&mut self.rng);
        let control = Arc::clone(&self.control);
        let ghost_handle = spawn("ghost".to_owned(), &self.control, move || {
            let mut rng = ghost_rng;
            let report = ghost.run(&mut rng);
            stop_on_failure(&control, report.is_err());
            report
        })?;

        let mut hunter_handles = Vec::with_capacity(hunters.len());
        for hunter in hunters {
            let name = format!("hunter-{}", hunter.profile().name);
            let hunter_rng = StdRng::from_rng(&mut self.rng);
            let control = Arc::clone(&self.control);
            let spawned = spawn(name.clone(), &self.control, move || {
                let mut rng = hunter_rng;
                let report = hunter.run(&mut rng);
                stop_on_failure(&control, report.is_err());
                report
            });
            match spawned {
                Ok(handle) => hunter_handles.push((name, handle)),
                Err(err) => {
                    // Already running threads must be joined before bailing out.
                    drop(join("ghost", ghost_handle));
                    for (name, handle) in hunter_handles {
                        drop(join(&name, handle));
                    }
                    return Err(err);
                }
            }
        }

        let ghost_report = join("ghost", ghost_handle);
        let hunter_reports: Vec<_> = hunter_handles
            .into_iter()
            .map(|(name, handle)| join(&name, handle))
            .collect();
        let ghost_report = ghost_report?;
        let hunter_reports = hunter_reports.into_iter().collect::<Result<Vec<_>, _>>()?;

        let window = RunWindow {
            started_at,
            finished_at: Utc::now(),
        };
        let ghostly_total = self.control.ghostly_collected();
        let result = outcome::evaluate(hunter_reports, ghost_report, ghostly_total, &limits, window);
        log_simulation_end(&result);
        Ok(result)
    }
}

/// Draw a ghost kind uniformly.
pub fn random_ghost_class<R: Rng + ?Sized>(rng: &mut R) -> GhostClass {
    match rng.random_range(0..4_u8) {
        0 => GhostClass::Poltergeist,
        1 => GhostClass::Banshee,
        2 => GhostClass::Bullies,
        _ => GhostClass::Phantom,
    }
}

fn stop_on_failure(control: &SimulationControl, failed: bool) {
    if failed {
        control.request_stop();
    }
}

fn spawn<T, F>(
    name: String,
    control: &SimulationControl,
    body: F,
) -> Result<JoinHandle<Result<T, ActorError>>, RunnerError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ActorError> + Send + 'static,
{
    thread::Builder::new()
        .name(name.clone())
        .spawn(body)
        .map_err(|source| {
            warn!(actor = %name, error = %source, "Thread spawn failed, stopping run");
            control.request_stop();
            RunnerError::Spawn {
                actor: name,
                source,
            }
        })
}

fn join<T>(name: &str, handle: JoinHandle<Result<T, ActorError>>) -> Result<T, RunnerError> {
    match handle.join() {
        Ok(report) => Ok(report?),
        Err(_) => {
            warn!(actor = %name, "Actor thread panicked");
            Err(RunnerError::ActorPanicked {
                actor: name.to_owned(),
            })
        }
    }
}

/// Log the outcome of a finished run.
pub fn log_simulation_end(result: &SimulationOutcome) {
    info!(
        winner = %result.winner,
        hypothesis = %result.hypothesis,
        actual = %result.actual,
        ghostly_total = result.ghostly_total,
        spooked = result.spooked,
        elapsed_ms = result
            .finished_at
            .signed_duration_since(result.started_at)
            .num_milliseconds(),
        "Haunting ended"
    );
    if result.hypothesis_correct() {
        info!(ghost = %result.actual, "Hunters identified the ghost");
    } else {
        warn!(
            hypothesis = %result.hypothesis,
            actual = %result.actual,
            "Hunters did not identify the ghost"
        );
    }
}

#[cfg(test)]
mod tests {
    use haunt_actors::NullSink;
    use haunt_world::HouseLayout;

    use super::*;
    use crate::outcome::Winner;

    fn small_config() -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.seed = Some(7);
        config.hunters.rest_ms = 0;
        config.ghost.rest_ms = 0;
        config.limits.tick_limit = 2_000;
        config
    }

    #[test]
    fn prepare_drafts_roster_and_ghost() {
        let Ok(haunting) = Haunting::prepare(small_config()) else {
            panic!("default config should prepare");
        };
        assert_eq!(haunting.seed(), 7);
        assert_eq!(haunting.roster().len(), 4);
        assert_eq!(haunting.house().room_count(), 13);
        assert!(haunting.ghost_room().index() < 13);
    }

    #[test]
    fn same_seed_same_draft() {
        let a = Haunting::prepare(small_config()).ok();
        let b = Haunting::prepare(small_config()).ok();
        let specialties = |h: &Option<Haunting>| {
            h.as_ref()
                .map(|h| h.roster().iter().map(|p| p.specialty).collect::<Vec<_>>())
        };
        assert_eq!(specialties(&a), specialties(&b));
        assert_eq!(a.map(|h| h.ghost_class()), b.map(|h| h.ghost_class()));
    }

    #[test]
    fn configured_ghost_is_respected() {
        let mut config = small_config();
        config.ghost.class = Some(GhostClass::Bullies);
        config.ghost.start_room = Some("Garage".to_owned());
        let Ok(haunting) = Haunting::prepare(config) else {
            panic!("should prepare");
        };
        assert_eq!(haunting.ghost_class(), GhostClass::Bullies);
        assert_eq!(haunting.house().room_name(haunting.ghost_room()), "Garage");
    }

    #[test]
    fn too_many_hunters_is_a_setup_error() {
        let mut config = small_config();
        config.hunters.names = (1..=5).map(|i| format!("H{i}")).collect();
        assert!(matches!(
            Haunting::prepare(config),
            Err(RunnerError::Setup {
                source: SetupError::TooManyHunters { .. }
            })
        ));
    }

    #[test]
    fn bad_layout_is_a_world_error() {
        let mut config = small_config();
        config.house = HouseLayout {
            start_room: "Nowhere".to_owned(),
            ..HouseLayout::reference()
        };
        assert!(matches!(Haunting::prepare(config), Err(RunnerError::World { .. })));
    }

    #[test]
    fn bounded_run_completes() {
        let Ok(haunting) = Haunting::prepare(small_config()) else {
            panic!("should prepare");
        };
        let Ok(outcome) = haunting.run(Arc::new(NullSink)) else {
            panic!("run should complete");
        };
        assert_eq!(outcome.hunters.len(), 4);
        assert!(outcome.hunters.iter().all(|h| h.ticks <= 2_000));
        assert!(outcome.finished_at >= outcome.started_at);
        if outcome.ghostly_total >= 3 {
            assert_eq!(outcome.winner, Winner::Hunters);
        }
    }
}
