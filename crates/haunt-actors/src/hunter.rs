//! Hunter actor.
//!
//! Each tick a hunter draws one action uniformly from
//! [`HunterAction::ALL`], performs it, then checks whether it shares a room
//! with the ghost. Terminal conditions are evaluated at the end of every
//! tick in this order:
//!
//! 1. Three (the evidence goal) ghostly items held: `EvidenceComplete`
//! 2. Fear at or above `fear_max`: `Spooked`
//! 3. Idle timer at zero: `Bored`
//!
//! Independently of those, the stop flag and the optional tick limit halt
//! the hunter between ticks.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use haunt_types::{Evidence, EvidenceClass, HunterExit, HunterId, RoomId, SimEvent};
use haunt_world::{Casebook, MoveOutcome, Occupant, readings};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tracing::{debug, info};

use crate::context::ActorContext;
use crate::error::ActorError;

/// Probability that a hunter picks up matching evidence it finds.
pub const COLLECT_CHANCE: f64 = 0.6;

/// What a hunter does with one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HunterAction {
    /// Look for evidence of the hunter's specialty in the current room.
    Collect,
    /// Try to walk to a random adjacent room.
    Move,
    /// Compare notes with another hunter in the room.
    Share,
}

impl HunterAction {
    /// Every action, in draw order.
    pub const ALL: [Self; 3] = [Self::Collect, Self::Move, Self::Share];

    /// Draw an action uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..3_u8) {
            0 => Self::Collect,
            1 => Self::Move,
            _ => Self::Share,
        }
    }
}

/// Who a hunter is before it enters the house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunterProfile {
    /// Stable identifier.
    pub id: HunterId,
    /// Display name.
    pub name: String,
    /// The one evidence class this hunter can collect.
    pub specialty: EvidenceClass,
}

impl HunterProfile {
    /// A profile with a fresh id.
    pub fn new(name: impl Into<String>, specialty: EvidenceClass) -> Self {
        Self {
            id: HunterId::new(),
            name: name.into(),
            specialty,
        }
    }
}

/// Final state of a hunter, harvested after its thread ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HunterReport {
    /// Stable identifier.
    pub id: HunterId,
    /// Display name.
    pub name: String,
    /// Instrument carried.
    pub specialty: EvidenceClass,
    /// Room the hunter was in when it stopped.
    pub room: String,
    /// Fear at exit.
    pub fear: u32,
    /// Idle timer at exit.
    pub idle: u32,
    /// Personal collection, in collection order.
    pub evidence: Vec<Evidence>,
    /// Ghostly items in the personal collection.
    pub ghostly_held: u32,
    /// Why the hunter stopped.
    pub exit: HunterExit,
    /// Ticks performed.
    pub ticks: u64,
}

/// A hunter inside the house.
#[derive(Debug)]
pub struct HunterActor {
    profile: HunterProfile,
    /// Shared with the room's occupant entry.
    name: Arc<str>,
    room: RoomId,
    fear: u32,
    idle: u32,
    ghostly_held: u32,
    ticks: u64,
    casebook: Arc<Casebook>,
    rest: Duration,
    ctx: ActorContext,
}

impl HunterActor {
    /// Place the hunter in the house's start room.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::Entry`] when the start room is full.
    pub fn enter(
        profile: HunterProfile,
        rest: Duration,
        ctx: ActorContext,
    ) -> Result<Self, ActorError> {
        let room = ctx.house.start_room();
        let room_name = ctx.house.room_name(room).to_owned();
        let name: Arc<str> = Arc::from(profile.name.as_str());
        let casebook = Arc::new(Casebook::new());

        let occupant = Occupant {
            id: profile.id,
            name: Arc::clone(&name),
            casebook: Arc::clone(&casebook),
        };
        ctx.house
            .place_hunter(room, occupant)
            .map_err(|source| ActorError::Entry {
                actor: profile.name.clone(),
                room: room_name.clone(),
                source,
            })?;

        debug!(
            hunter = %profile.name,
            specialty = %profile.specialty,
            room = %room_name,
            "Hunter entered the house"
        );
        ctx.sink.record(SimEvent::HunterJoined {
            hunter: profile.name.clone(),
            specialty: profile.specialty,
            room: room_name,
        });

        Ok(Self {
            profile,
            name,
            room,
            fear: 0,
            idle: ctx.limits.boredom_max,
            ghostly_held: 0,
            ticks: 0,
            casebook,
            rest,
            ctx,
        })
    }

    /// The hunter's profile.
    pub const fn profile(&self) -> &HunterProfile {
        &self.profile
    }

    /// Current room.
    pub const fn room(&self) -> RoomId {
        self.room
    }

    /// Current fear.
    pub const fn fear(&self) -> u32 {
        self.fear
    }

    /// Current idle timer.
    pub const fn idle(&self) -> u32 {
        self.idle
    }

    /// Ghostly items held.
    pub const fn ghostly_held(&self) -> u32 {
        self.ghostly_held
    }

    /// Ticks performed so far.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The personal collection.
    pub fn casebook(&self) -> &Casebook {
        &self.casebook
    }

    /// Thread body: sleep, tick, repeat until a terminal condition or a
    /// halt. The hunter vacates its room before the report is returned.
    ///
    /// # Errors
    ///
    /// Propagates house lookup failures.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<HunterReport, ActorError> {
        info!(hunter = %self.profile.name, specialty = %self.profile.specialty, "Hunter started");
        let outcome = self.hunt(rng);
        self.ctx.house.vacate_hunter(self.room, self.profile.id)?;
        let exit = outcome?;
        Ok(self.finish(exit))
    }

    fn hunt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<HunterExit, ActorError> {
        loop {
            if let Some(exit) = self.halt_reason() {
                return Ok(exit);
            }
            if !self.rest.is_zero() {
                thread::sleep(self.rest);
            }
            if let Some(exit) = self.halt_reason() {
                return Ok(exit);
            }
            let action = HunterAction::random(rng);
            if let Some(exit) = self.tick(action, rng)? {
                return Ok(exit);
            }
        }
    }

    fn halt_reason(&self) -> Option<HunterExit> {
        if self.ctx.control.is_stop_requested() {
            Some(HunterExit::Halted)
        } else if self.ctx.limits.tick_limit_reached(self.ticks) {
            Some(HunterExit::TickLimit)
        } else {
            None
        }
    }

    /// Perform one tick without sleeping: the given action, the ghost
    /// encounter check, then the terminal checks.
    ///
    /// Returns the exit reason if the hunter is done. The hunter does not
    /// vacate its room here; [`HunterActor::run`] does that.
    ///
    /// # Errors
    ///
    /// Propagates house lookup failures.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        action: HunterAction,
        rng: &mut R,
    ) -> Result<Option<HunterExit>, ActorError> {
        self.ticks = self.ticks.saturating_add(1);
        match action {
            HunterAction::Collect => self.collect(rng)?,
            HunterAction::Move => self.wander(rng)?,
            HunterAction::Share => self.share(rng)?,
        }
        self.check_for_ghost()?;
        Ok(self.terminal_state())
    }

    const fn terminal_state(&self) -> Option<HunterExit> {
        if self.ghostly_held >= self.ctx.limits.evidence_goal {
            Some(HunterExit::EvidenceComplete)
        } else if self.fear >= self.ctx.limits.fear_max {
            Some(HunterExit::Spooked)
        } else if self.idle == 0 {
            Some(HunterExit::Bored)
        } else {
            None
        }
    }

    // -------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------

    fn collect<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ActorError> {
        let house = Arc::clone(&self.ctx.house);
        let room = house.room(self.room)?;
        let mut state = room.lock();
        let found = state.find_evidence(self.profile.specialty);

        let mut ledger = self.ctx.control.ledger();
        if !ledger.is_open() {
            return Ok(());
        }

        let Some(item) = found else {
            let reading = readings::mundane_evidence(self.profile.specialty, rng);
            self.casebook.record(reading);
            self.ctx.sink.record(SimEvent::MundaneReading {
                hunter: self.profile.name.clone(),
                room: room.name().to_owned(),
                evidence: reading,
            });
            return Ok(());
        };

        if !rng.random_bool(COLLECT_CHANCE) || !state.remove_evidence(&item) {
            return Ok(());
        }
        self.ghostly_held = self.casebook.record(item);
        debug!(
            hunter = %self.profile.name,
            room = %room.name(),
            evidence = %item,
            ghostly_held = self.ghostly_held,
            "Evidence collected"
        );
        self.ctx.sink.record(SimEvent::EvidenceCollected {
            hunter: self.profile.name.clone(),
            room: room.name().to_owned(),
            evidence: item,
            ghostly_held: self.ghostly_held,
        });

        if item.is_ghostly() {
            self.idle = self.ctx.limits.boredom_max;
            let credit = self.ctx.control.credit_ghostly(&mut ledger);
            if credit.goal_reached {
                info!(
                    hunter = %self.profile.name,
                    total = credit.total,
                    "Evidence goal reached"
                );
                self.ctx.sink.record(SimEvent::EvidenceThresholdReached {
                    hunter: self.profile.name.clone(),
                    total: credit.total,
                });
            }
        }
        Ok(())
    }

    fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ActorError> {
        let house = Arc::clone(&self.ctx.house);
        let Some(&to) = house.neighbours(self.room)?.choose(rng) else {
            return Ok(());
        };
        let from = self.room;
        let outcome = house.move_hunter(self.profile.id, from, to)?;
        let from_name = house.room_name(from).to_owned();
        let to_name = house.room_name(to).to_owned();

        if outcome == MoveOutcome::Moved {
            self.room = to;
            self.idle = self.idle.saturating_sub(1);
            debug!(hunter = %self.profile.name, from = %from_name, to = %to_name, "Hunter moved");
            self.ctx.sink.record(SimEvent::HunterMoved {
                hunter: self.profile.name.clone(),
                from: from_name,
                to: to_name,
            });
        } else {
            debug!(
                hunter = %self.profile.name,
                from = %from_name,
                to = %to_name,
                outcome = ?outcome,
                "Hunter move blocked"
            );
            self.ctx.sink.record(SimEvent::HunterMoveBlocked {
                hunter: self.profile.name.clone(),
                from: from_name,
                to: to_name,
            });
        }
        Ok(())
    }

    fn share<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(), ActorError> {
        let house = Arc::clone(&self.ctx.house);
        let room = house.room(self.room)?;
        let state = room.lock();
        if state.occupant_count() < 2 {
            return Ok(());
        }
        let partners: Vec<&Occupant> = state
            .occupants()
            .iter()
            .filter(|o| o.id != self.profile.id)
            .collect();
        let Some(partner) = partners.choose(rng) else {
            return Ok(());
        };

        let mine = self.casebook.snapshot();
        let theirs = partner.casebook.snapshot();
        self.review(&self.name, &partner.name, &mine, &partner.casebook);
        self.review(&partner.name, &self.name, &theirs, &self.casebook);
        Ok(())
    }

    /// Report each ghostly item `reviewer` holds that `audience` lacks.
    fn review(&self, reviewer: &str, partner: &str, held: &[Evidence], audience: &Casebook) {
        for item in held.iter().filter(|e| e.is_ghostly()) {
            if !audience.holds_duplicate(item) {
                self.ctx.sink.record(SimEvent::EvidenceReviewed {
                    reviewer: reviewer.to_owned(),
                    partner: partner.to_owned(),
                    evidence: *item,
                });
            }
        }
    }

    fn check_for_ghost(&mut self) -> Result<(), ActorError> {
        let house = Arc::clone(&self.ctx.house);
        let room = house.room(self.room)?;
        if !room.lock().is_haunted() {
            return Ok(());
        }
        self.fear = self.fear.saturating_add(1);
        self.idle = self.ctx.limits.boredom_max;
        debug!(hunter = %self.profile.name, room = %room.name(), fear = self.fear, "Ghost encounter");
        self.ctx.sink.record(SimEvent::FearIncreased {
            hunter: self.profile.name.clone(),
            room: room.name().to_owned(),
            fear: self.fear,
        });
        Ok(())
    }

    fn finish(self, exit: HunterExit) -> HunterReport {
        info!(
            hunter = %self.profile.name,
            reason = %exit,
            fear = self.fear,
            ghostly_held = self.ghostly_held,
            ticks = self.ticks,
            "Hunter exited"
        );
        self.ctx.sink.record(SimEvent::HunterExited {
            hunter: self.profile.name.clone(),
            reason: exit,
        });
        HunterReport {
            id: self.profile.id,
            room: self.ctx.house.room_name(self.room).to_owned(),
            name: self.profile.name,
            specialty: self.profile.specialty,
            fear: self.fear,
            idle: self.idle,
            evidence: self.casebook.snapshot(),
            ghostly_held: self.ghostly_held,
            exit,
            ticks: self.ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use haunt_types::GhostId;
    use haunt_world::{House, HouseLayout};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::ActorLimits;
    use crate::control::SimulationControl;
    use crate::sink::RecordingSink;

    fn layout(rooms: &[&str], connections: &[(&str, &str)]) -> HouseLayout {
        HouseLayout {
            rooms: rooms.iter().map(|r| (*r).to_owned()).collect(),
            connections: connections
                .iter()
                .map(|(a, b)| ((*a).to_owned(), (*b).to_owned()))
                .collect(),
            start_room: rooms.first().map(|r| (*r).to_owned()).unwrap_or_default(),
            room_capacity: 4,
        }
    }

    fn context(layout: &HouseLayout, limits: ActorLimits) -> (ActorContext, Arc<RecordingSink>) {
        let house = House::from_layout(layout).ok().map(Arc::new);
        let Some(house) = house else {
            panic!("test layout should build");
        };
        let sink = Arc::new(RecordingSink::new());
        let ctx = ActorContext::new(
            house,
            Arc::new(SimulationControl::new(limits.evidence_goal)),
            Arc::clone(&sink) as Arc<dyn crate::sink::EventSink>,
            limits,
        );
        (ctx, sink)
    }

    fn hunter(ctx: &ActorContext, name: &str, specialty: EvidenceClass) -> HunterActor {
        let actor = HunterActor::enter(
            HunterProfile::new(name, specialty),
            Duration::ZERO,
            ctx.clone(),
        );
        let Ok(actor) = actor else {
            panic!("hunter should enter");
        };
        actor
    }

    #[test]
    fn action_draw_covers_all_actions() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(HunterAction::random(&mut rng));
        }
        assert_eq!(seen.len(), HunterAction::ALL.len());
    }

    #[test]
    fn entering_places_hunter_in_start_room() {
        let (ctx, sink) = context(&layout(&["Van", "Hallway"], &[("Van", "Hallway")]), ActorLimits::default());
        let actor = hunter(&ctx, "Ada", EvidenceClass::Emf);
        assert_eq!(actor.room(), ctx.house.start_room());
        assert_eq!(actor.idle(), 100);
        assert_eq!(ctx.house.total_occupants(), 1);
        assert!(matches!(sink.events().first(), Some(SimEvent::HunterJoined { .. })));
    }

    #[test]
    fn fear_reaching_max_spooks_on_that_tick() {
        let limits = ActorLimits::default();
        let (ctx, _sink) = context(&layout(&["Van"], &[]), limits);
        assert!(ctx.house.place_ghost(ctx.house.start_room(), GhostId::new()).is_ok());
        let mut actor = hunter(&ctx, "Ada", EvidenceClass::Sound);
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..99 {
            let exit = actor.tick(HunterAction::Share, &mut rng).ok().flatten();
            assert_eq!(exit, None);
        }
        assert_eq!(actor.fear(), 99);
        let exit = actor.tick(HunterAction::Share, &mut rng).ok().flatten();
        assert_eq!(actor.fear(), 100);
        assert_eq!(exit, Some(HunterExit::Spooked));
    }

    #[test]
    fn ghost_encounter_resets_idle() {
        let (ctx, sink) = context(&layout(&["Van", "Hallway"], &[("Van", "Hallway")]), ActorLimits::default());
        let mut actor = hunter(&ctx, "Ada", EvidenceClass::Emf);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(actor.tick(HunterAction::Move, &mut rng).is_ok());
        assert_eq!(actor.idle(), 99);

        assert!(ctx.house.place_ghost(actor.room(), GhostId::new()).is_ok());
        assert!(actor.tick(HunterAction::Share, &mut rng).is_ok());
        assert_eq!(actor.idle(), 100);
        assert_eq!(actor.fear(), 1);
        assert!(sink.events().iter().any(|e| matches!(e, SimEvent::FearIncreased { fear: 1, .. })));
    }

    #[test]
    fn idle_runs_out_after_boredom_max_moves() {
        let limits = ActorLimits {
            boredom_max: 4,
            ..ActorLimits::default()
        };
        let (ctx, _sink) = context(&layout(&["Van", "Hallway"], &[("Van", "Hallway")]), limits);
        let mut actor = hunter(&ctx, "Ada", EvidenceClass::Emf);
        let mut rng = StdRng::seed_from_u64(2);
        let mut exits = Vec::new();
        for _ in 0..4 {
            exits.push(actor.tick(HunterAction::Move, &mut rng).ok().flatten());
        }
        assert_eq!(exits, vec![None, None, None, Some(HunterExit::Bored)]);
    }

    #[test]
    fn collect_miss_records_mundane_reading() {
        let (ctx, sink) = context(&layout(&["Van"], &[]), ActorLimits::default());
        let mut actor = hunter(&ctx, "Ada", EvidenceClass::Temperature);
        let mut rng = StdRng::seed_from_u64(4);
        assert!(actor.tick(HunterAction::Collect, &mut rng).is_ok());

        assert_eq!(actor.casebook().len(), 1);
        assert_eq!(actor.ghostly_held(), 0);
        assert_eq!(actor.idle(), 100);
        let events = sink.events();
        let Some(SimEvent::MundaneReading { evidence, .. }) = events.last() else {
            panic!("expected a mundane reading");
        };
        assert!(!evidence.is_ghostly());
        assert_eq!(evidence.class(), EvidenceClass::Temperature);
    }

    #[test]
    fn collect_takes_matching_ghostly_evidence() {
        let (ctx, sink) = context(&layout(&["Van"], &[]), ActorLimits::default());
        let mut actor = hunter(&ctx, "Ada", EvidenceClass::Sound);
        let start = ctx.house.start_room();
        let Ok(room) = ctx.house.room(start) else {
            panic!("start room exists");
        };
        room.lock().deposit(Evidence::new(EvidenceClass::Sound, 72.0));

        let mut rng = StdRng::seed_from_u64(5);
        let mut attempts = 0;
        while actor.ghostly_held() == 0 && attempts < 50 {
            assert!(actor.tick(HunterAction::Collect, &mut rng).is_ok());
            attempts += 1;
        }
        assert_eq!(actor.ghostly_held(), 1);
        assert!(room.lock().evidence().is_empty());
        assert_eq!(ctx.control.ghostly_collected(), 1);
        assert!(sink.events().iter().any(|e| matches!(e, SimEvent::EvidenceCollected { ghostly_held: 1, .. })));
    }

    #[test]
    fn collecting_the_goal_closes_the_ledger() {
        let limits = ActorLimits {
            evidence_goal: 1,
            ..ActorLimits::default()
        };
        let (ctx, sink) = context(&layout(&["Van"], &[]), limits);
        let mut actor = hunter(&ctx, "Ada", EvidenceClass::Emf);
        let Ok(room) = ctx.house.room(ctx.house.start_room()) else {
            panic!("start room exists");
        };
        room.lock().deposit(Evidence::new(EvidenceClass::Emf, 5.0));

        let mut rng = StdRng::seed_from_u64(6);
        let mut exit = None;
        for _ in 0..50 {
            exit = actor.tick(HunterAction::Collect, &mut rng).ok().flatten();
            if exit.is_some() {
                break;
            }
        }
        assert_eq!(exit, Some(HunterExit::EvidenceComplete));
        assert!(ctx.control.is_stop_requested());
        assert!(!ctx.control.ledger().is_open());
        assert!(matches!(
            sink.events().last(),
            Some(SimEvent::EvidenceThresholdReached { total: 1, .. })
        ));

        // A closed ledger admits no further readings.
        let before = sink.len();
        assert!(actor.tick(HunterAction::Collect, &mut rng).is_ok());
        assert_eq!(sink.len(), before);
    }

    #[test]
    fn share_reports_missing_ghostly_evidence_both_ways() {
        let (ctx, sink) = context(&layout(&["Van"], &[]), ActorLimits::default());
        let mut ada = hunter(&ctx, "Ada", EvidenceClass::Emf);
        let bo = hunter(&ctx, "Bo", EvidenceClass::Sound);
        let shared = Evidence::new(EvidenceClass::Temperature, -3.0);
        ada.casebook().record(Evidence::new(EvidenceClass::Emf, 4.95));
        ada.casebook().record(shared);
        ada.casebook().record(Evidence::new(EvidenceClass::Emf, 1.0));
        bo.casebook().record(shared);
        bo.casebook().record(Evidence::new(EvidenceClass::Sound, 71.0));

        let mut rng = StdRng::seed_from_u64(7);
        assert!(ada.tick(HunterAction::Share, &mut rng).is_ok());

        let reviews: Vec<(String, String, Evidence)> = sink
            .events()
            .into_iter()
            .filter_map(|e| match e {
                SimEvent::EvidenceReviewed {
                    reviewer,
                    partner,
                    evidence,
                } => Some((reviewer, partner, evidence)),
                _ => None,
            })
            .collect();
        assert_eq!(reviews.len(), 2);
        assert!(reviews.contains(&(
            "Ada".to_owned(),
            "Bo".to_owned(),
            Evidence::new(EvidenceClass::Emf, 4.95)
        )));
        assert!(reviews.contains(&(
            "Bo".to_owned(),
            "Ada".to_owned(),
            Evidence::new(EvidenceClass::Sound, 71.0)
        )));
    }

    #[test]
    fn share_alone_is_a_no_op() {
        let (ctx, sink) = context(&layout(&["Van"], &[]), ActorLimits::default());
        let mut ada = hunter(&ctx, "Ada", EvidenceClass::Emf);
        ada.casebook().record(Evidence::new(EvidenceClass::Emf, 4.95));
        let before = sink.len();
        let mut rng = StdRng::seed_from_u64(8);
        assert!(ada.tick(HunterAction::Share, &mut rng).is_ok());
        assert_eq!(sink.len(), before);
    }

    #[test]
    fn run_vacates_room_and_reports_halt() {
        let (ctx, sink) = context(&layout(&["Van"], &[]), ActorLimits::default());
        let actor = hunter(&ctx, "Ada", EvidenceClass::Emf);
        ctx.control.request_stop();
        let mut rng = StdRng::seed_from_u64(10);
        let Ok(report) = actor.run(&mut rng) else {
            panic!("run should succeed");
        };
        assert_eq!(report.exit, HunterExit::Halted);
        assert_eq!(report.ticks, 0);
        assert_eq!(report.room, "Van");
        assert_eq!(ctx.house.total_occupants(), 0);
        assert!(matches!(
            sink.events().last(),
            Some(SimEvent::HunterExited { reason: HunterExit::Halted, .. })
        ));
    }

    #[test]
    fn run_honours_tick_limit() {
        let limits = ActorLimits {
            tick_limit: 25,
            ..ActorLimits::default()
        };
        let (ctx, _sink) = context(&layout(&["Van"], &[]), limits);
        let actor = hunter(&ctx, "Ada", EvidenceClass::Emf);
        let mut rng = StdRng::seed_from_u64(11);
        let report = actor.run(&mut rng).ok();
        assert_eq!(report.as_ref().map(|r| r.exit), Some(HunterExit::TickLimit));
        assert_eq!(report.map(|r| r.ticks), Some(25));
    }
}
