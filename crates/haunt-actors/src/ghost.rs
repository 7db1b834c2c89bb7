//! Ghost actor.
//!
//! With hunters in its room the ghost stays put, keeps its boredom topped
//! up and usually leaves evidence. Alone, it grows bored by one each tick
//! and either wanders, leaves evidence, or does nothing. Boredom reaching
//! zero ends it. The ghost stays recorded in its last room after it ends.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use haunt_types::{GhostClass, GhostExit, GhostId, RoomId, SimEvent};
use haunt_world::{MoveOutcome, RoomState, readings};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tracing::{debug, info};

use crate::context::ActorContext;
use crate::error::ActorError;

/// Chance of leaving evidence on a tick spent with hunters.
pub const PRESENT_DEPOSIT_CHANCE: f64 = 2.0 / 3.0;

/// Final state of the ghost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GhostReport {
    /// Stable identifier.
    pub id: GhostId,
    /// The ghost's true kind.
    pub class: GhostClass,
    /// Room the ghost ended in.
    pub room: String,
    /// Boredom at exit.
    pub boredom: u32,
    /// Evidence items left in rooms.
    pub deposits: u32,
    /// Why the ghost stopped.
    pub exit: GhostExit,
    /// Ticks performed.
    pub ticks: u64,
}

/// The ghost inside the house.
#[derive(Debug)]
pub struct GhostActor {
    id: GhostId,
    class: GhostClass,
    room: RoomId,
    boredom: u32,
    deposits: u32,
    ticks: u64,
    rest: Duration,
    ctx: ActorContext,
}

impl GhostActor {
    /// Put a ghost of `class` in `room`.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::Entry`] if the room does not exist or already
    /// has a ghost.
    pub fn haunt(
        class: GhostClass,
        room: RoomId,
        rest: Duration,
        ctx: ActorContext,
    ) -> Result<Self, ActorError> {
        let id = GhostId::new();
        let room_name = ctx.house.room_name(room).to_owned();
        ctx.house
            .place_ghost(room, id)
            .map_err(|source| ActorError::Entry {
                actor: class.label().to_owned(),
                room: room_name.clone(),
                source,
            })?;

        debug!(ghost = %id, class = %class, room = %room_name, "Ghost placed");
        ctx.sink.record(SimEvent::GhostAwoke {
            class,
            room: room_name,
        });

        Ok(Self {
            id,
            class,
            room,
            boredom: ctx.limits.boredom_max,
            deposits: 0,
            ticks: 0,
            rest,
            ctx,
        })
    }

    /// Stable identifier.
    pub const fn id(&self) -> GhostId {
        self.id
    }

    /// The ghost's kind.
    pub const fn class(&self) -> GhostClass {
        self.class
    }

    /// Current room.
    pub const fn room(&self) -> RoomId {
        self.room
    }

    /// Current boredom.
    pub const fn boredom(&self) -> u32 {
        self.boredom
    }

    /// Evidence items left so far.
    pub const fn deposits(&self) -> u32 {
        self.deposits
    }

    /// Thread body.
    ///
    /// # Errors
    ///
    /// Propagates house lookup failures.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<GhostReport, ActorError> {
        info!(ghost = %self.id, class = %self.class, "Ghost started");
        let exit = loop {
            if let Some(exit) = self.halt_reason() {
                break exit;
            }
            if !self.rest.is_zero() {
                thread::sleep(self.rest);
            }
            if let Some(exit) = self.halt_reason() {
                break exit;
            }
            if let Some(exit) = self.tick(rng)? {
                break exit;
            }
        };
        Ok(self.finish(exit))
    }

    fn halt_reason(&self) -> Option<GhostExit> {
        if self.ctx.control.is_stop_requested() {
            Some(GhostExit::Halted)
        } else if self.ctx.limits.tick_limit_reached(self.ticks) {
            Some(GhostExit::TickLimit)
        } else {
            None
        }
    }

    /// Perform one tick without sleeping.
    ///
    /// # Errors
    ///
    /// Propagates house lookup failures.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<GhostExit>, ActorError> {
        self.ticks = self.ticks.saturating_add(1);
        let house = Arc::clone(&self.ctx.house);
        let room = house.room(self.room)?;

        {
            let mut state = room.lock();
            if state.occupant_count() > 0 {
                self.boredom = self.ctx.limits.boredom_max;
                if rng.random_bool(PRESENT_DEPOSIT_CHANCE) {
                    self.deposit(&mut state, room.name(), rng);
                }
                return Ok(None);
            }
        }

        self.boredom = self.boredom.saturating_sub(1);
        match rng.random_range(0..4_u8) {
            0 => self.wander(rng)?,
            1 => {
                let mut state = room.lock();
                self.deposit(&mut state, room.name(), rng);
            }
            _ => {}
        }
        Ok((self.boredom == 0).then_some(GhostExit::Exhausted))
    }

    /// Leave one ghostly item of a class this ghost can produce, provided
    /// the evidence ledger is still open.
    fn deposit<R: Rng + ?Sized>(&mut self, state: &mut RoomState, room: &str, rng: &mut R) {
        let Some(&class) = self.class.deposit_classes().choose(rng) else {
            return;
        };
        let ledger = self.ctx.control.ledger();
        if !ledger.is_open() {
            return;
        }
        let evidence = readings::ghostly_evidence(class, rng);
        state.deposit(evidence);
        self.deposits = self.deposits.saturating_add(1);
        debug!(room = %room, evidence = %evidence, "Ghost left evidence");
        self.ctx.sink.record(SimEvent::EvidenceDeposited {
            room: room.to_owned(),
            evidence,
        });
    }

    fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ActorError> {
        let house = Arc::clone(&self.ctx.house);
        let Some(&to) = house.neighbours(self.room)?.choose(rng) else {
            return Ok(());
        };
        let from = self.room;
        let outcome = house.move_ghost(self.id, from, to)?;
        let from_name = house.room_name(from).to_owned();
        let to_name = house.room_name(to).to_owned();

        if outcome == MoveOutcome::Moved {
            self.room = to;
            debug!(from = %from_name, to = %to_name, "Ghost moved");
            self.ctx.sink.record(SimEvent::GhostMoved {
                from: from_name,
                to: to_name,
            });
        } else {
            debug!(from = %from_name, to = %to_name, outcome = ?outcome, "Ghost move blocked");
            self.ctx.sink.record(SimEvent::GhostMoveBlocked {
                from: from_name,
                to: to_name,
            });
        }
        Ok(())
    }

    fn finish(self, exit: GhostExit) -> GhostReport {
        info!(
            ghost = %self.id,
            class = %self.class,
            reason = %exit,
            deposits = self.deposits,
            ticks = self.ticks,
            "Ghost exited"
        );
        self.ctx.sink.record(SimEvent::GhostExited { reason: exit });
        GhostReport {
            id: self.id,
            class: self.class,
            room: self.ctx.house.room_name(self.room).to_owned(),
            boredom: self.boredom,
            deposits: self.deposits,
            exit,
            ticks: self.ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use haunt_types::EvidenceClass;
    use haunt_world::{House, HouseLayout, Occupant};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::ActorLimits;
    use crate::control::SimulationControl;
    use crate::sink::{EventSink, RecordingSink};

    fn context(rooms: &[&str], limits: ActorLimits) -> (ActorContext, Arc<RecordingSink>) {
        let layout = HouseLayout {
            rooms: rooms.iter().map(|r| (*r).to_owned()).collect(),
            connections: rooms
                .windows(2)
                .filter_map(|w| match w {
                    [a, b] => Some(((*a).to_owned(), (*b).to_owned())),
                    _ => None,
                })
                .collect(),
            start_room: rooms.first().map(|r| (*r).to_owned()).unwrap_or_default(),
            room_capacity: 4,
        };
        let Ok(house) = House::from_layout(&layout) else {
            panic!("test layout should build");
        };
        let sink = Arc::new(RecordingSink::new());
        let ctx = ActorContext::new(
            Arc::new(house),
            Arc::new(SimulationControl::new(limits.evidence_goal)),
            Arc::clone(&sink) as Arc<dyn EventSink>,
            limits,
        );
        (ctx, sink)
    }

    fn ghost(ctx: &ActorContext, class: GhostClass) -> GhostActor {
        let Ok(ghost) = GhostActor::haunt(class, ctx.house.start_room(), Duration::ZERO, ctx.clone())
        else {
            panic!("ghost should be placed");
        };
        ghost
    }

    fn add_hunter(ctx: &ActorContext) {
        let occupant = Occupant {
            id: haunt_types::HunterId::new(),
            name: Arc::from("Ada"),
            casebook: Arc::default(),
        };
        assert!(ctx.house.place_hunter(ctx.house.start_room(), occupant).is_ok());
    }

    #[test]
    fn company_keeps_boredom_full_and_deposits_own_classes() {
        let (ctx, sink) = context(&["Van"], ActorLimits::default());
        add_hunter(&ctx);
        let mut ghost = ghost(&ctx, GhostClass::Poltergeist);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..300 {
            assert_eq!(ghost.tick(&mut rng).ok().flatten(), None);
            assert_eq!(ghost.boredom(), 100);
        }
        assert!(ghost.deposits() > 150);
        assert!(ghost.deposits() < 250);

        let deposited: Vec<_> = sink
            .events()
            .into_iter()
            .filter_map(|e| match e {
                SimEvent::EvidenceDeposited { evidence, .. } => Some(evidence),
                _ => None,
            })
            .collect();
        assert_eq!(u32::try_from(deposited.len()).ok(), Some(ghost.deposits()));
        assert!(deposited.iter().all(|e| e.is_ghostly()));
        assert!(deposited.iter().all(|e| {
            matches!(e.class(), EvidenceClass::Temperature | EvidenceClass::Fingerprints)
        }));
    }

    #[test]
    fn alone_in_a_dead_end_it_exhausts_on_schedule() {
        let limits = ActorLimits {
            boredom_max: 5,
            ..ActorLimits::default()
        };
        let (ctx, _sink) = context(&["Attic"], limits);
        let mut ghost = ghost(&ctx, GhostClass::Banshee);
        let mut rng = StdRng::seed_from_u64(2);
        let exits: Vec<_> = (0..5).map(|_| ghost.tick(&mut rng).ok().flatten()).collect();
        assert_eq!(exits, vec![None, None, None, None, Some(GhostExit::Exhausted)]);
    }

    #[test]
    fn alone_it_eventually_wanders() {
        let (ctx, sink) = context(&["Van", "Hallway", "Kitchen"], ActorLimits::default());
        let mut ghost = ghost(&ctx, GhostClass::Phantom);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..60 {
            assert!(ghost.tick(&mut rng).is_ok());
        }
        assert!(sink.events().iter().any(|e| matches!(e, SimEvent::GhostMoved { .. })));

        let haunted: Vec<_> = ctx
            .house
            .rooms()
            .iter()
            .filter(|r| r.lock().is_haunted())
            .map(|r| r.id())
            .collect();
        assert_eq!(haunted, vec![ghost.room()]);
    }

    #[test]
    fn closed_ledger_stops_deposits() {
        let (ctx, sink) = context(&["Van"], ActorLimits::default());
        add_hunter(&ctx);
        let mut ghost = ghost(&ctx, GhostClass::Bullies);
        ctx.control.ledger().close();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            assert!(ghost.tick(&mut rng).is_ok());
        }
        assert_eq!(ghost.deposits(), 0);
        assert!(!sink.events().iter().any(SimEvent::is_evidence_event));
    }

    #[test]
    fn halted_ghost_stays_in_its_room() {
        let (ctx, sink) = context(&["Van", "Hallway"], ActorLimits::default());
        let ghost = ghost(&ctx, GhostClass::Banshee);
        ctx.control.request_stop();
        let mut rng = StdRng::seed_from_u64(5);
        let Ok(report) = ghost.run(&mut rng) else {
            panic!("run should succeed");
        };
        assert_eq!(report.exit, GhostExit::Halted);
        assert_eq!(report.room, "Van");
        assert_eq!(report.class, GhostClass::Banshee);
        let Ok(van) = ctx.house.room(ctx.house.start_room()) else {
            panic!("start room exists");
        };
        assert!(van.lock().is_haunted());
        assert!(matches!(sink.events().last(), Some(SimEvent::GhostExited { .. })));
    }

    #[test]
    fn second_ghost_in_a_room_is_refused() {
        let (ctx, _sink) = context(&["Van"], ActorLimits::default());
        let _first = ghost(&ctx, GhostClass::Banshee);
        let second = GhostActor::haunt(
            GhostClass::Phantom,
            ctx.house.start_room(),
            Duration::ZERO,
            ctx.clone(),
        );
        assert!(matches!(second, Err(ActorError::Entry { .. })));
    }
}
