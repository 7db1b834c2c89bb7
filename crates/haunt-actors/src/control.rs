//! Run-wide control state shared by every actor thread.
//!
//! # Architecture
//!
//! The stop flag is an [`AtomicBool`] so actors can poll it between ticks
//! without taking a lock. The [`EvidenceLedger`] lives behind its own
//! mutex and serializes every evidence event in the run: depositing,
//! collecting and mundane readings all take the ledger while holding the
//! room they act on, check that it is still open, and emit their event
//! before releasing it. The collection that reaches the goal closes the
//! ledger in the same critical section, so nothing evidence-related can be
//! reported after the threshold event.
//!
//! Lock order: room, then ledger, then a casebook. No code path takes a
//! room while holding the ledger.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Team-wide tally of ghostly evidence collected by hunters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceLedger {
    goal: u32,
    ghostly_collected: u32,
    closed: bool,
}

/// Result of crediting one ghostly collection to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credit {
    /// Team total after this collection.
    pub total: u32,
    /// Whether this collection reached the goal and closed the ledger.
    pub goal_reached: bool,
}

impl EvidenceLedger {
    /// An open ledger that closes once `goal` ghostly items are collected.
    pub const fn new(goal: u32) -> Self {
        Self {
            goal,
            ghostly_collected: 0,
            closed: false,
        }
    }

    /// Whether evidence may still be deposited or collected.
    pub const fn is_open(&self) -> bool {
        !self.closed
    }

    /// Ghostly items collected across all hunters.
    pub const fn ghostly_collected(&self) -> u32 {
        self.ghostly_collected
    }

    /// The team goal.
    pub const fn goal(&self) -> u32 {
        self.goal
    }

    /// Close the ledger without reaching the goal.
    pub const fn close(&mut self) {
        self.closed = true;
    }

    fn credit_ghostly(&mut self) -> Credit {
        self.ghostly_collected = self.ghostly_collected.saturating_add(1);
        let goal_reached = self.is_open() && self.ghostly_collected >= self.goal;
        if goal_reached {
            self.closed = true;
        }
        Credit {
            total: self.ghostly_collected,
            goal_reached,
        }
    }
}

/// Stop flag and evidence ledger for one run.
#[derive(Debug)]
pub struct SimulationControl {
    /// Set once; never cleared.
    stop_requested: AtomicBool,

    ledger: Mutex<EvidenceLedger>,
}

impl SimulationControl {
    /// Fresh control state for a run whose team goal is `evidence_goal`.
    pub const fn new(evidence_goal: u32) -> Self {
        Self {
            stop_requested: AtomicBool::new(false),
            ledger: Mutex::new(EvidenceLedger::new(evidence_goal)),
        }
    }

    /// Whether actors should wind down.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Ask every actor to stop after its current tick.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }

    /// Lock the evidence ledger. A poisoned lock is recovered; the ledger's
    /// fields are updated together so a panic cannot leave them torn.
    pub fn ledger(&self) -> MutexGuard<'_, EvidenceLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Credit one ghostly collection. When this reaches the goal the ledger
    /// closes and a stop is requested before the guard is released.
    pub fn credit_ghostly(&self, ledger: &mut EvidenceLedger) -> Credit {
        let credit = ledger.credit_ghostly();
        if credit.goal_reached {
            self.request_stop();
        }
        credit
    }

    /// Snapshot of the team total.
    pub fn ghostly_collected(&self) -> u32 {
        self.ledger().ghostly_collected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_control_is_running_and_open() {
        let control = SimulationControl::new(3);
        assert!(!control.is_stop_requested());
        assert!(control.ledger().is_open());
        assert_eq!(control.ghostly_collected(), 0);
    }

    #[test]
    fn reaching_goal_closes_ledger_and_stops() {
        let control = SimulationControl::new(3);
        for expected in 1..=2 {
            let mut ledger = control.ledger();
            let credit = control.credit_ghostly(&mut ledger);
            assert_eq!(credit.total, expected);
            assert!(!credit.goal_reached);
        }
        assert!(!control.is_stop_requested());

        let mut ledger = control.ledger();
        let credit = control.credit_ghostly(&mut ledger);
        assert!(credit.goal_reached);
        assert_eq!(credit.total, 3);
        assert!(!ledger.is_open());
        drop(ledger);
        assert!(control.is_stop_requested());
    }

    #[test]
    fn goal_is_reported_once() {
        let control = SimulationControl::new(1);
        let mut ledger = control.ledger();
        assert!(control.credit_ghostly(&mut ledger).goal_reached);
        assert!(!control.credit_ghostly(&mut ledger).goal_reached);
        assert_eq!(ledger.ghostly_collected(), 2);
    }

    #[test]
    fn manual_close() {
        let mut ledger = EvidenceLedger::new(3);
        ledger.close();
        assert!(!ledger.is_open());
        assert_eq!(ledger.goal(), 3);
    }
}
