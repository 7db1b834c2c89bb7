//! Room nodes with lock-guarded occupancy and evidence.
//!
//! A [`Room`] pairs the fixed facts about a room (name, capacity,
//! neighbours) with a [`RoomState`] behind the room's own mutex. Every read
//! or write of the occupant list, the evidence list or the resident ghost
//! goes through that lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use haunt_types::{Evidence, EvidenceClass, GhostId, HunterId, RoomId};

use crate::casebook::Casebook;
use crate::error::WorldError;

/// A hunter standing in a room.
///
/// Carries a handle to the hunter's casebook so a partner in the same room
/// can compare notes without going through any registry.
#[derive(Debug, Clone)]
pub struct Occupant {
    /// The hunter.
    pub id: HunterId,
    /// Display name.
    pub name: Arc<str>,
    /// The hunter's personal evidence.
    pub casebook: Arc<Casebook>,
}

/// Mutable contents of a room. Only reachable through [`Room::lock`] or
/// [`Room::try_lock`].
#[derive(Debug)]
pub struct RoomState {
    capacity: usize,
    occupants: Vec<Occupant>,
    evidence: Vec<Evidence>,
    ghost: Option<GhostId>,
}

impl RoomState {
    const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            occupants: Vec::new(),
            evidence: Vec::new(),
            ghost: None,
        }
    }

    /// Number of hunters in the room.
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    /// Whether another hunter fits.
    pub fn has_capacity(&self) -> bool {
        self.occupants.len() < self.capacity
    }

    /// Hunters in the room, in arrival order.
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    /// Whether a specific hunter is here.
    pub fn contains_hunter(&self, hunter: HunterId) -> bool {
        self.occupants.iter().any(|o| o.id == hunter)
    }

    pub(crate) fn add_occupant(&mut self, occupant: Occupant, room: &str) -> Result<(), WorldError> {
        if !self.has_capacity() {
            return Err(WorldError::RoomAtCapacity {
                room: room.to_owned(),
                capacity: self.capacity,
            });
        }
        self.occupants.push(occupant);
        Ok(())
    }

    /// Remove a hunter, returning its occupant entry. `None` if the hunter
    /// was not here; the caller skips whatever depended on it.
    pub fn remove_occupant(&mut self, hunter: HunterId) -> Option<Occupant> {
        let idx = self.occupants.iter().position(|o| o.id == hunter)?;
        Some(self.occupants.remove(idx))
    }

    /// Evidence lying in the room, oldest first.
    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    /// Leave a piece of evidence in the room.
    pub fn deposit(&mut self, evidence: Evidence) {
        self.evidence.push(evidence);
    }

    /// Oldest piece of evidence of the given class, if any.
    pub fn find_evidence(&self, class: EvidenceClass) -> Option<Evidence> {
        self.evidence.iter().find(|e| e.class() == class).copied()
    }

    /// Remove the first exact duplicate of `evidence` from the room.
    ///
    /// Returns `false` if no such item is present.
    pub fn remove_evidence(&mut self, evidence: &Evidence) -> bool {
        match self.evidence.iter().position(|e| e.is_duplicate_of(evidence)) {
            Some(idx) => {
                self.evidence.remove(idx);
                true
            }
            None => false,
        }
    }

    /// The resident ghost, if any.
    pub const fn ghost(&self) -> Option<GhostId> {
        self.ghost
    }

    /// Whether the ghost is here.
    pub const fn is_haunted(&self) -> bool {
        self.ghost.is_some()
    }

    pub(crate) const fn set_ghost(&mut self, ghost: GhostId) {
        self.ghost = Some(ghost);
    }

    pub(crate) fn clear_ghost(&mut self, ghost: GhostId) -> bool {
        if self.ghost == Some(ghost) {
            self.ghost = None;
            true
        } else {
            false
        }
    }
}

/// A room in the house graph.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    name: String,
    capacity: usize,
    neighbours: Vec<RoomId>,
    state: Mutex<RoomState>,
}

impl Room {
    pub(crate) const fn new(id: RoomId, name: String, capacity: usize) -> Self {
        Self {
            id,
            name,
            capacity,
            neighbours: Vec::new(),
            state: Mutex::new(RoomState::new(capacity)),
        }
    }

    pub(crate) fn connect(&mut self, other: RoomId) {
        if !self.neighbours.contains(&other) {
            self.neighbours.push(other);
        }
    }

    /// This room's position in the house.
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of hunters.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adjacent rooms. Fixed after construction, so no lock is needed.
    pub fn neighbours(&self) -> &[RoomId] {
        &self.neighbours
    }

    /// Block until the room's lock is held.
    ///
    /// A poisoned lock is recovered: every mutation of [`RoomState`] leaves
    /// it consistent, so a panicking holder cannot have torn it.
    pub fn lock(&self) -> MutexGuard<'_, RoomState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the room's lock only if it is free right now.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, RoomState>> {
        match self.state.try_lock() {
            Ok(guard) => Some(guard),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupant(name: &str) -> Occupant {
        Occupant {
            id: HunterId::new(),
            name: Arc::from(name),
            casebook: Arc::new(Casebook::new()),
        }
    }

    #[test]
    fn new_room_is_empty() {
        let room = Room::new(RoomId(0), String::from("Van"), 4);
        let state = room.lock();
        assert_eq!(state.occupant_count(), 0);
        assert!(state.has_capacity());
        assert!(state.evidence().is_empty());
        assert!(!state.is_haunted());
    }

    #[test]
    fn capacity_enforcement() {
        let room = Room::new(RoomId(0), String::from("Closet"), 1);
        let mut state = room.lock();
        assert!(state.add_occupant(occupant("Ray"), "Closet").is_ok());
        let err = state.add_occupant(occupant("Egon"), "Closet");
        assert!(matches!(err, Err(WorldError::RoomAtCapacity { capacity: 1, .. })));
        assert_eq!(state.occupant_count(), 1);
    }

    #[test]
    fn add_and_remove_occupant() {
        let room = Room::new(RoomId(0), String::from("Hallway"), 4);
        let ray = occupant("Ray");
        let ray_id = ray.id;
        let mut state = room.lock();
        assert!(state.add_occupant(ray, "Hallway").is_ok());
        assert!(state.contains_hunter(ray_id));
        assert!(state.remove_occupant(ray_id).is_some());
        assert!(!state.contains_hunter(ray_id));
        assert!(state.remove_occupant(ray_id).is_none());
    }

    #[test]
    fn evidence_removal_is_a_splice() {
        let room = Room::new(RoomId(0), String::from("Kitchen"), 4);
        let mut state = room.lock();
        let a = Evidence::new(EvidenceClass::Emf, 4.95);
        let b = Evidence::new(EvidenceClass::Sound, 72.0);
        let c = Evidence::new(EvidenceClass::Emf, 4.97);
        state.deposit(a);
        state.deposit(b);
        state.deposit(c);

        assert_eq!(state.find_evidence(EvidenceClass::Emf), Some(a));
        // Removing from the middle keeps the neighbours.
        assert!(state.remove_evidence(&b));
        assert_eq!(state.evidence(), &[a, c]);
        // Tail removal.
        assert!(state.remove_evidence(&c));
        assert_eq!(state.evidence(), &[a]);
        // Absent item is a boolean failure.
        assert!(!state.remove_evidence(&c));
        assert!(state.remove_evidence(&a));
        assert!(state.evidence().is_empty());
    }

    #[test]
    fn try_lock_reports_contention() {
        let room = Room::new(RoomId(0), String::from("Basement"), 4);
        let held = room.lock();
        assert!(room.try_lock().is_none());
        drop(held);
        assert!(room.try_lock().is_some());
    }

    #[test]
    fn ghost_slot() {
        let room = Room::new(RoomId(0), String::from("Garage"), 4);
        let ghost = GhostId::new();
        let mut state = room.lock();
        state.set_ghost(ghost);
        assert!(state.is_haunted());
        assert!(!state.clear_ghost(GhostId::new()));
        assert!(state.clear_ghost(ghost));
        assert!(!state.is_haunted());
    }

    #[test]
    fn neighbours_are_deduplicated() {
        let mut room = Room::new(RoomId(0), String::from("Hallway"), 4);
        room.connect(RoomId(1));
        room.connect(RoomId(1));
        room.connect(RoomId(2));
        assert_eq!(room.neighbours(), &[RoomId(1), RoomId(2)]);
    }
}
