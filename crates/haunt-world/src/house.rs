//! The house graph and the two-room movement protocol.
//!
//! A [`House`] owns every [`Room`] and the fixed adjacency between them.
//! Topology never changes after [`House::from_layout`], so it is shared
//! between actor threads behind a plain `Arc` and read without locking.
//! Only the per-room state changes, always under that room's lock.
//!
//! # Movement protocol
//!
//! Moving from room A to room B:
//!
//! 1. Block on A's lock.
//! 2. Try B's lock **without blocking**. If B is held by anyone, release A
//!    and report [`MoveOutcome::DestinationBusy`].
//! 3. With both held, check B's capacity (hunters) or ghost slot (ghost).
//!    If B is full, release both and report [`MoveOutcome::DestinationFull`].
//! 4. Relocate atomically, release both.
//!
//! An actor never waits on a second lock while holding a first one, so no
//! cycle of waiters can form regardless of the order in which rooms are
//! locked. The non-blocking acquisition of the destination is the
//! deadlock-avoidance mechanism; there is no global lock order on rooms.
//! Busy and full destinations are normal outcomes that the actor retries on
//! a later tick.

use haunt_types::{GhostId, HunterId, RoomId};
use tracing::debug;

use crate::error::WorldError;
use crate::layout::HouseLayout;
use crate::room::{Occupant, Room};

/// Result of a move attempt that did not hit a lookup error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The actor is now in the destination.
    Moved,
    /// Someone held the destination's lock; nothing changed.
    DestinationBusy,
    /// The destination had no room for the actor; nothing changed.
    DestinationFull,
}

/// The static room graph.
#[derive(Debug)]
pub struct House {
    rooms: Vec<Room>,
    start: RoomId,
}

impl House {
    /// Build and validate a house from layout data.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EmptyHouse`], [`WorldError::ZeroCapacity`],
    /// [`WorldError::DuplicateRoom`], [`WorldError::UnknownRoom`] or
    /// [`WorldError::SelfConnection`] for malformed layouts.
    pub fn from_layout(layout: &HouseLayout) -> Result<Self, WorldError> {
        if layout.rooms.is_empty() {
            return Err(WorldError::EmptyHouse);
        }
        if layout.room_capacity == 0 {
            return Err(WorldError::ZeroCapacity);
        }

        let mut rooms: Vec<Room> = Vec::with_capacity(layout.rooms.len());
        for (idx, name) in layout.rooms.iter().enumerate() {
            if rooms.iter().any(|r| r.name() == name) {
                return Err(WorldError::DuplicateRoom(name.clone()));
            }
            rooms.push(Room::new(RoomId(idx), name.clone(), layout.room_capacity));
        }

        let mut house = Self {
            rooms,
            start: RoomId(0),
        };

        for (a, b) in &layout.connections {
            let a_id = house.id_of(a)?;
            let b_id = house.id_of(b)?;
            if a_id == b_id {
                return Err(WorldError::SelfConnection(a.clone()));
            }
            house.room_mut(a_id)?.connect(b_id);
            house.room_mut(b_id)?.connect(a_id);
        }

        house.start = house.id_of(&layout.start_room)?;
        debug!(
            rooms = house.rooms.len(),
            connections = layout.connections.len(),
            start = %layout.start_room,
            "House built"
        );
        Ok(house)
    }

    fn id_of(&self, name: &str) -> Result<RoomId, WorldError> {
        self.room_by_name(name)
            .map(Room::id)
            .ok_or_else(|| WorldError::UnknownRoom(name.to_owned()))
    }

    fn room_mut(&mut self, id: RoomId) -> Result<&mut Room, WorldError> {
        self.rooms
            .get_mut(id.index())
            .ok_or(WorldError::RoomNotFound(id))
    }

    // -------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------

    /// Get a room by id.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::RoomNotFound`] if the id is out of range.
    pub fn room(&self, id: RoomId) -> Result<&Room, WorldError> {
        self.rooms.get(id.index()).ok_or(WorldError::RoomNotFound(id))
    }

    /// Find a room by its name.
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name() == name)
    }

    /// All rooms, in index order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The room hunters start in.
    pub const fn start_room(&self) -> RoomId {
        self.start
    }

    /// Display name of a room, or `"?"` for an unknown id.
    pub fn room_name(&self, id: RoomId) -> &str {
        self.rooms.get(id.index()).map_or("?", Room::name)
    }

    /// Rooms adjacent to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::RoomNotFound`] if the id is out of range.
    pub fn neighbours(&self, id: RoomId) -> Result<&[RoomId], WorldError> {
        self.room(id).map(Room::neighbours)
    }

    fn adjacent_pair(&self, from: RoomId, to: RoomId) -> Result<(&Room, &Room), WorldError> {
        let source = self.room(from)?;
        let dest = self.room(to)?;
        if !source.neighbours().contains(&to) {
            return Err(WorldError::NotAdjacent { from, to });
        }
        Ok((source, dest))
    }

    // -------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------

    /// Put a hunter into a room during setup.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::RoomAtCapacity`] if the room is full, or
    /// [`WorldError::RoomNotFound`].
    pub fn place_hunter(&self, room: RoomId, occupant: Occupant) -> Result<(), WorldError> {
        let target = self.room(room)?;
        target.lock().add_occupant(occupant, target.name())
    }

    /// Take a hunter out of a room for good. Returns `false` if the hunter
    /// was not there.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::RoomNotFound`].
    pub fn vacate_hunter(&self, room: RoomId, hunter: HunterId) -> Result<bool, WorldError> {
        Ok(self.room(room)?.lock().remove_occupant(hunter).is_some())
    }

    /// Put the ghost into a room during setup.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::AlreadyHaunted`] if a ghost is already there,
    /// or [`WorldError::RoomNotFound`].
    pub fn place_ghost(&self, room: RoomId, ghost: GhostId) -> Result<(), WorldError> {
        let mut state = self.room(room)?.lock();
        if state.is_haunted() {
            return Err(WorldError::AlreadyHaunted(room));
        }
        state.set_ghost(ghost);
        Ok(())
    }

    // -------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------

    /// Move a hunter between adjacent rooms using the non-blocking
    /// two-room protocol.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NotAdjacent`] or [`WorldError::RoomNotFound`]
    /// for bad ids, and [`WorldError::HunterNotInRoom`] if the hunter is not
    /// in `from`. Contention is reported through [`MoveOutcome`].
    pub fn move_hunter(
        &self,
        hunter: HunterId,
        from: RoomId,
        to: RoomId,
    ) -> Result<MoveOutcome, WorldError> {
        let (source, dest) = self.adjacent_pair(from, to)?;

        let mut src = source.lock();
        let Some(mut dst) = dest.try_lock() else {
            return Ok(MoveOutcome::DestinationBusy);
        };
        if !dst.has_capacity() {
            return Ok(MoveOutcome::DestinationFull);
        }
        let occupant = src
            .remove_occupant(hunter)
            .ok_or(WorldError::HunterNotInRoom { hunter, room: from })?;
        dst.add_occupant(occupant, dest.name())?;
        Ok(MoveOutcome::Moved)
    }

    /// Move the ghost between adjacent rooms using the same protocol. A
    /// destination that already has a ghost counts as full.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NotAdjacent`] or [`WorldError::RoomNotFound`]
    /// for bad ids, and [`WorldError::GhostNotInRoom`] if the ghost is not
    /// in `from`.
    pub fn move_ghost(
        &self,
        ghost: GhostId,
        from: RoomId,
        to: RoomId,
    ) -> Result<MoveOutcome, WorldError> {
        let (source, dest) = self.adjacent_pair(from, to)?;

        let mut src = source.lock();
        let Some(mut dst) = dest.try_lock() else {
            return Ok(MoveOutcome::DestinationBusy);
        };
        if dst.is_haunted() {
            return Ok(MoveOutcome::DestinationFull);
        }
        if !src.clear_ghost(ghost) {
            return Err(WorldError::GhostNotInRoom { ghost, room: from });
        }
        dst.set_ghost(ghost);
        Ok(MoveOutcome::Moved)
    }

    /// Total hunters across all rooms. Locks rooms one at a time, so the
    /// figure is only exact when no hunter is moving.
    pub fn total_occupants(&self) -> usize {
        self.rooms.iter().map(|r| r.lock().occupant_count()).sum()
    }
}
