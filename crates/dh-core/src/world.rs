//! The world: an arena owning every room for the session.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::room::{Direction, Room};

/// A stable handle to a room in a [`World`]'s arena.
///
/// Handles are plain indices: rooms are created once at generation time
/// and never removed, so a handle stays valid for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

impl RoomId {
    /// Create a handle from a raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// The result of attempting to move through an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Where the mover ends up. Equals the starting room when `moved` is
    /// false.
    pub room: RoomId,
    /// True if an exit existed and was taken.
    pub moved: bool,
}

/// A read-only snapshot of a room for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    /// The room's display name.
    pub name: String,
    /// One summary line per enemy, in roster order.
    pub enemies: Vec<String>,
    /// One summary line per ground item, in roster order.
    pub items: Vec<String>,
    /// Directions with an exit, in display order.
    pub exits: Vec<Direction>,
}

/// Owns the full set of rooms for a session and designates the start.
///
/// Rooms reference each other only through [`RoomId`] handles, so the
/// graph may contain cycles (the generator's east/west shortcuts) without
/// any ownership tangle; dropping the world drops everything at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct World {
    rooms: Vec<Room>,
    start: Option<RoomId>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room to the arena and return its handle.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(room);
        id
    }

    /// Number of rooms in the arena.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Get a room by handle.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Get a room mutably by handle.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Iterate over all rooms in arena order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Designate the starting room.
    pub fn set_start(&mut self, id: RoomId) -> CoreResult<()> {
        if self.room(id).is_none() {
            return Err(CoreError::RoomNotFound(id));
        }
        self.start = Some(id);
        Ok(())
    }

    /// The starting room, if one was designated.
    pub fn start(&self) -> Option<RoomId> {
        self.start
    }

    /// Connect `a` to `b` in `direction`, and `b` back to `a` in the
    /// opposite direction. Symmetry here is a construction convention;
    /// nothing re-checks it later.
    pub fn link(&mut self, a: RoomId, direction: Direction, b: RoomId) -> CoreResult<()> {
        if self.room(a).is_none() {
            return Err(CoreError::RoomNotFound(a));
        }
        if self.room(b).is_none() {
            return Err(CoreError::RoomNotFound(b));
        }
        self.rooms[a.0].set_exit(direction, b);
        self.rooms[b.0].set_exit(direction.opposite(), a);
        Ok(())
    }

    /// Try to move from `from` through the exit in `direction`.
    ///
    /// A missing exit is not an error: the outcome names the starting
    /// room with `moved` false, and the caller reports "can't go that
    /// way".
    pub fn step(&self, from: RoomId, direction: Direction) -> MoveOutcome {
        match self.room(from).and_then(|r| r.exit(direction)) {
            Some(next) => MoveOutcome {
                room: next,
                moved: true,
            },
            None => MoveOutcome {
                room: from,
                moved: false,
            },
        }
    }

    /// Snapshot a room for display.
    pub fn describe(&self, id: RoomId) -> Option<RoomView> {
        let room = self.room(id)?;
        Some(RoomView {
            name: room.name.clone(),
            enemies: room.enemies.iter().map(|e| e.summary()).collect(),
            items: room.items.iter().map(|i| i.summary()).collect(),
            exits: room.exits(),
        })
    }
}
