//! Rooms and the directions connecting them.

use serde::{Deserialize, Serialize};

use crate::actor::Enemy;
use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::roster::Roster;
use crate::world::RoomId;

/// Initial capacity of a room's enemy and item rosters.
const ROSTER_CAPACITY: usize = 3;

/// A cardinal direction a room exit can point in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// All four directions in display order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Parse a direction from user input (full word or initial).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// The display name for this direction.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// The direction pointing back the other way.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Slot index into a room's exit array.
    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single room: a name, up to four exits, and what lives and lies here.
///
/// Exits are non-owning [`RoomId`] handles; only the
/// [`World`](crate::world::World) owns rooms, so cycles in the graph are
/// harmless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Display name. Not unique — the generator samples names with
    /// replacement.
    pub name: String,
    exits: [Option<RoomId>; 4],
    /// Enemies currently in the room, in spawn order.
    pub enemies: Roster<Enemy>,
    /// Items lying on the ground, in spawn order.
    pub items: Roster<Item>,
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exits: [None; 4],
            enemies: Roster::with_capacity(ROSTER_CAPACITY),
            items: Roster::with_capacity(ROSTER_CAPACITY),
        }
    }

    /// The neighbor in `direction`, if an exit exists.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits[direction.index()]
    }

    /// Directions that currently have an exit, in display order.
    pub fn exits(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.exit(*d).is_some())
            .collect()
    }

    /// Point the exit in `direction` at `target`. Overwrites silently;
    /// keeping exits symmetric is the world builder's job.
    pub fn set_exit(&mut self, direction: Direction, target: RoomId) {
        self.exits[direction.index()] = Some(target);
    }

    /// Pick up the ground item at `index`, transferring ownership to the
    /// caller. An out-of-range index changes nothing.
    pub fn take_item(&mut self, index: usize) -> CoreResult<Item> {
        self.items
            .remove_at(index)
            .ok_or(CoreError::not_found("item", index))
    }
}
