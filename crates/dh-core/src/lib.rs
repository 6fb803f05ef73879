//! Core types for Dunhollow: actors, items, rosters, and the room graph.
//!
//! This crate is the game's data model and nothing else — it never reads
//! input, never prints, and never touches a random source. World
//! generation lives in `dh-worldgen`, combat resolution in `dh-combat`,
//! and all I/O in the `dunhollow` binary.

/// The player and the enemies they fight.
pub mod actor;
/// Error types used throughout the crate.
pub mod error;
/// Usable items and their effects.
pub mod item;
/// Rooms and the directions connecting them.
pub mod room;
/// Growable, order-preserving entity containers.
pub mod roster;
/// The world arena owning all rooms.
pub mod world;

/// Re-export actor types.
pub use actor::{Enemy, Player};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, ItemEffect, ItemKind, ItemUse};
/// Re-export room types.
pub use room::{Direction, Room};
/// Re-export the container type.
pub use roster::Roster;
/// Re-export world types.
pub use world::{MoveOutcome, RoomId, RoomView, World};
