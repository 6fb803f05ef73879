//! Procedural world generation for Dunhollow.
//!
//! One entry point, [`generate_world`], builds the whole session world
//! from a caller-supplied [`StdRng`](rand::rngs::StdRng). Keeping the
//! random source explicit makes generation reproducible from a seed,
//! which both the tests and the `--seed` flag rely on.

/// The world builder.
pub mod generate;
/// Name pools and spawn formulas.
pub mod spawn;

/// Re-export the generator entry point and its fixed constants.
pub use generate::{BOSS_ATTACK, BOSS_HP, BOSS_NAME, ROOM_COUNT, generate_world};
/// Re-export the spawn helpers.
pub use spawn::{ENEMY_NAMES, ROOM_NAMES, random_enemy, random_item};
