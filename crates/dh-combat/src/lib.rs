//! Turn-based combat resolution for Dunhollow.
//!
//! The resolver is a pure state machine over the core model: it takes
//! the player, the room, an enemy index, and a [`Variance`] source, and
//! returns a [`FightReport`] transcript. All randomness comes in through
//! the variance source, so encounters are fully deterministic under
//! test.

/// The fight resolver and its report types.
pub mod encounter;
/// Variance-roll sources.
pub mod variance;

/// Re-export the resolver entry point and report types.
pub use encounter::{FightOutcome, FightReport, RoundEvent, VICTORY_ATK_REWARD, fight};
/// Re-export the variance sources.
pub use variance::{FixedVariance, RngVariance, Variance};
