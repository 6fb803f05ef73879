//! Error types used throughout the crate.

use crate::world::RoomId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when operating on the world model.
///
/// Everything here is recoverable: a failed lookup mutates nothing and
/// the caller decides how to report it.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A container lookup or removal used an out-of-range index.
    #[error("no {kind} at index {index}")]
    NotFound {
        /// What was looked up ("item", "enemy", ...).
        kind: &'static str,
        /// The offending index.
        index: usize,
    },

    /// The requested room handle does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] with the given kind and index.
    pub fn not_found(kind: &'static str, index: usize) -> Self {
        Self::NotFound { kind, index }
    }
}
