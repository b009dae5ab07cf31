use thiserror::Error;

use crate::game::IllegalMove;

/// Everything that can go wrong in a search.
///
/// Searches are deterministic, so none of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A caller-supplied argument was out of range, e.g. a negative depth.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The game implementation rejected a move it listed as legal.
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
}

impl SearchError {
    pub(crate) fn negative_depth(depth: i32) -> Self {
        Self::InvalidArgument(format!("depth must be non-negative, got {depth}"))
    }
}
