//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Selects which search [`MinimaxBot::decide`](crate::minimax::MinimaxBot::decide)
/// runs and how deep it goes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Depth limit for a single search, or the largest depth reached by
    /// iterative deepening. Must be non-negative.
    pub depth: i32,

    /// Use alpha-beta pruning for single searches.
    /// Iterative deepening always prunes.
    pub pruning: bool,

    /// Search depths `1..=depth` in turn instead of `depth` alone.
    pub iterative_deepening: bool,

    /// Stop deepening once this much time has passed. Only checked
    /// between depths, and only when `iterative_deepening` is set.
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            pruning: true,
            iterative_deepening: false,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_iterative_deepening(mut self, iterative_deepening: bool) -> Self {
        self.iterative_deepening = iterative_deepening;
        self
    }

    /// Turns on iterative deepening and bounds it by `limit`.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.iterative_deepening = true;
        self.time_limit = Some(limit);
        self
    }
}
