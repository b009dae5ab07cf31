//! Iterative deepening on top of [`MinimaxBot::search`].
//!
//! Each depth is a full alpha-beta search from the root. Only the deepest
//! completed result is kept. Because [`Node`] memoizes its children, later
//! depths walk the tree built by earlier ones; values are recomputed.
use std::time::Instant;

use log::debug;

use crate::error::SearchError;
use crate::game::*;
use crate::minimax::{MinimaxBot, SearchResult};
use crate::node::Node;

impl<G: GameState> MinimaxBot<G> {
    /// Runs alpha-beta searches at depths `1, 2, ..., depth` and returns
    /// the result of the last one.
    ///
    /// A `depth` of zero evaluates the root. A negative `depth` fails with
    /// [`SearchError::InvalidArgument`].
    pub fn run(
        &self,
        root: &Node<G>,
        depth: i32,
        player: Player,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        self.deepen(root, depth, player, None)
    }

    /// Like [`MinimaxBot::run`], but does not start a new depth once
    /// `deadline` has passed. The deadline is only checked between depths,
    /// so depth 1 always completes and a running search is never cut short.
    pub fn run_until(
        &self,
        root: &Node<G>,
        depth: i32,
        player: Player,
        deadline: Instant,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        self.deepen(root, depth, player, Some(deadline))
    }

    fn deepen(
        &self,
        root: &Node<G>,
        depth: i32,
        player: Player,
        deadline: Option<Instant>,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        if depth < 0 {
            return Err(SearchError::negative_depth(depth));
        }
        if depth == 0 {
            return self.search(root, 0, player, true);
        }

        let mut best = self.search(root, 1, player, true)?;
        debug!("depth 1: value {} move {:?}", best.value, best.best_move);

        for d in 2..=depth {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                debug!("deadline reached, keeping depth {} result", d - 1);
                break;
            }
            best = self.search(root, d, player, true)?;
            debug!("depth {d}: value {} move {:?}", best.value, best.best_move);
        }

        Ok(best)
    }
}
