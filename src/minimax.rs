//! This module's primary struct is [`MinimaxBot`],
//! which runs minimax (optionally with alpha-beta pruning) on a game.
use std::cell::Cell;
use std::marker::PhantomData;
use std::time::Instant;

use log::trace;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::game::*;
use crate::node::Node;

/// The outcome of a search: the value of the searched node and the move
/// that achieves it.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    pub value: f32,

    /// `None` when the node was evaluated directly, i.e. it is terminal or
    /// the search had no depth left.
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    fn leaf(value: f32) -> Self {
        Self {
            value,
            best_move: None,
        }
    }
}

/// Counters accumulated by a [`MinimaxBot`] across searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes the search entered, leaves included.
    pub nodes: u64,

    /// Times alpha-beta abandoned the remaining siblings of a node.
    pub cutoffs: u64,
}

/// A bot that runs the minimax algorithm.
///
/// The struct is parameterized on G, the type of a game that
/// implements [`crate::game::GameState`]. The bot itself holds no game
/// data, only its [`SearchConfig`] and running [`SearchStats`].
pub struct MinimaxBot<G>
where
    G: GameState,
{
    config: SearchConfig,
    stats: Cell<SearchStats>,
    _game: PhantomData<G>,
}

impl<G: GameState> Default for MinimaxBot<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> MinimaxBot<G> {
    /// Create a MinimaxBot with the default [`SearchConfig`].
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            stats: Cell::new(SearchStats::default()),
            _game: PhantomData,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats.get()
    }

    pub fn reset_stats(&self) {
        self.stats.set(SearchStats::default());
    }

    fn record(&self, update: impl FnOnce(&mut SearchStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }

    /// Searches `node` to `depth` plies with `player` to move.
    ///
    /// Returns the minimax value of `node` and the first move (in
    /// [`GameState::possible_moves`] order) that achieves it. With
    /// `pruning` set the same result is found while visiting fewer nodes.
    ///
    /// Fails with [`SearchError::InvalidArgument`] if `depth` is negative,
    /// before the game state is looked at, and with
    /// [`SearchError::IllegalMove`] if the game rejects one of its own moves.
    pub fn search(
        &self,
        node: &Node<G>,
        depth: i32,
        player: Player,
        pruning: bool,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        self.search_window(
            node,
            depth,
            player,
            pruning,
            f32::NEG_INFINITY,
            f32::INFINITY,
        )
    }

    /// Like [`MinimaxBot::search`], but starts from the bounds `alpha` and
    /// `beta` instead of the full window. The bounds are ignored when
    /// `pruning` is off.
    pub fn search_window(
        &self,
        node: &Node<G>,
        depth: i32,
        player: Player,
        pruning: bool,
        alpha: f32,
        beta: f32,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        let depth = u32::try_from(depth).map_err(|_| SearchError::negative_depth(depth))?;
        self.minimax(node, depth, player, pruning, alpha, beta)
    }

    /// Runs the search selected by the bot's [`SearchConfig`]: a single
    /// search to `depth`, or iterative deepening up to `depth`, bounded by
    /// `time_limit` if one is set.
    pub fn decide(
        &self,
        root: &Node<G>,
        player: Player,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        let config = &self.config;
        if !config.iterative_deepening {
            return self.search(root, config.depth, player, config.pruning);
        }

        match config.time_limit {
            Some(limit) => self.run_until(root, config.depth, player, Instant::now() + limit),
            None => self.run(root, config.depth, player),
        }
    }

    fn minimax(
        &self,
        node: &Node<G>,
        depth: u32,
        player: Player,
        pruning: bool,
        mut alpha: f32,
        mut beta: f32,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        self.record(|s| s.nodes += 1);

        if depth == 0 || node.is_terminal() {
            return Ok(SearchResult::leaf(node.state().evaluate()));
        }

        let children = node.expand()?;
        if children.is_empty() {
            return Ok(SearchResult::leaf(node.state().evaluate()));
        }

        let mut best = SearchResult::leaf(player.worst());

        for (mv, child) in children {
            let value = self
                .minimax(child, depth - 1, player.flip(), pruning, alpha, beta)?
                .value;

            if best.best_move.is_none() || player.prefers(value, best.value) {
                best.value = value;
                best.best_move = Some(mv.clone());
            }

            if pruning {
                match player {
                    Player::Maximizing => alpha = alpha.max(best.value),
                    Player::Minimizing => beta = beta.min(best.value),
                }

                if alpha >= beta {
                    trace!("cutoff at depth {depth} after {mv:?} (alpha {alpha}, beta {beta})");
                    self.record(|s| s.cutoffs += 1);
                    break;
                }
            }
        }

        Ok(best)
    }
}
