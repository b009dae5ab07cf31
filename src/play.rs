//! Self-play: both sides pick their moves with the same [`MinimaxBot`].
//!
//! The driver alternates [`Player`]s every ply and advances the root with
//! [`Node::into_child`], so the part of the tree explored for one move is
//! reused when searching the next.
use std::hash::Hash;

use log::info;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::game::*;
use crate::minimax::MinimaxBot;
use crate::node::Node;

/// Result of a finished game, read off the sign of the final evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    MaximizerWins,
    MinimizerWins,
    Draw,
}

impl Outcome {
    pub fn from_value(value: f32) -> Self {
        if value > 0.0 {
            Self::MaximizerWins
        } else if value < 0.0 {
            Self::MinimizerWins
        } else {
            Self::Draw
        }
    }
}

/// Why a self-play game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEnd {
    /// The game reached a state with no legal moves.
    Terminal,
    /// A state occurred for the second time.
    Repetition,
    /// The ply limit was reached first.
    PlyLimit,
}

#[derive(Clone, Debug)]
pub struct GameRecord<G: GameState> {
    pub moves: Vec<G::Move>,
    pub final_state: G,
    pub outcome: Outcome,
    pub end: GameEnd,
}

/// Plays a game against itself.
///
/// States must be hashable so repeated positions can be detected: a game
/// that returns to an earlier state would otherwise never end.
pub struct SelfPlay<G>
where
    G: GameState + Hash + Eq,
{
    bot: MinimaxBot<G>,
    max_plies: Option<usize>,
}

impl<G: GameState + Hash + Eq> SelfPlay<G> {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            bot: MinimaxBot::with_config(config),
            max_plies: None,
        }
    }

    /// Stop the game after `max_plies` moves.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn bot(&self) -> &MinimaxBot<G> {
        &self.bot
    }

    /// Plays from `initial` with `first` to move until the game is over,
    /// a state repeats, or the ply limit is hit. The outcome is decided by
    /// evaluating the last state reached.
    ///
    /// The configured depth must be at least 1, otherwise the bot would
    /// never pick a move.
    pub fn play(&self, initial: G, first: Player) -> Result<GameRecord<G>, SearchError> {
        let depth = self.bot.config().depth;
        if depth < 1 {
            return Err(SearchError::InvalidArgument(format!(
                "self-play needs a depth of at least 1, got {depth}"
            )));
        }

        let mut seen = FxHashSet::default();
        seen.insert(initial.clone());

        let mut root = Node::new(initial);
        let mut player = first;
        let mut moves = Vec::new();

        let end = loop {
            if root.is_terminal() {
                break GameEnd::Terminal;
            }
            if self.max_plies.is_some_and(|max| moves.len() >= max) {
                break GameEnd::PlyLimit;
            }

            let result = self.bot.decide(&root, player)?;
            // non-terminal but without moves: nothing left to play
            let Some(mv) = result.best_move else {
                break GameEnd::Terminal;
            };
            info!(
                "ply {}: {:?} plays {:?} (value {})",
                moves.len() + 1,
                player,
                mv,
                result.value
            );

            root = root
                .into_child(&mv)
                .ok_or_else(|| IllegalMove::new(&mv))?;
            moves.push(mv);
            player = player.flip();

            if !seen.insert(root.state().clone()) {
                break GameEnd::Repetition;
            }
        };

        let final_state = root.into_state();
        let outcome = Outcome::from_value(final_state.evaluate());
        info!(
            "game over after {} plies: {:?} ({:?})",
            moves.len(),
            outcome,
            end
        );

        Ok(GameRecord {
            moves,
            final_state,
            outcome,
            end,
        })
    }
}
