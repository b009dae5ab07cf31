//! Holds the base trait for a game that the engine can search.
//! To use the crate, implement [`GameState`] for your game.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned by [`GameState::apply_move`] when asked to play a move that
/// is not among [`GameState::possible_moves`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal move: {0}")]
pub struct IllegalMove(pub String);

impl IllegalMove {
    /// Describes the rejected move by its `Debug` representation.
    pub fn new(mv: impl Debug) -> Self {
        Self(format!("{mv:?}"))
    }
}

/// The two players of a zero-sum game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Maximizing,
    Minimizing,
}

impl Player {
    /// `Maximizing` when `maximizing` is true, `Minimizing` otherwise.
    pub const fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Self::Maximizing
        } else {
            Self::Minimizing
        }
    }

    /// The opposite player.
    pub const fn flip(&self) -> Self {
        match self {
            Self::Maximizing => Self::Minimizing,
            Self::Minimizing => Self::Maximizing,
        }
    }

    /// This is '1' for the maximizer and `-1` for the minimizer.
    pub const fn sign(&self) -> f32 {
        match self {
            Self::Maximizing => 1.0,
            Self::Minimizing => -1.0,
        }
    }

    pub const fn is_maximizing(&self) -> bool {
        matches!(self, Self::Maximizing)
    }

    /// The value this player would least like to see: `-inf` for the
    /// maximizer, `+inf` for the minimizer.
    pub const fn worst(&self) -> f32 {
        match self {
            Self::Maximizing => f32::NEG_INFINITY,
            Self::Minimizing => f32::INFINITY,
        }
    }

    /// True iff `candidate` is a strict improvement over `best` for this player.
    /// Equal values are never an improvement, so the earliest move keeps a tie.
    pub fn prefers(&self, candidate: f32, best: f32) -> bool {
        match self {
            Self::Maximizing => candidate > best,
            Self::Minimizing => candidate < best,
        }
    }
}

/// A two-player, zero-sum, perfect-information game that can be searched.
///
/// States are immutable values: [`GameState::apply_move`] returns a new
/// state and never touches the receiver. The engine only ever calls the
/// four methods below and never inspects the concrete type.
///
/// Move sequences must not cycle within the depth you search to; the
/// engine relies on the depth limit alone to terminate.
pub trait GameState: Sized + Clone {
    /// An opaque transition between states. The engine only clones and
    /// compares moves.
    type Move: Clone + PartialEq + Debug;

    /// True iff no further moves are legal (win, loss or draw reached).
    fn is_terminal(&self) -> bool;

    /// Returns the value of the state from the maximizer's perspective:
    /// positive favors [`Player::Maximizing`].
    ///
    /// Called on terminal states and on states where the depth limit ran
    /// out, so it should give a sensible estimate for both.
    fn evaluate(&self) -> f32;

    /// Every legal move from this state, empty iff the state is terminal.
    ///
    /// The order matters: when several moves reach the same value, the
    /// engine returns the first one yielded here.
    fn possible_moves(&self) -> impl IntoIterator<Item = Self::Move>;

    /// Returns the state reached by playing `mv`, or [`IllegalMove`] if
    /// `mv` is not one of [`GameState::possible_moves`].
    fn apply_move(&self, mv: &Self::Move) -> Result<Self, IllegalMove>;
}
