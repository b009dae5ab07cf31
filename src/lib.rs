//! A generic [minimax](https://en.wikipedia.org/wiki/Minimax) search engine in Rust,
//! with optional [alpha-beta pruning](https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning)
//! and iterative deepening.
//!
//! The engine solves two-player, perfect-information, zero-sum games.
//! To use this package, implement the trait [`game::GameState`] for your
//! game, wrap the current position in a [`node::Node`], and hand it to a
//! [`minimax::MinimaxBot`].
//!
//! ```
//! use minimax::game::{GameState, IllegalMove, Player};
//! use minimax::minimax::MinimaxBot;
//! use minimax::node::Node;
//!
//! // Take one or two stones; whoever takes the last stone wins.
//! #[derive(Clone, Debug)]
//! struct Stones {
//!     left: u8,
//!     maximizer_to_move: bool,
//! }
//!
//! impl GameState for Stones {
//!     type Move = u8;
//!
//!     fn is_terminal(&self) -> bool {
//!         self.left == 0
//!     }
//!
//!     fn evaluate(&self) -> f32 {
//!         match (self.left, self.maximizer_to_move) {
//!             // the side that just moved took the last stone
//!             (0, true) => -1.0,
//!             (0, false) => 1.0,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn possible_moves(&self) -> impl IntoIterator<Item = u8> {
//!         (1..=2).filter(|take| *take <= self.left).collect::<Vec<_>>()
//!     }
//!
//!     fn apply_move(&self, take: &u8) -> Result<Self, IllegalMove> {
//!         if *take == 0 || *take > 2 || *take > self.left {
//!             return Err(IllegalMove::new(take));
//!         }
//!         Ok(Stones {
//!             left: self.left - take,
//!             maximizer_to_move: !self.maximizer_to_move,
//!         })
//!     }
//! }
//!
//! let root = Node::new(Stones { left: 4, maximizer_to_move: true });
//! let bot = MinimaxBot::new();
//! let result = bot.search(&root, 4, Player::Maximizing, true).unwrap();
//! assert_eq!(result.value, 1.0);
//! assert_eq!(result.best_move, Some(1));
//! ```

pub mod config;
pub mod deepening;
pub mod error;
pub mod game;
pub mod minimax;
pub mod node;
pub mod play;

pub use config::SearchConfig;
pub use error::SearchError;
pub use game::{GameState, IllegalMove, Player};
pub use minimax::{MinimaxBot, SearchResult, SearchStats};
pub use node::Node;
pub use play::{GameEnd, GameRecord, Outcome, SelfPlay};
