//! Search tree vertices.
//!
//! A [`Node`] owns its game state and, once expanded, the child nodes for
//! every legal move. Children are materialized at most once, so re-running
//! a search on the same root (as iterative deepening does) walks the
//! already-built structure instead of regenerating it. Values are never
//! cached on nodes since they depend on the search depth.

use std::cell::OnceCell;

use crate::game::{GameState, IllegalMove};

/// A lazily-expanded wrapper around a game state.
///
/// The node is either unexpanded or expanded, and moves from the first to
/// the second exactly once, on the first call to [`Node::expand`].
#[derive(Debug)]
pub struct Node<G: GameState> {
    state: G,
    children: OnceCell<Vec<(G::Move, Node<G>)>>,
}

impl<G: GameState> Node<G> {
    /// Wraps `state` in a fresh, unexpanded node.
    pub fn new(state: G) -> Self {
        Self {
            state,
            children: OnceCell::new(),
        }
    }

    pub fn state(&self) -> &G {
        &self.state
    }

    /// Forwards to [`GameState::is_terminal`].
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_expanded(&self) -> bool {
        self.children.get().is_some()
    }

    /// Returns a `(move, child)` pair for every legal move, in the order
    /// given by [`GameState::possible_moves`].
    ///
    /// The first call applies every move and caches the children; later
    /// calls return the same slice without touching the game state. If the
    /// game rejects one of its own moves the node stays unexpanded.
    pub fn expand(&self) -> Result<&[(G::Move, Node<G>)], IllegalMove> {
        if let Some(children) = self.children.get() {
            return Ok(children);
        }

        let children = self
            .state
            .possible_moves()
            .into_iter()
            .map(|mv| {
                let child = self.state.apply_move(&mv)?;
                Ok((mv, Node::new(child)))
            })
            .collect::<Result<Vec<_>, IllegalMove>>()?;

        Ok(self.children.get_or_init(|| children))
    }

    /// The cached children, or `None` if the node was never expanded.
    pub fn children(&self) -> Option<&[(G::Move, Node<G>)]> {
        self.children.get().map(Vec::as_slice)
    }

    /// Number of expanded nodes in this subtree, this node included.
    pub fn expanded_count(&self) -> usize {
        match self.children.get() {
            Some(children) => {
                1 + children
                    .iter()
                    .map(|(_, child)| child.expanded_count())
                    .sum::<usize>()
            }
            None => 0,
        }
    }

    /// Consumes the node and returns the child reached by `mv`, keeping
    /// whatever part of its subtree was already expanded.
    ///
    /// Returns `None` if the node was never expanded or `mv` is not one of
    /// its moves.
    pub fn into_child(self, mv: &G::Move) -> Option<Node<G>> {
        self.children
            .into_inner()?
            .into_iter()
            .find_map(|(m, child)| (m == *mv).then_some(child))
    }

    pub fn into_state(self) -> G {
        self.state
    }
}
