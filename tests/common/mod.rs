//! Games shared by the integration tests.
#![allow(dead_code)]

use std::cell::Cell;

use minimax::game::{GameState, IllegalMove};

// =============================================================================
// Tic-tac-toe
// =============================================================================

#[derive(Hash, Clone, Copy, Eq, PartialEq, Debug)]
pub enum Square {
    X,
    O,
    Empty,
}

/// X is the maximizing player, O the minimizing one.
#[derive(Hash, Clone, Eq, PartialEq, Debug)]
pub struct TicTacToe {
    pub board: [Square; 9],
    pub x_turn: bool,
}

impl TicTacToe {
    pub fn new() -> Self {
        TicTacToe {
            board: [Square::Empty; 9],
            x_turn: true,
        }
    }

    /// Builds a position from a 9-character string of `X`, `O` and `.`.
    pub fn from_cells(cells: &str, x_turn: bool) -> Self {
        let mut board = [Square::Empty; 9];
        for (square, c) in board.iter_mut().zip(cells.chars()) {
            *square = match c {
                'X' => Square::X,
                'O' => Square::O,
                _ => Square::Empty,
            };
        }
        TicTacToe { board, x_turn }
    }

    pub fn winner(&self) -> Option<Square> {
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];

        LINES.iter().find_map(|[a, b, c]| {
            let s = self.board[*a];
            (s != Square::Empty && s == self.board[*b] && s == self.board[*c]).then_some(s)
        })
    }
}

impl GameState for TicTacToe {
    type Move = usize;

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.board.iter().all(|s| *s != Square::Empty)
    }

    fn evaluate(&self) -> f32 {
        match self.winner() {
            Some(Square::X) => 1.0,
            Some(Square::O) => -1.0,
            _ => 0.0,
        }
    }

    fn possible_moves(&self) -> impl IntoIterator<Item = usize> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..9)
            .filter(|i| self.board[*i] == Square::Empty)
            .collect::<Vec<_>>()
    }

    fn apply_move(&self, loc: &usize) -> Result<Self, IllegalMove> {
        if self.winner().is_some() || self.board.get(*loc) != Some(&Square::Empty) {
            return Err(IllegalMove::new(loc));
        }
        let mut board = self.board;
        board[*loc] = if self.x_turn { Square::X } else { Square::O };
        Ok(TicTacToe {
            board,
            x_turn: !self.x_turn,
        })
    }
}

// =============================================================================
// Explicit game trees
// =============================================================================

/// A hand-written game tree. Inner nodes evaluate to their heuristic,
/// moves are child indices.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Tree {
    Leaf(i32),
    Branch(i32, Vec<Tree>),
}

pub fn leaves(values: &[i32]) -> Tree {
    Tree::Branch(0, values.iter().copied().map(Tree::Leaf).collect())
}

pub fn branch(children: Vec<Tree>) -> Tree {
    Tree::Branch(0, children)
}

impl Tree {
    /// The same tree with every value negated.
    pub fn negated(&self) -> Tree {
        match self {
            Tree::Leaf(v) => Tree::Leaf(-v),
            Tree::Branch(h, children) => {
                Tree::Branch(-h, children.iter().map(Tree::negated).collect())
            }
        }
    }
}

impl GameState for Tree {
    type Move = usize;

    fn is_terminal(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    fn evaluate(&self) -> f32 {
        match self {
            Tree::Leaf(v) | Tree::Branch(v, _) => *v as f32,
        }
    }

    fn possible_moves(&self) -> impl IntoIterator<Item = usize> {
        match self {
            Tree::Leaf(_) => 0..0,
            Tree::Branch(_, children) => 0..children.len(),
        }
    }

    fn apply_move(&self, mv: &usize) -> Result<Self, IllegalMove> {
        match self {
            Tree::Branch(_, children) if *mv < children.len() => Ok(children[*mv].clone()),
            _ => Err(IllegalMove::new(mv)),
        }
    }
}

// =============================================================================
// Misbehaving states
// =============================================================================

thread_local! {
    pub static INSPECTIONS: Cell<usize> = const { Cell::new(0) };
}

/// Counts every call the engine makes into it.
#[derive(Clone, Debug)]
pub struct Watched;

impl Watched {
    fn touch() {
        INSPECTIONS.with(|i| i.set(i.get() + 1));
    }
}

impl GameState for Watched {
    type Move = u8;

    fn is_terminal(&self) -> bool {
        Self::touch();
        false
    }

    fn evaluate(&self) -> f32 {
        Self::touch();
        0.0
    }

    fn possible_moves(&self) -> impl IntoIterator<Item = u8> {
        Self::touch();
        vec![0]
    }

    fn apply_move(&self, _mv: &u8) -> Result<Self, IllegalMove> {
        Self::touch();
        Ok(Watched)
    }
}

/// Offers moves 0 and 1 but refuses to play move 1.
#[derive(Clone, Debug)]
pub struct Broken;

impl GameState for Broken {
    type Move = u8;

    fn is_terminal(&self) -> bool {
        false
    }

    fn evaluate(&self) -> f32 {
        0.0
    }

    fn possible_moves(&self) -> impl IntoIterator<Item = u8> {
        vec![0, 1]
    }

    fn apply_move(&self, mv: &u8) -> Result<Self, IllegalMove> {
        match *mv {
            0 => Ok(Broken),
            _ => Err(IllegalMove::new(mv)),
        }
    }
}

/// Two positions that alternate forever. The side to move decides the
/// evaluation.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Seesaw {
    pub first_to_move: bool,
}

impl GameState for Seesaw {
    type Move = u8;

    fn is_terminal(&self) -> bool {
        false
    }

    fn evaluate(&self) -> f32 {
        if self.first_to_move {
            1.0
        } else {
            -1.0
        }
    }

    fn possible_moves(&self) -> impl IntoIterator<Item = u8> {
        vec![0, 1]
    }

    fn apply_move(&self, mv: &u8) -> Result<Self, IllegalMove> {
        if *mv > 1 {
            return Err(IllegalMove::new(mv));
        }
        Ok(Seesaw {
            first_to_move: !self.first_to_move,
        })
    }
}

/// Counts up forever, never repeating a state.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Endless(pub u32);

impl GameState for Endless {
    type Move = u32;

    fn is_terminal(&self) -> bool {
        false
    }

    fn evaluate(&self) -> f32 {
        -(self.0 as f32)
    }

    fn possible_moves(&self) -> impl IntoIterator<Item = u32> {
        vec![1, 2]
    }

    fn apply_move(&self, mv: &u32) -> Result<Self, IllegalMove> {
        Ok(Endless(self.0 + mv))
    }
}
