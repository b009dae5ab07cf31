extern crate minimax;

use std::time::Duration;

use clap::Parser;
use minimax::game::{GameState, IllegalMove, Player};
use minimax::minimax::MinimaxBot;
use minimax::node::Node;
use minimax::{SearchConfig, SelfPlay};

// X is the maximizing player, O is the minimizing player
const X: Player = Player::Maximizing;

// An enum representing what is in a square of the board
#[derive(Hash, Clone, Eq, PartialEq, Copy, Debug)]
enum Square {
    X,
    O,
    Empty,
}

type Board = [Square; 9];

#[derive(Hash, Clone, Eq, PartialEq, Debug)]
struct TicTacToe {
    board: Board,
    x_turn: bool,
}

impl TicTacToe {
    pub fn new() -> Self {
        TicTacToe {
            board: [Square::Empty; 9],
            x_turn: true,
        }
    }

    // returns Some(X) or Some(O) once a line is complete
    pub fn winner(&self) -> Option<Square> {
        let three_in_a_row = [
            (0, 1), // horizontal wins
            (3, 1),
            (6, 1),
            (0, 3), // vertical wins
            (1, 3),
            (2, 3),
            (0, 4), // diagonal wins
            (2, 2),
        ];

        three_in_a_row.into_iter().find_map(|(start, step)| {
            let s = self.board[start];
            let line = s == self.board[start + step] && s == self.board[start + 2 * step];
            (line && s != Square::Empty).then_some(s)
        })
    }

    pub fn board_string(&self) -> String {
        let board: Vec<char> = self
            .board
            .iter()
            .map(|c| match c {
                Square::X => 'X',
                Square::O => 'O',
                Square::Empty => ' ',
            })
            .collect();
        let division = "---------\n";
        let mut board_str = format!("\n{} | {} | {}\n", board[0], board[1], board[2]);
        board_str += division;
        board_str += format!("{} | {} | {}\n", board[3], board[4], board[5]).as_str();
        board_str += division;
        board_str += format!("{} | {} | {}\n", board[6], board[7], board[8]).as_str();

        board_str
    }
}

impl GameState for TicTacToe {
    type Move = usize;

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.board.contains(&Square::Empty)
    }

    fn evaluate(&self) -> f32 {
        match self.winner() {
            Some(Square::X) => 1.0,
            Some(Square::O) => -1.0,
            _ => 0.0,
        }
    }

    fn possible_moves(&self) -> impl IntoIterator<Item = usize> {
        let mut res_vec = Vec::with_capacity(9);
        if self.winner().is_some() {
            return res_vec;
        }

        for (i, square) in self.board.iter().enumerate() {
            if square == &Square::Empty {
                res_vec.push(i);
            }
        }

        res_vec
    }

    fn apply_move(&self, loc: &usize) -> Result<Self, IllegalMove> {
        if self.winner().is_some() || self.board.get(*loc) != Some(&Square::Empty) {
            return Err(IllegalMove::new(loc));
        }
        let mut new_board = self.board;
        new_board[*loc] = if self.x_turn { Square::X } else { Square::O };
        Ok(TicTacToe {
            board: new_board,
            x_turn: !self.x_turn,
        })
    }
}

/// Let the engine play tic-tac-toe against itself.
#[derive(Parser, Debug)]
struct Args {
    /// Plies to search ahead on every move.
    #[arg(long, default_value_t = 9)]
    depth: i32,

    /// Search without alpha-beta pruning.
    #[arg(long)]
    no_pruning: bool,

    /// Search depths 1..=depth in turn.
    #[arg(long)]
    iterative: bool,

    /// Stop deepening after this many milliseconds (implies --iterative).
    #[arg(long)]
    time_limit_ms: Option<u64>,
}

fn main() -> Result<(), minimax::SearchError> {
    env_logger::init();
    let args = Args::parse();

    let mut config = SearchConfig::default()
        .with_depth(args.depth)
        .with_pruning(!args.no_pruning)
        .with_iterative_deepening(args.iterative);
    if let Some(ms) = args.time_limit_ms {
        config = config.with_time_limit(Duration::from_millis(ms));
    }

    let root = TicTacToe::new();
    let bot = MinimaxBot::with_config(config.clone());
    let now = std::time::Instant::now();
    let res = bot.decide(&Node::new(root.clone()), X)?;
    println!(
        "Opening: value {} with move {:?}, {} nodes in {} microseconds",
        res.value,
        res.best_move,
        bot.stats().nodes,
        now.elapsed().as_micros()
    );

    let play = SelfPlay::new(config);
    let record = play.play(root.clone(), X)?;

    let mut game = root;
    println!("Simulating a bot TicTacToe game.\n{}", game.board_string());
    for mv in &record.moves {
        game = game.apply_move(mv)?;
        println!("{}", game.board_string());
    }
    println!(
        "{:?} after {} plies ({:?}), {} nodes searched",
        record.outcome,
        record.moves.len(),
        record.end,
        play.bot().stats().nodes
    );

    Ok(())
}
