//! A fixed-depth search agent for playing the board game 'Connect 4'
//!
//! Given a board, the agent searches every line of play a set number of
//! plies ahead with negamax and scores the leaves with a heuristic that
//! rewards open runs of discs. It then picks the best scoring column,
//! breaking ties at random.
//!
//! Boards can be any (non-zero) size; the engine reads the dimensions from
//! the board it is handed.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_negamax::{board::Board, config::EngineConfig, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three discs stacked in the fourth column
//! let board = Board::from_moves("414243")?;
//! let mut solver = Solver::new(EngineConfig::new(1, 2)?);
//!
//! assert_eq!(solver.pick_move(&board)?, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod board;

pub mod config;

pub mod error;

pub mod heuristic;

pub mod solver;


pub use board::{Board, Cell, Player};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use heuristic::{evaluate, is_terminal, Score};
pub use solver::{negamax, select_move, Solver};

/// The width of a standard game board in tiles
pub const WIDTH: usize = 7;

/// The height of a standard game board in tiles
pub const HEIGHT: usize = 6;

// a standard board must have room for a winning run in both directions
const_assert!(WIDTH >= heuristic::RUN_LENGTH && HEIGHT >= heuristic::RUN_LENGTH);

// boards are shared between rayon workers when scoring root moves
assert_impl_all!(Board: Send, Sync);
assert_impl_all!(Player: Send, Sync, Copy);
