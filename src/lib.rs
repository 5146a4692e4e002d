//! A depth-limited minimax agent for playing the board game 'Connect 4'
//!
//! The agent searches a fixed number of plies with alpha-beta pruning, exploring
//! central columns first, and scores the positions at the search horizon with a
//! hand-tuned positional evaluation.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_agent::{arrayboard::ArrayBoard, solver::Solver, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three in a row along the bottom
//! let board = ArrayBoard::from_moves("112233")?;
//! let mut solver = Solver::new(Player::One);
//! let best_move = solver.choose_move(&board, 4)?;
//!
//! assert_eq!(best_move, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod arrayboard;

pub mod evaluation;

pub mod config;

pub mod solver;


pub use board::{Board, Cell, Grid, Player};
pub use error::{BoardError, ConfigError, SearchError};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

// every line direction must fit at least one window
const_assert!(WIDTH >= CONNECT);
const_assert!(HEIGHT >= CONNECT);
