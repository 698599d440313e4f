//! Perfect-play Tic-Tac-Toe engine
//!
//! This crate provides:
//! - Complete board representation with validated move application
//! - Terminal-status evaluation over the 8 winning lines
//! - Exhaustive minimax search computing optimal moves
//! - A session layer for driving human and engine turns

pub mod board;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod search;

pub use board::{BoardState, Cell, Player};
pub use error::{Error, Result};
pub use evaluator::{evaluate, winning_moves, Outcome, WINNING_LINES};
pub use game::{Mode, Session};
pub use search::{search, SearchResult};
