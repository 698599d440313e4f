//! Game session management for driving human and engine turns

use serde::{Deserialize, Serialize};

use crate::{
    board::{BoardState, Player},
    evaluator::{self, Outcome},
    search,
};

/// Who is playing: two humans, or one human against the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    TwoPlayers,
    VsComputer { computer: Player },
}

/// A game session owned by the caller: the board plus the per-session mode
/// configuration.
///
/// Turn bookkeeping lives here and in the board's `to_move` field; the
/// outcome is derived from the board on demand, never stored.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub board: BoardState,
    pub mode: Mode,
}

impl Session {
    /// Start a session with an empty board, X to move
    pub fn new(mode: Mode) -> Self {
        Session {
            board: BoardState::new(),
            mode,
        }
    }

    /// Terminal status of the current board
    pub fn outcome(&self) -> Outcome {
        evaluator::evaluate(&self.board)
    }

    /// True once the game is won or drawn
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Apply a move for the side to move and report the resulting status.
    ///
    /// # Errors
    ///
    /// Returns [`GameOver`](crate::Error::GameOver) once the game is
    /// decided, and rejects out-of-range or occupied positions.
    pub fn play(&mut self, pos: usize) -> Result<Outcome, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        self.board = self.board.make_move(pos)?;
        Ok(self.outcome())
    }

    /// True when the engine should reply in the current position
    pub fn is_engine_turn(&self) -> bool {
        match self.mode {
            Mode::VsComputer { computer } => computer == self.board.to_move && !self.is_over(),
            Mode::TwoPlayers => false,
        }
    }

    /// Search the current position, play the optimal move, and return the
    /// position played.
    ///
    /// # Errors
    ///
    /// Returns [`GameOver`](crate::Error::GameOver) once the game is
    /// decided.
    pub fn engine_move(&mut self) -> Result<usize, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let result = search::search(&self.board);
        let pos = result
            .best_move
            .expect("search on a non-terminal board must yield a move");
        self.board = self.board.make_move(pos)?;
        Ok(pos)
    }

    /// Start a fresh game, keeping the mode
    pub fn reset(&mut self) {
        self.board = BoardState::new();
    }
}
