//! Exhaustive adversarial search (minimax) for perfect play

use serde::{Deserialize, Serialize};

use crate::{
    board::{BoardState, Cell, Player},
    evaluator::{self, Outcome},
};

/// Index of the centre cell, the canonical optimal opening
const CENTER: usize = 4;

/// Result of a search: the game-theoretic value of the position and the
/// move that achieves it for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Position value from X's perspective: +1 X wins, -1 O wins, 0 draw
    pub score: i32,
    /// Optimal move for the side to move; `None` when the position is
    /// already terminal
    pub best_move: Option<usize>,
}

/// X-perspective value of a terminal outcome
fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Won(Player::X) => Some(1),
        Outcome::Won(Player::O) => Some(-1),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

/// Places a mark into an empty cell and restores it on drop, so every exit
/// path of the search backtracks the board to the state it found.
struct PlacedMark<'a> {
    cells: &'a mut [Cell; 9],
    pos: usize,
}

impl<'a> PlacedMark<'a> {
    fn place(cells: &'a mut [Cell; 9], pos: usize, mark: Cell) -> Self {
        debug_assert_eq!(
            cells[pos],
            Cell::Empty,
            "search generated a move into an occupied cell"
        );
        cells[pos] = mark;
        PlacedMark { cells, pos }
    }

    fn cells(&mut self) -> &mut [Cell; 9] {
        self.cells
    }
}

impl Drop for PlacedMark<'_> {
    fn drop(&mut self) {
        self.cells[self.pos] = Cell::Empty;
    }
}

/// Compute the game-theoretic value of a position and the optimal move for
/// the side to move.
///
/// The score is always from X's perspective: +1 means X wins with perfect
/// play, -1 means O wins, 0 is a draw. X picks the maximum, O the minimum,
/// and among equally good moves the lowest cell index wins. `best_move` is
/// `None` exactly when the board is already terminal.
///
/// The board is left bit-for-bit unchanged for every input.
///
/// # Panics
///
/// Panics on non-terminal boards whose `to_move` is inconsistent with the
/// piece counts (it is not actually that side's turn). This is a
/// precondition on callers, not a recoverable error. Terminal boards are
/// scored as-is; no move is generated from them, so the side to move is
/// irrelevant.
pub fn search(board: &BoardState) -> SearchResult {
    if let Some(score) = terminal_score(evaluator::evaluate(board)) {
        return SearchResult {
            score,
            best_move: None,
        };
    }

    assert!(
        board.turn_consistent_with_counts(),
        "search precondition violated: {} cannot be to move in '{}'",
        board.to_move,
        board.encode()
    );

    // Known value of the initial position: perfect play draws, and the
    // centre is the canonical opening.
    if board.occupied_count() == 0 {
        return SearchResult {
            score: 0,
            best_move: Some(CENTER),
        };
    }

    let mut scratch = board.cells;
    let result = minimax(&mut scratch, board.to_move);
    debug_assert_eq!(scratch, board.cells, "search failed to backtrack");
    result
}

fn minimax(cells: &mut [Cell; 9], to_move: Player) -> SearchResult {
    if let Some(score) = terminal_score(evaluator::evaluate_cells(cells)) {
        return SearchResult {
            score,
            best_move: None,
        };
    }

    let decided = match to_move {
        Player::X => 1,
        Player::O => -1,
    };
    let mut best: Option<(i32, usize)> = None;

    for pos in 0..9 {
        if cells[pos] != Cell::Empty {
            continue;
        }

        let score = {
            let mut placed = PlacedMark::place(cells, pos, to_move.to_cell());
            minimax(placed.cells(), to_move.opponent()).score
        };

        let improves = match best {
            None => true,
            Some((best_score, _)) => match to_move {
                Player::X => score > best_score,
                Player::O => score < best_score,
            },
        };
        if improves {
            best = Some((score, pos));
            // A decided score cannot be improved on; later candidates can
            // only tie, and ties keep the earliest index.
            if score == decided {
                break;
            }
        }
    }

    // evaluate classifies every full board as terminal, so a non-terminal
    // board always has at least one empty cell.
    let (score, pos) = best.expect("non-terminal board has no empty cell");
    SearchResult {
        score,
        best_move: Some(pos),
    }
}
