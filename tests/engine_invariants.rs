//! Engine property suite
//! Validates line detection, search optimality, tie-breaking, and the
//! backtracking invariant over the full reachable state space

use std::collections::HashMap;

use oxo::{evaluate, search, BoardState, Cell, Outcome, Player, WINNING_LINES};

/// Independent memoized minimax over persistent states, deliberately a
/// second implementation path (no in-place backtracking) to check the
/// engine against.
fn oracle(state: &BoardState, memo: &mut HashMap<String, i32>) -> i32 {
    let key = state.encode();
    if let Some(&value) = memo.get(&key) {
        return value;
    }

    let value = match evaluate(state) {
        Outcome::Won(Player::X) => 1,
        Outcome::Won(Player::O) => -1,
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let mut best = match state.to_move {
                Player::X => i32::MIN,
                Player::O => i32::MAX,
            };
            for pos in state.empty_positions() {
                let child = oracle(&state.make_move(pos).unwrap(), memo);
                best = match state.to_move {
                    Player::X => best.max(child),
                    Player::O => best.min(child),
                };
            }
            best
        }
    };

    memo.insert(key, value);
    value
}

mod line_detection {
    use super::*;

    /// Each of the 8 lines individually, one board per line, all other
    /// cells empty, for both players
    #[test]
    fn each_winning_line_is_reported_exactly() {
        for (line_idx, line) in WINNING_LINES.iter().enumerate() {
            for player in [Player::X, Player::O] {
                let mut cells = [Cell::Empty; 9];
                for &pos in line {
                    cells[pos] = player.to_cell();
                }
                let state = BoardState {
                    cells,
                    to_move: player.opponent(),
                };
                assert_eq!(
                    evaluate(&state),
                    Outcome::Won(player),
                    "line {line_idx} {line:?} not detected for {player}"
                );
            }
        }
    }

    #[test]
    fn line_scan_is_deterministic() {
        // Two completed lines for the same player (fork converted twice in
        // an unreachable position): the scan must still report that player,
        // on repeated calls, without depending on which line comes first.
        let mut cells = [Cell::Empty; 9];
        for pos in [0, 1, 2, 6, 7, 8] {
            cells[pos] = Cell::X;
        }
        cells[3] = Cell::O;
        cells[4] = Cell::O;
        let state = BoardState {
            cells,
            to_move: Player::O,
        };

        let first = evaluate(&state);
        assert_eq!(first, Outcome::Won(Player::X));
        for _ in 0..10 {
            assert_eq!(evaluate(&state), first);
        }
    }
}

mod fixed_positions {
    use super::*;

    #[test]
    fn x_completes_the_top_row() {
        let state = BoardState::from_string("XX.OO....").unwrap();
        assert_eq!(state.to_move, Player::X);

        let result = search(&state);
        assert_eq!(result.score, 1);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn double_diagonal_threat_wins_for_x() {
        // XOX / OXO / ... with X to move: both diagonals carry two X marks,
        // so X wins immediately; 6 is the lowest winning index.
        let state = BoardState::from_string("XOXOXO...").unwrap();
        assert_eq!(state.to_move, Player::X);

        let result = search(&state);
        assert_eq!(result.score, 1);
        assert_eq!(result.best_move, Some(6));
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // Built directly: this arrangement is not reachable by alternating
        // play, but evaluation and terminal scoring are pure functions of
        // the cells.
        let cells = "XOXOXOOXO"
            .chars()
            .map(|c| Cell::from_char(c).unwrap())
            .collect::<Vec<_>>()
            .try_into()
            .unwrap();
        let state = BoardState {
            cells,
            to_move: Player::X,
        };

        assert_eq!(evaluate(&state), Outcome::Draw);

        let result = search(&state);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn empty_board_draws_with_centre_opening() {
        let result = search(&BoardState::new());
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Some(4));
    }
}

mod terminal_behaviour {
    use super::*;

    #[test]
    fn terminal_scores_match_evaluate_with_no_move() {
        let terminals = [
            "XXXOO....", // X top row
            "OOOXX.X..", // O top row
            "X.OX.OX..", // X left column
            "XOXXOXOXO", // full board, drawn
        ];

        for label in terminals {
            let state = BoardState::from_string(label).unwrap();
            let outcome = evaluate(&state);
            assert!(outcome.is_terminal(), "{label} should be terminal");

            let expected = match outcome {
                Outcome::Won(Player::X) => 1,
                Outcome::Won(Player::O) => -1,
                _ => 0,
            };
            let result = search(&state);
            assert_eq!(result.score, expected, "score mismatch for {label}");
            assert_eq!(result.best_move, None, "terminal {label} yielded a move");
        }
    }
}

mod exhaustive {
    use super::*;

    /// Enumerate every reachable position and verify search at each node:
    /// optimal score against the oracle, lowest-index tie-break (centre on
    /// the empty board), no move from terminals, and bit-for-bit board
    /// preservation.
    #[test]
    fn search_is_optimal_and_pure_everywhere() {
        let states = BoardState::reachable_states();
        assert_eq!(states.len(), 5478, "reachable position count");

        let terminal = states.iter().filter(|s| s.is_terminal()).count();
        assert_eq!(terminal, 958, "terminal position count");
        assert_eq!(states.len() - terminal, 4520, "in-progress position count");

        let mut memo = HashMap::new();
        for state in &states {
            let before = *state;
            let result = search(state);
            assert_eq!(
                state.cells,
                before.cells,
                "search mutated the board for {}",
                before.encode()
            );

            let value = oracle(state, &mut memo);
            assert_eq!(
                result.score,
                value,
                "suboptimal score for {}",
                state.encode()
            );

            if state.is_terminal() {
                assert_eq!(
                    result.best_move,
                    None,
                    "terminal {} yielded a move",
                    state.encode()
                );
                continue;
            }

            let chosen = result
                .best_move
                .unwrap_or_else(|| panic!("no move for in-progress {}", state.encode()));

            let optimal: Vec<usize> = state
                .empty_positions()
                .into_iter()
                .filter(|&pos| oracle(&state.make_move(pos).unwrap(), &mut memo) == value)
                .collect();
            assert!(
                optimal.contains(&chosen),
                "move {chosen} is not optimal for {}",
                state.encode()
            );

            if state.occupied_count() == 0 {
                // The one documented exception to the lowest-index rule
                assert_eq!(chosen, 4, "empty board must open in the centre");
            } else {
                assert_eq!(
                    chosen, optimal[0],
                    "tie-break must pick the lowest index for {}",
                    state.encode()
                );
            }
        }
    }
}
