//! Position analysis
//!
//! Computes the terminal status and minimax-optimal move for positions, and
//! optionally exports the optimal policy for the whole game as JSON.

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::{
    board::BoardState,
    cli::output,
    evaluator::{self, Outcome},
    search::search,
};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Board to analyze, e.g. "XOX.O....". Whitespace is ignored; an
    /// optional _X/_O suffix names the side to move
    #[arg(long)]
    state: Option<String>,

    /// Export the optimal policy for every reachable position to a JSON file
    #[arg(long)]
    export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    if let Some(s) = &args.state {
        let state = BoardState::from_string(s)?;
        output::print_section("Optimal Analysis for Custom State");
        analyze_position(&state, "Custom state");
    } else if args.export.is_none() {
        output::print_section("Optimal Policy Analysis");
        println!("Showing optimal moves for key positions:\n");

        analyze_position(&BoardState::new(), "Empty board");
        analyze_position(
            &BoardState::from_string("....X...._O")?,
            "Center taken by X",
        );
        analyze_position(
            &BoardState::from_string("X........_O")?,
            "Corner taken by X",
        );
    }

    if let Some(path) = &args.export {
        export_policy(path)?;
        println!("\nOptimal policy exported to: {}", path.display());
    }

    Ok(())
}

/// Analyze a single position
fn analyze_position(state: &BoardState, description: &str) {
    println!("{description}:");
    println!("{state}");

    match evaluator::evaluate(state) {
        Outcome::Won(player) => {
            println!("Outcome: {player} has won\n");
            return;
        }
        Outcome::Draw => {
            println!("Outcome: draw\n");
            return;
        }
        Outcome::InProgress => {}
    }

    let threats = evaluator::winning_moves(state, state.to_move);
    if !threats.is_empty() {
        println!("Immediate wins for {}: {threats:?}", state.to_move);
    }

    let result = search(state);
    if let Some(mv) = result.best_move {
        println!(
            "Optimal move for {}: position {} (row {}, col {})",
            state.to_move,
            mv,
            mv / 3,
            mv % 3
        );
    }
    let verdict = match result.score {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    };
    println!("Value with perfect play: {} ({verdict})\n", result.score);
}

#[derive(Serialize)]
struct PolicyExport {
    description: &'static str,
    total_states: usize,
    policy: BTreeMap<String, PolicyEntry>,
}

#[derive(Serialize)]
struct PolicyEntry {
    score: i32,
    best_move: Option<usize>,
}

/// Export the optimal policy for every reachable position to a JSON file
fn export_policy(path: &PathBuf) -> Result<()> {
    println!("\nComputing optimal policy for all reachable positions...");

    let states = BoardState::reachable_states();
    let pb = output::create_export_progress(states.len() as u64);

    let mut policy = BTreeMap::new();
    for state in &states {
        let result = search(state);
        policy.insert(
            state.encode(),
            PolicyEntry {
                score: result.score,
                best_move: result.best_move,
            },
        );
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("  Total policy entries: {}", policy.len());

    let export = PolicyExport {
        description: "Optimal (minimax) policy for Tic-Tac-Toe",
        total_states: policy.len(),
        policy,
    };

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;

    Ok(())
}
