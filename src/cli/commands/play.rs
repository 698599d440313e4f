//! Interactive terminal game
//!
//! Drives a [`Session`] from stdin: two humans sharing the terminal, or one
//! human against the engine.

use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::{
    board::{BoardState, Player},
    evaluator::Outcome,
    game::{Mode, Session},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    /// Two humans sharing the terminal
    TwoPlayers,
    /// One human against the engine
    Computer,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SideArg {
    X,
    O,
}

impl From<SideArg> for Player {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::X => Player::X,
            SideArg::O => Player::O,
        }
    }
}

#[derive(Args)]
pub struct PlayArgs {
    /// Game mode
    #[arg(long, value_enum, default_value = "computer")]
    mode: ModeArg,

    /// Which side the engine plays in computer mode
    #[arg(long, value_enum, default_value = "o")]
    computer_side: SideArg,

    /// Pause before the engine replies, in milliseconds. Purely cosmetic;
    /// the search itself is instantaneous
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mode = match args.mode {
        ModeArg::TwoPlayers => Mode::TwoPlayers,
        ModeArg::Computer => Mode::VsComputer {
            computer: args.computer_side.into(),
        },
    };

    println!("Board positions:");
    println!("0 1 2\n3 4 5\n6 7 8\n");

    let mut session = Session::new(mode);
    loop {
        run_game(&mut session, args.delay_ms)?;
        if !prompt_yes_no("Play again? [y/N] ")? {
            break;
        }
        session.reset();
        println!();
    }

    Ok(())
}

fn run_game(session: &mut Session, delay_ms: u64) -> Result<()> {
    print_board(&session.board);

    loop {
        match session.outcome() {
            Outcome::Won(player) => {
                println!("Player {player} has won!");
                return Ok(());
            }
            Outcome::Draw => {
                println!("It's a draw!");
                return Ok(());
            }
            Outcome::InProgress => {}
        }

        if session.is_engine_turn() {
            if delay_ms > 0 {
                thread::sleep(Duration::from_millis(delay_ms));
            }
            let pos = session.engine_move()?;
            println!("Engine plays at {pos}");
        } else {
            let pos = prompt_move(session)?;
            session.play(pos)?;
        }

        print_board(&session.board);
    }
}

fn prompt_move(session: &Session) -> Result<usize> {
    loop {
        print!("Player {} move (0-8): ", session.board.to_move);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            anyhow::bail!("input closed");
        }

        if let Ok(pos) = input.trim().parse::<usize>() {
            if pos < 9 && session.board.is_empty(pos) {
                return Ok(pos);
            }
        }
        println!("Invalid move, try again.");
    }
}

fn prompt_yes_no(question: &str) -> Result<bool> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(false);
    }
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}

fn print_board(board: &BoardState) {
    for row in 0..3 {
        for col in 0..3 {
            print!("{} ", board.get(row * 3 + col).to_char());
        }
        println!();
    }
    println!();
}
