//! Command-line runner (default binary).
//!
//! Loads a level, applies the actions given on the command line and prints the
//! resulting board, the words on it and whether the level is solved.
//!
//! ```text
//! word-tiles [LEVEL] [ACTION...]
//!
//! LEVEL   bundled level index (default 0) or path to a level JSON file
//! ACTION  shift:<up|down|left|right> | rotate:<tile-id> | place:<tile-id>:<x>:<y> | reset
//! ```

use std::env;
use std::fs;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use word_tiles::engine::{levels, load_level, BoardAction, Session};
use word_tiles::types::{Level, WordDirection};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let level = match args.next() {
        Some(arg) => read_level(&arg)?,
        None => levels::by_index(0)?,
    };

    let mut session = Session::new(level)?;
    for arg in args {
        let action = BoardAction::parse(&arg)
            .with_context(|| format!("unrecognized action {:?}", arg))?;
        let changed = session
            .apply_action(action)
            .with_context(|| format!("failed to apply {:?}", arg))?;
        if !changed {
            println!("{}: no change", arg);
        }
    }

    print_session(&session)
}

fn read_level(arg: &str) -> Result<Level> {
    if let Ok(index) = arg.parse::<usize>() {
        return Ok(levels::by_index(index)?);
    }
    let json = fs::read_to_string(arg).with_context(|| format!("failed to read {}", arg))?;
    load_level(&json).with_context(|| format!("invalid level file {}", arg))
}

fn print_session(session: &Session) -> Result<()> {
    let board = session.board()?;
    println!("{}", session.level().theme);
    println!();
    println!("{}", board);
    println!();

    for word in session.words()? {
        let direction = match word.direction {
            WordDirection::Horizontal => "across",
            WordDirection::Vertical => "down",
        };
        let start = word.cells.first().copied().unwrap_or_default();
        println!("{:>10} {:<6} at ({}, {})", word.text, direction, start.x, start.y);
    }

    let targets: Vec<&str> = session.level().target_words().collect();
    println!();
    println!("targets: {}", targets.join(", "));
    println!("solved:  {}", session.is_solved()?);
    Ok(())
}
