mod input;
mod texts;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use twenty48_core::engine::{self, Move};

use crate::input::parse_move;
use crate::texts::GameTexts;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Cli {
    /// JSON table of user-facing strings
    #[arg(long, value_name = "FILE", default_value = "game_texts.json")]
    texts: PathBuf,

    /// Grid height (at least 1)
    #[arg(long, value_name = "N", default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,

    /// Grid width (at least 1)
    #[arg(long, value_name = "N", default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    cols: u16,

    /// Log filter, e.g. "info", "debug"
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log.as_str())).init();

    let texts = GameTexts::from_json(&cli.texts)?;
    let mut rng = rand::thread_rng();
    let mut grid = engine::new_game(usize::from(cli.rows), usize::from(cli.cols), &mut rng);
    info!("starting a {}x{} game", cli.rows, cli.cols);

    let stdin = io::stdin();
    let mut lines = stdin.lines();
    while grid.can_play() {
        println!("{grid}");
        let direction = match read_move(&mut lines, &texts)? {
            Some(direction) => direction,
            None => {
                info!("input closed, exiting");
                return Ok(());
            }
        };
        let moved = grid.shift(direction);
        if moved != grid {
            grid = moved.with_random_tile(&mut rng);
            debug!("{direction:?} applied, {} cells free", grid.count_empty());
        } else {
            debug!("{direction:?} changed nothing, asking again");
            grid = moved;
        }
    }

    println!("{grid}");
    println!("{}", texts.game_over);
    Ok(())
}

/// Prompt until the player enters a valid move; invalid tokens only get the
/// localized rejection line and a fresh prompt. Returns `None` at EOF.
fn read_move(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    texts: &GameTexts,
) -> Result<Option<Move>> {
    println!("{}", texts.controls);
    prompt(&texts.ask_move)?;
    for line in lines {
        let line = line.context("failed to read from stdin")?;
        if let Some(direction) = parse_move(&line) {
            return Ok(Some(direction));
        }
        println!("{}", texts.not_valid_move);
        prompt(&texts.ask_move)?;
    }
    Ok(None)
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush().context("failed to flush prompt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_rejects_zero_grid_dimensions() {
        assert!(Cli::try_parse_from(["twenty48", "--rows", "0"]).is_err());
        assert!(Cli::try_parse_from(["twenty48", "--cols", "0"]).is_err());
    }

    #[test]
    fn it_defaults_to_a_4x4_grid() {
        let cli = Cli::try_parse_from(["twenty48"]).unwrap();
        assert_eq!((cli.rows, cli.cols), (4, 4));
    }
}

