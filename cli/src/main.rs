use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use sweeper_core::*;

use input::{Command, HELP, ParseError, parse_command};
use render::Grid;

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Clear the grid without revealing a bomb", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset (beginner, intermediate, expert) or <height>x<width>:<bombs>
    #[arg(short, long, conflicts_with_all = ["height", "width", "bombs"])]
    preset: Option<BoardConfig>,

    /// Number of rows
    #[arg(long)]
    height: Option<Coord>,

    /// Number of columns
    #[arg(long)]
    width: Option<Coord>,

    /// Number of bombs, must leave at least one safe tile
    #[arg(long)]
    bombs: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the final board as JSON once the game is over
    #[arg(long)]
    json: bool,
}

impl Args {
    fn board_config(&self) -> Result<BoardConfig> {
        if let Some(preset) = self.preset {
            return Ok(preset);
        }
        let default = BoardConfig::default();
        let config = BoardConfig::new(
            self.height.unwrap_or(default.height()),
            self.width.unwrap_or(default.width()),
            self.bombs.unwrap_or(default.bombs()),
        )?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.board_config()?;
    let generator = match args.seed {
        Some(seed) => RandomMineGenerator::new(seed),
        None => RandomMineGenerator::from_entropy(),
    };
    let mut board = Board::with_generator(config, generator)?;
    log::info!("Playing {} with seed {}", config, board.generator().seed());

    let mut stdout = io::stdout().lock();
    play(&mut board, io::stdin().lock(), &mut stdout)?;

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &board.export_view(true))
            .context("Could not write board as JSON")?;
        writeln!(stdout)?;
    }
    Ok(())
}

/// Drives `board` from `input` until the game ends, the player quits, or the input runs out.
fn play<G: MineGenerator>(
    board: &mut Board<G>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<BoardState> {
    let mut lines = input.lines();
    print_board(board, out)?;

    while board.is_active() {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("Could not read input")?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        let (rejection, redraw) = match command {
            Command::Reveal(coords) => {
                let outcome = board.reveal(coords)?;
                // a finished game is drawn uncovered below
                (outcome.rejection(), outcome.has_update() && !outcome.is_terminal())
            }
            Command::Flag(coords) => {
                let outcome = board.flag(coords);
                (outcome.rejection(), outcome.has_update())
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        };
        if let Some(rejection) = rejection {
            writeln!(out, "{rejection}")?;
        }
        if redraw {
            print_board(board, out)?;
        }
    }

    writeln!(out, "{}", Grid(&board.export_view(true)))?;
    match board.state() {
        BoardState::Won => writeln!(out, "You won!")?,
        BoardState::Lost => {
            let (row, col) = board.triggered_bomb().unwrap_or_default();
            writeln!(out, "Boom! Bomb at {row} {col}, you lost.")?;
        }
        BoardState::Active => writeln!(out, "Game abandoned.")?,
    }
    Ok(board.state())
}

fn print_board<G: MineGenerator>(board: &Board<G>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", Grid(&board.export_view(false)))?;
    writeln!(out, "Bombs left: {}", board.bombs_left())?;
    Ok(())
}
