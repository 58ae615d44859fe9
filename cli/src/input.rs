use sweeper_core::{Coord, Coord2};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  r <row> <col>   reveal a tile (also: reveal)
  f <row> <col>   toggle a flag (also: flag)
  h               show this help (also: help, ?)
  q               give up and quit (also: quit, exit)";

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type \"help\" for the list")]
    Unknown(String),
    #[error("{0} expects <row> <col>")]
    Arity(&'static str),
    #[error("Invalid coordinate {0:?}")]
    BadNumber(String),
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Err(ParseError::Empty);
    };

    match command.to_ascii_lowercase().as_str() {
        "r" | "reveal" => parse_coords("reveal", words).map(Command::Reveal),
        "f" | "flag" => parse_coords("flag", words).map(Command::Flag),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        _ => Err(ParseError::Unknown(command.to_owned())),
    }
}

fn parse_coords<'a>(
    command: &'static str,
    mut words: impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseError> {
    let (Some(row), Some(col), None) = (words.next(), words.next(), words.next()) else {
        return Err(ParseError::Arity(command));
    };
    Ok((parse_coord(row)?, parse_coord(col)?))
}

fn parse_coord(word: &str) -> Result<Coord, ParseError> {
    word.parse()
        .map_err(|_| ParseError::BadNumber(word.to_owned()))
}
