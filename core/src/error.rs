use thiserror::Error;

use crate::{BoardConfig, CellCount};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {height}x{width} with {bombs} bombs")]
    InvalidConfiguration {
        height: usize,
        width: usize,
        bombs: usize,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Layout declares {declared} bombs but its mask holds {actual}")]
    BombCountMismatch { declared: CellCount, actual: CellCount },
    #[error("Generated layout does not match board {expected}")]
    LayoutMismatch { expected: BoardConfig },
    #[error("Could not find a safe first move after {attempts} regenerations")]
    RegenerationLimit { attempts: u32 },
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Why a move was refused, the board is left untouched whenever one is reported.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Tile is already revealed")]
    AlreadyRevealed,
    #[error("Tile is flagged, unflag it first")]
    Flagged,
    #[error("Game already ended, no new moves are accepted")]
    GameNotActive,
}
