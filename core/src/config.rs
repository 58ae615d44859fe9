use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

/// Dimensions and bomb count of a board, always valid once constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    height: Coord,
    width: Coord,
    bombs: CellCount,
}

impl BoardConfig {
    pub fn new(height: Coord, width: Coord, bombs: CellCount) -> Result<Self> {
        if height == 0 || width == 0 || bombs >= mult(height, width) {
            return Err(GameError::InvalidConfiguration {
                height: height.into(),
                width: width.into(),
                bombs: bombs.into(),
            });
        }
        Ok(Self::new_unchecked(height, width, bombs))
    }

    pub(crate) const fn new_unchecked(height: Coord, width: Coord, bombs: CellCount) -> Self {
        Self {
            height,
            width,
            bombs,
        }
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn bombs(&self) -> CellCount {
        self.bombs
    }

    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.bombs
    }

    pub const fn contains(&self, (row, col): Coord2) -> bool {
        row < self.height && col < self.width
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(4, 10, 10)
    }
}

impl fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}:{}", self.height, self.width, self.bombs)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseConfigError {
    #[error("Expected a preset name or <height>x<width>:<bombs>, got {0:?}")]
    Malformed(String),
    #[error(transparent)]
    Invalid(#[from] GameError),
}

/// Accepts a preset name (`beginner`, `intermediate`, `expert`) or `<height>x<width>:<bombs>`.
impl FromStr for BoardConfig {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "beginner" => return Ok(Self::beginner()),
            "intermediate" => return Ok(Self::intermediate()),
            "expert" => return Ok(Self::expert()),
            _ => {}
        }

        let malformed = || ParseConfigError::Malformed(s.to_owned());
        let (size, bombs) = trimmed.split_once(':').ok_or_else(malformed)?;
        let (height, width) = size.split_once(['x', 'X']).ok_or_else(malformed)?;

        let height = height.trim().parse().map_err(|_| malformed())?;
        let width = width.trim().parse().map_err(|_| malformed())?;
        let bombs = bombs.trim().parse().map_err(|_| malformed())?;

        Ok(Self::new(height, width, bombs)?)
    }
}
