use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where the bombs are for one generation of a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMineLayout")]
pub struct MineLayout {
    bomb_mask: Array2<bool>,
    bomb_count: CellCount,
}

#[derive(Deserialize)]
struct RawMineLayout {
    bomb_mask: Array2<bool>,
    #[serde(default)]
    bomb_count: Option<CellCount>,
}

impl TryFrom<RawMineLayout> for MineLayout {
    type Error = GameError;

    fn try_from(raw: RawMineLayout) -> Result<Self> {
        let layout = Self::from_bomb_mask(raw.bomb_mask)?;
        match raw.bomb_count {
            Some(declared) if declared != layout.bomb_count => Err(GameError::BombCountMismatch {
                declared,
                actual: layout.bomb_count,
            }),
            _ => Ok(layout),
        }
    }
}

impl MineLayout {
    /// Fails when a side of the mask is longer than a [`Coord`] can address.
    pub fn from_bomb_mask(bomb_mask: Array2<bool>) -> Result<Self> {
        grid_size(&bomb_mask)?;
        // at most 255 * 255 cells once the size is checked
        let bomb_count = bomb_mask.iter().filter(|&&is_bomb| is_bomb).count() as CellCount;
        Ok(Self {
            bomb_mask,
            bomb_count,
        })
    }

    pub fn from_bomb_coords(size: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        let mut bomb_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in bomb_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            bomb_mask[coords.to_nd_index()] = true;
        }

        Self::from_bomb_mask(bomb_mask)
    }

    /// Configuration this layout satisfies, fails when the layout has no safe tile.
    pub fn board_config(&self) -> Result<BoardConfig> {
        let (height, width) = self.size();
        BoardConfig::new(height, width, self.bomb_count)
    }

    pub fn size(&self) -> Coord2 {
        dim_of(&self.bomb_mask)
    }

    pub fn total_cells(&self) -> CellCount {
        let (height, width) = self.size();
        mult(height, width)
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.bomb_count
    }

    pub fn contains_bomb(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_bomb_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors, always fits
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    /// Bomb count around every cell, bombs themselves get zero.
    pub fn neighbor_counts(&self) -> Array2<u8> {
        Array2::from_shape_fn(self.bomb_mask.dim(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if self[coords] {
                0
            } else {
                self.adjacent_bomb_count(coords)
            }
        })
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    pub fn iter_bombs(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.bomb_mask
            .indexed_iter()
            .filter(|&(_, &is_bomb)| is_bomb)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.bomb_mask[coords.to_nd_index()]
    }
}
