use serde::{Deserialize, Serialize};

use crate::Coord2;

/// One cell of the grid, only the owning board changes it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    position: Coord2,
    is_bomb: bool,
    neighbor_bombs: u8,
    revealed: bool,
    flagged: bool,
}

impl Tile {
    pub(crate) const fn new(position: Coord2, is_bomb: bool, neighbor_bombs: u8) -> Self {
        Self {
            position,
            is_bomb,
            neighbor_bombs: if is_bomb { 0 } else { neighbor_bombs },
            revealed: false,
            flagged: false,
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub const fn is_bomb(&self) -> bool {
        self.is_bomb
    }

    /// Bombs among the adjacent tiles, always zero on a bomb.
    pub const fn neighbor_bombs(&self) -> u8 {
        self.neighbor_bombs
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Neither revealed nor flagged.
    pub const fn is_hidden(&self) -> bool {
        !self.revealed && !self.flagged
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
        self.flagged = false;
    }

    pub(crate) fn toggle_flag(&mut self) -> bool {
        self.flagged = !self.flagged;
        self.flagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bomb_tiles_have_no_count() {
        let tile = Tile::new((1, 2), true, 5);
        assert_eq!(tile.neighbor_bombs(), 0);
        assert_eq!(tile.position(), (1, 2));
    }

    #[test]
    fn reveal_clears_flag() {
        let mut tile = Tile::new((0, 0), false, 1);
        assert!(tile.toggle_flag());
        tile.reveal();
        assert!(tile.is_revealed());
        assert!(!tile.is_flagged());
        assert!(!tile.is_hidden());
    }
}
