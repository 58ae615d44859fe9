use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw for one tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Bomb,
    Count(u8),
    #[default]
    Hidden,
    Flagged,
}

impl TileView {
    fn of(tile: &Tile, reveal_all: bool) -> Self {
        use TileView::*;
        match (tile.is_bomb(), tile.is_revealed() || reveal_all) {
            (true, true) => Bomb,
            (false, true) => Count(tile.neighbor_bombs()),
            (_, false) if tile.is_flagged() => Flagged,
            (_, false) => Hidden,
        }
    }
}

/// Read-only snapshot of a board for renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardView")]
pub struct BoardView {
    tiles: Array2<TileView>,
}

#[derive(Deserialize)]
struct RawBoardView {
    tiles: Array2<TileView>,
}

impl TryFrom<RawBoardView> for BoardView {
    type Error = GameError;

    fn try_from(raw: RawBoardView) -> Result<Self> {
        grid_size(&raw.tiles)?;
        Ok(Self { tiles: raw.tiles })
    }
}

impl BoardView {
    pub fn size(&self) -> Coord2 {
        dim_of(&self.tiles)
    }

    pub fn get(&self, coords: Coord2) -> Option<TileView> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    /// Tiles with their positions, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, TileView)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((row, col), &tile)| ((row as Coord, col as Coord), tile))
    }

    /// One slice per row, left to right.
    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, TileView>> + '_ {
        self.tiles.rows().into_iter()
    }
}

impl<G: MineGenerator> Board<G> {
    /// Snapshot for a renderer, `reveal_all` uncovers every tile as at the end of a game.
    pub fn export_view(&self, reveal_all: bool) -> BoardView {
        BoardView {
            tiles: self.tile_grid().map(|tile| TileView::of(tile, reveal_all)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TileView::*;

    fn board(size: Coord2, bombs: &[Coord2]) -> Board {
        Board::from_layout(MineLayout::from_bomb_coords(size, bombs).unwrap()).unwrap()
    }

    #[test]
    fn default_tile_is_hidden() {
        assert_eq!(TileView::default(), Hidden);
    }

    #[test]
    fn fresh_board_is_all_hidden() {
        let view = board((2, 3), &[(0, 0)]).export_view(false);

        assert_eq!(view.size(), (2, 3));
        assert!(view.iter().all(|(_, tile)| tile == Hidden));
    }

    #[test]
    fn fog_shows_revealed_and_flagged_only() {
        let mut board = board((3, 3), &[(0, 0)]);
        assert_eq!(board.reveal((1, 1)).unwrap(), RevealOutcome::Continued);
        assert_eq!(board.flag((0, 0)), FlagOutcome::Flagged);

        let view = board.export_view(false);
        assert_eq!(view.get((1, 1)), Some(Count(1)));
        assert_eq!(view.get((0, 0)), Some(Flagged));
        assert_eq!(view.get((2, 2)), Some(Hidden));
        assert_eq!(view.get((3, 3)), None);
    }

    #[test]
    fn reveal_all_uncovers_everything() {
        let mut board = board((2, 2), &[(0, 1)]);
        assert_eq!(board.flag((1, 1)), FlagOutcome::Flagged);

        let view = board.export_view(true);
        let tiles: Vec<_> = view.iter().collect();
        assert_eq!(
            tiles,
            vec![
                ((0, 0), Count(1)),
                ((0, 1), Bomb),
                ((1, 0), Count(1)),
                ((1, 1), Count(1)),
            ]
        );
    }

    #[test]
    fn lost_board_shows_triggered_bomb() {
        let mut board = board((1, 4), &[(0, 0)]);
        assert_eq!(board.reveal((0, 1)).unwrap(), RevealOutcome::Continued);
        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::Lost);

        let view = board.export_view(false);
        assert_eq!(view.get((0, 0)), Some(Bomb));
        assert_eq!(view.get((0, 1)), Some(Count(1)));
        assert_eq!(view.get((0, 2)), Some(Hidden));
    }

    #[test]
    fn export_has_no_side_effects() {
        let board = board((3, 3), &[(2, 2)]);
        let _ = board.export_view(true);
        assert_eq!(board.export_view(false), board.export_view(false));
        assert!(board.tiles().all(|tile| tile.is_hidden()));
    }

    #[test]
    fn rows_follow_grid_order() {
        let view = board((2, 2), &[(1, 0)]).export_view(true);
        let rows: Vec<Vec<TileView>> = view.rows().map(|row| row.to_vec()).collect();
        assert_eq!(rows, vec![vec![Count(1), Count(1)], vec![Bomb, Count(1)]]);
    }

    #[test]
    fn serializes_to_json() {
        let view = board((1, 2), &[(0, 0)]).export_view(true);
        let json = serde_json::to_value(view.get((0, 1))).unwrap();
        assert_eq!(json, serde_json::json!({ "Count": 1 }));

        let round_trip: BoardView =
            serde_json::from_str(&serde_json::to_string(&view).unwrap()).unwrap();
        assert_eq!(round_trip, view);
    }

    #[test]
    fn deserialize_rejects_oversized_grid() {
        let json = serde_json::json!({
            "tiles": {"v": 1, "dim": [1, 256], "data": vec!["Hidden"; 256]},
        });
        assert!(serde_json::from_value::<BoardView>(json).is_err());
    }
}
