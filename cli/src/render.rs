use std::fmt;
use sweeper_core::{BoardView, Coord, TileView};

/// Bordered text grid of a board view, with row and column numbers.
///
/// ```text
///     0 1 2
///   +-------+
/// 0 | . . 1 |
/// 1 | F B . |
///   +-------+
/// ```
pub struct Grid<'a>(pub &'a BoardView);

pub fn render(view: &BoardView) -> String {
    Grid(view).to_string()
}

fn symbol(tile: TileView) -> char {
    match tile {
        TileView::Bomb => 'B',
        TileView::Flagged => 'F',
        TileView::Hidden => '.',
        // counts never exceed 8
        TileView::Count(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

fn digits(max: Coord) -> usize {
    max.checked_ilog10().map_or(1, |log| log as usize + 1)
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (height, width) = self.0.size();
        let label_width = digits(height.saturating_sub(1));
        let cell_width = digits(width.saturating_sub(1));
        let inner_width = usize::from(width) * (cell_width + 1) - 1;

        write!(f, "{:label_width$}  ", "")?;
        for col in 0..width {
            write!(f, " {col:>cell_width$}")?;
        }
        writeln!(f)?;

        let border = format!("{:label_width$} +{}+", "", "-".repeat(inner_width + 2));
        writeln!(f, "{border}")?;

        for (row, tiles) in self.0.rows().enumerate() {
            write!(f, "{row:>label_width$} |")?;
            for &tile in tiles.iter() {
                write!(f, " {:>cell_width$}", symbol(tile))?;
            }
            writeln!(f, " |")?;
        }

        write!(f, "{border}")
    }
}
