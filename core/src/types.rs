use ndarray::Array2;

use crate::{GameError, Result};

/// Single axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for bomb counts and total-cell counts, a full 255x255 grid still fits.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, both 0-indexed.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    a as CellCount * b as CellCount
}

/// Board size of a `(rows, cols)` array shape, fails when either side does not fit a [`Coord`].
pub fn grid_size<T>(array: &Array2<T>) -> Result<Coord2> {
    let (rows, cols) = array.dim();
    match (Coord::try_from(rows), Coord::try_from(cols)) {
        (Ok(height), Ok(width)) => Ok((height, width)),
        _ => Err(GameError::InvalidConfiguration {
            height: rows,
            width: cols,
            bombs: 0,
        }),
    }
}

/// Size of an array that already went through [`grid_size`].
pub(crate) fn dim_of<T>(array: &Array2<T>) -> Coord2 {
    let (rows, cols) = array.dim();
    debug_assert!(rows <= Coord::MAX as usize && cols <= Coord::MAX as usize);
    (rows as Coord, cols as Coord)
}

/// The up-to-8 cells around `center` that lie inside `bounds`, row by row.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (rows, cols) = bounds;

    // `saturating_add(2)` can only cap at 255, which is already the largest exclusive bound
    let row_span = row.saturating_sub(1)..rows.min(row.saturating_add(2));
    let col_span = col.saturating_sub(1)..cols.min(col.saturating_add(2));

    row_span
        .flat_map(move |r| col_span.clone().map(move |c| (r, c)))
        .filter(move |&pos| pos != center)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn around(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        neighbors(center, bounds).collect()
    }

    #[test]
    fn center_has_eight_neighbors() {
        let found = around((1, 1), (3, 3));
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn corner_is_clipped_to_three() {
        assert_eq!(around((0, 0), (3, 3)), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(around((2, 2), (3, 3)), vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn edge_is_clipped_to_five() {
        assert_eq!(around((0, 1), (3, 3)).len(), 5);
        assert_eq!(around((1, 2), (3, 3)).len(), 5);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert!(around((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn far_corner_of_largest_grid() {
        let max = Coord::MAX;
        assert_eq!(
            around((max - 1, max - 1), (max, max)),
            vec![(max - 2, max - 2), (max - 2, max - 1), (max - 1, max - 2)]
        );
    }

    #[test]
    fn largest_grid_area_fits() {
        assert_eq!(mult(3, 4), 12);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }

    #[test]
    fn grid_size_rejects_oversized_shapes() {
        assert_eq!(grid_size(&Array2::<bool>::default((255, 3))), Ok((255, 3)));
        assert_eq!(
            grid_size(&Array2::<bool>::default((300, 1))),
            Err(GameError::InvalidConfiguration {
                height: 300,
                width: 1,
                bombs: 0
            })
        );
        assert!(grid_size(&Array2::<bool>::default((1, 256))).is_err());
    }
}
