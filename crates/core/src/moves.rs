//! Move availability - decides whether any legal placement remains
//!
//! The exhaustive scan is `O(pieces x N^2 x shape cells)`; grids and trays
//! are small by design, so no pruning is needed.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::shapes::Shape;

/// First anchor where the shape fits, scanning row-major from (0, 0)
pub fn first_fit(grid: &Grid, shape: &Shape) -> Option<(i8, i8)> {
    let n = grid.size() as i8;
    for row in 0..n {
        for col in 0..n {
            if grid.can_place(shape, row, col) {
                return Some((row, col));
            }
        }
    }
    None
}

/// True if at least one (piece, anchor) combination fits on the grid.
///
/// Returns on the first success found; order of pieces is irrelevant. An
/// empty piece set yields `false` - callers that treat an empty tray as
/// "refill pending" must short-circuit before asking.
pub fn has_any_legal_move<'a, I>(grid: &Grid, pieces: I) -> bool
where
    I: IntoIterator<Item = &'a Piece>,
{
    pieces
        .into_iter()
        .any(|piece| first_fit(grid, piece.shape()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfill_types::{ColorTag, ShapeKind, GRID_SIZE};

    #[test]
    fn test_first_fit_scans_row_major() {
        let mut grid = Grid::new(GRID_SIZE);
        grid.set(0, 0, Some(ColorTag::Red));

        let dot = Shape::from_kind(ShapeKind::Dot);
        assert_eq!(first_fit(&grid, &dot), Some((0, 1)));
    }

    #[test]
    fn test_no_fit_on_full_grid() {
        let mut grid = Grid::new(2);
        for row in 0..2 {
            for col in 0..2 {
                grid.set(row, col, Some(ColorTag::Blue));
            }
        }

        let dot = Shape::from_kind(ShapeKind::Dot);
        assert_eq!(first_fit(&grid, &dot), None);
    }

    #[test]
    fn test_empty_piece_set_has_no_move() {
        let grid = Grid::new(GRID_SIZE);
        assert!(!has_any_legal_move(&grid, &[]));
    }
}
