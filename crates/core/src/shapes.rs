//! Shape catalog - constant occupancy matrices for every piece variant
//!
//! Each [`ShapeKind`] maps to one row-major boolean matrix describing which
//! cells of the piece's bounding box are part of the piece. Pre-rotated
//! forms are separate variants; a piece never rotates after creation.

use arrayvec::ArrayVec;
use gridfill_types::{ShapeKind, MAX_SHAPE_CELLS};

/// Offset of an occupied cell relative to the shape's top-left corner
pub type CellOffset = (i8, i8);

/// Row-major occupancy matrix
pub type ShapeRows = &'static [&'static [bool]];

// Matrix shorthand: X = occupied, O = empty.
const X: bool = true;
const O: bool = false;

/// Get the occupancy matrix for a shape variant
pub fn shape_rows(kind: ShapeKind) -> ShapeRows {
    match kind {
        ShapeKind::Dot => &[&[X]],
        ShapeKind::Square2 => &[&[X, X], &[X, X]],
        ShapeKind::Square3 => &[&[X, X, X], &[X, X, X], &[X, X, X]],
        ShapeKind::Rect2x3 => &[&[X, X, X], &[X, X, X]],
        ShapeKind::Rect3x2 => &[&[X, X], &[X, X], &[X, X]],

        ShapeKind::TeeNorth => &[&[O, X, O], &[X, X, X]],
        ShapeKind::TeeEast => &[&[X, O], &[X, X], &[X, O]],
        ShapeKind::TeeSouth => &[&[X, X, X], &[O, X, O]],
        ShapeKind::TeeWest => &[&[O, X], &[X, X], &[O, X]],

        ShapeKind::ElNorth => &[&[X, O], &[X, O], &[X, X]],
        ShapeKind::ElEast => &[&[X, X, X], &[X, O, O]],
        ShapeKind::ElSouth => &[&[X, X], &[O, X], &[O, X]],
        ShapeKind::ElWest => &[&[X, X], &[X, O], &[X, O]],

        ShapeKind::BigElNorth => &[&[X, X, X], &[X, O, O], &[X, O, O]],
        ShapeKind::BigElEast => &[&[X, X, X], &[O, O, X], &[O, O, X]],
        ShapeKind::BigElSouth => &[&[O, O, X], &[O, O, X], &[X, X, X]],
        ShapeKind::BigElWest => &[&[X, O, O], &[X, O, O], &[X, X, X]],

        ShapeKind::CornerNw => &[&[X, X], &[X, O]],
        ShapeKind::CornerNe => &[&[X, X], &[O, X]],
        ShapeKind::CornerSw => &[&[X, O], &[X, X]],
        ShapeKind::CornerSe => &[&[O, X], &[X, X]],

        ShapeKind::ZedNorth => &[&[X, X, O], &[O, X, X]],
        ShapeKind::ZedEast => &[&[O, X], &[X, X], &[X, O]],
        ShapeKind::EssNorth => &[&[O, X, X], &[X, X, O]],
        ShapeKind::EssEast => &[&[X, O], &[X, X], &[O, X]],

        ShapeKind::LineH2 => &[&[X, X]],
        ShapeKind::LineH3 => &[&[X, X, X]],
        ShapeKind::LineH4 => &[&[X, X, X, X]],
        ShapeKind::LineH5 => &[&[X, X, X, X, X]],
        ShapeKind::LineV2 => &[&[X], &[X]],
        ShapeKind::LineV3 => &[&[X], &[X], &[X]],
        ShapeKind::LineV4 => &[&[X], &[X], &[X], &[X]],
        ShapeKind::LineV5 => &[&[X], &[X], &[X], &[X], &[X]],
    }
}

/// A shape: bounding-box size plus the list of occupied cell offsets
///
/// Normalized from an occupancy matrix at construction time so that fit
/// checks and commits iterate occupied cells only. Always holds at least
/// one occupied cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: ArrayVec<CellOffset, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from a row-major occupancy matrix.
    ///
    /// Panics if the matrix is empty, ragged, all-empty, or has more than
    /// `MAX_SHAPE_CELLS` occupied cells. These are constructor misuse, not
    /// runtime conditions.
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        assert!(!rows.is_empty(), "shape matrix has no rows");
        let cols = rows[0].len();
        assert!(cols > 0, "shape matrix has no columns");

        let mut cells: ArrayVec<CellOffset, MAX_SHAPE_CELLS> = ArrayVec::new();
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "shape matrix is ragged");
            for (c, &occupied) in row.iter().enumerate() {
                if occupied {
                    assert!(
                        cells.len() < MAX_SHAPE_CELLS,
                        "shape has more than {} occupied cells",
                        MAX_SHAPE_CELLS
                    );
                    cells.push((r as i8, c as i8));
                }
            }
        }
        assert!(!cells.is_empty(), "shape has no occupied cell");

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Build a shape from a catalog variant
    pub fn from_kind(kind: ShapeKind) -> Self {
        Self::from_rows(shape_rows(kind))
    }

    /// Bounding-box height in cells
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Bounding-box width in cells
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Occupied cell offsets, row-major order
    pub fn cells(&self) -> &[CellOffset] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_is_single_cell() {
        let shape = Shape::from_kind(ShapeKind::Dot);
        assert_eq!(shape.cells(), &[(0, 0)]);
        assert_eq!((shape.rows(), shape.cols()), (1, 1));
    }

    #[test]
    fn test_tee_north_offsets() {
        let shape = Shape::from_kind(ShapeKind::TeeNorth);
        assert_eq!(shape.cells(), &[(0, 1), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_from_rows_skips_empty_cells() {
        let shape = Shape::from_rows(&[&[true, false], &[true, true]]);
        assert_eq!(shape.cells(), &[(0, 0), (1, 0), (1, 1)]);
        assert_eq!(shape.cell_count(), 3);
    }

    #[test]
    #[should_panic(expected = "no occupied cell")]
    fn test_from_rows_rejects_all_empty() {
        Shape::from_rows(&[&[false, false]]);
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn test_from_rows_rejects_ragged_matrix() {
        Shape::from_rows(&[&[true, true], &[true]]);
    }

    #[test]
    fn test_catalog_bounding_boxes_are_tight() {
        for &kind in &ShapeKind::ALL {
            let shape = Shape::from_kind(kind);
            let max_row = shape.cells().iter().map(|&(r, _)| r).max().unwrap();
            let max_col = shape.cells().iter().map(|&(_, c)| c).max().unwrap();
            // Every matrix row and column must contribute at least one cell.
            assert_eq!(max_row + 1, shape.rows() as i8, "{:?}", kind);
            assert_eq!(max_col + 1, shape.cols() as i8, "{:?}", kind);
        }
    }
}
