//! Shape catalog tests - occupancy matrices and the Shape constructor

use gridfill::core::{shape_rows, Shape};
use gridfill::types::{ShapeKind, MAX_SHAPE_CELLS};

#[test]
fn test_square_shapes() {
    let square2 = Shape::from_kind(ShapeKind::Square2);
    assert_eq!((square2.rows(), square2.cols()), (2, 2));
    assert_eq!(square2.cell_count(), 4);

    let square3 = Shape::from_kind(ShapeKind::Square3);
    assert_eq!((square3.rows(), square3.cols()), (3, 3));
    assert_eq!(square3.cell_count(), 9);
}

#[test]
fn test_rect_shapes() {
    let wide = Shape::from_kind(ShapeKind::Rect2x3);
    assert_eq!((wide.rows(), wide.cols()), (2, 3));
    assert_eq!(wide.cell_count(), 6);

    let tall = Shape::from_kind(ShapeKind::Rect3x2);
    assert_eq!((tall.rows(), tall.cols()), (3, 2));
    assert_eq!(tall.cell_count(), 6);
}

#[test]
fn test_tee_orientations() {
    let north = Shape::from_kind(ShapeKind::TeeNorth);
    assert_eq!(north.cells(), &[(0, 1), (1, 0), (1, 1), (1, 2)]);

    let south = Shape::from_kind(ShapeKind::TeeSouth);
    assert_eq!(south.cells(), &[(0, 0), (0, 1), (0, 2), (1, 1)]);

    let east = Shape::from_kind(ShapeKind::TeeEast);
    assert_eq!(east.cells(), &[(0, 0), (1, 0), (1, 1), (2, 0)]);

    let west = Shape::from_kind(ShapeKind::TeeWest);
    assert_eq!(west.cells(), &[(0, 1), (1, 0), (1, 1), (2, 1)]);
}

#[test]
fn test_corner_shapes_have_three_cells() {
    for kind in [
        ShapeKind::CornerNw,
        ShapeKind::CornerNe,
        ShapeKind::CornerSw,
        ShapeKind::CornerSe,
    ] {
        let shape = Shape::from_kind(kind);
        assert_eq!((shape.rows(), shape.cols()), (2, 2), "{:?}", kind);
        assert_eq!(shape.cell_count(), 3, "{:?}", kind);
    }
}

#[test]
fn test_big_el_shapes_have_five_cells() {
    for kind in [
        ShapeKind::BigElNorth,
        ShapeKind::BigElEast,
        ShapeKind::BigElSouth,
        ShapeKind::BigElWest,
    ] {
        let shape = Shape::from_kind(kind);
        assert_eq!((shape.rows(), shape.cols()), (3, 3), "{:?}", kind);
        assert_eq!(shape.cell_count(), 5, "{:?}", kind);
    }
}

#[test]
fn test_line_shapes() {
    assert_eq!(Shape::from_kind(ShapeKind::LineH5).cols(), 5);
    assert_eq!(Shape::from_kind(ShapeKind::LineH5).rows(), 1);
    assert_eq!(Shape::from_kind(ShapeKind::LineV4).rows(), 4);
    assert_eq!(Shape::from_kind(ShapeKind::LineV4).cols(), 1);
    assert_eq!(Shape::from_kind(ShapeKind::LineH2).cell_count(), 2);
}

#[test]
fn test_catalog_matrices_are_distinct() {
    let shapes: Vec<Shape> = ShapeKind::ALL.iter().map(|&k| Shape::from_kind(k)).collect();
    for (i, a) in shapes.iter().enumerate() {
        for (j, b) in shapes.iter().enumerate().skip(i + 1) {
            assert_ne!(
                a, b,
                "{:?} and {:?} share a matrix",
                ShapeKind::ALL[i], ShapeKind::ALL[j]
            );
        }
    }
}

#[test]
fn test_catalog_fits_cell_cap() {
    for &kind in &ShapeKind::ALL {
        let rows = shape_rows(kind);
        let occupied: usize = rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum();
        assert!(occupied >= 1, "{:?}", kind);
        assert!(occupied <= MAX_SHAPE_CELLS, "{:?}", kind);
        assert_eq!(occupied, Shape::from_kind(kind).cell_count(), "{:?}", kind);
    }
}

#[test]
fn test_custom_shape_from_rows() {
    // Full-width bar for an 8-wide grid; not a catalog shape.
    let bar = Shape::from_rows(&[&[true; 8]]);
    assert_eq!((bar.rows(), bar.cols()), (1, 8));
    assert_eq!(bar.cell_count(), 8);
    assert_eq!(bar.cells()[7], (0, 7));
}
