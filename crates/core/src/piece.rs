//! Piece module - an immutable shape template stamped with a color

use gridfill_types::ColorTag;

use crate::shapes::Shape;

/// A puzzle piece.
///
/// Pieces are created by a factory, sit in the tray until picked up, and
/// are consumed the moment they are committed to the grid. `placed` flips
/// exactly once, at commit time, together with the frozen anchor position;
/// drag-time pixel coordinates are UI state and never enter the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    color: ColorTag,
    placed: bool,
    anchor: Option<(i8, i8)>,
}

impl Piece {
    pub fn new(shape: Shape, color: ColorTag) -> Self {
        Self {
            shape,
            color,
            placed: false,
            anchor: None,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }

    /// True once the piece has been committed to a grid
    pub fn placed(&self) -> bool {
        self.placed
    }

    /// Grid anchor the piece was committed at, if it has been placed
    pub fn anchor(&self) -> Option<(i8, i8)> {
        self.anchor
    }

    pub(crate) fn mark_placed(&mut self, anchor_row: i8, anchor_col: i8) {
        debug_assert!(!self.placed, "piece committed twice");
        self.placed = true;
        self.anchor = Some((anchor_row, anchor_col));
    }
}
