//! Core types shared across the workspace
//!
//! This crate defines the fundamental types used by the puzzle engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, UI rendering, headless drivers).

/// Grid side length of the reference instance (cells per row and per column)
pub const GRID_SIZE: u8 = 8;

/// Number of preview pieces offered by the tray in the reference instance
pub const TRAY_CAPACITY: usize = 3;

/// Largest supported grid side length
///
/// Keeps cleared-line reports and other per-line bookkeeping fixed-capacity.
pub const MAX_GRID_SIZE: usize = 16;

/// Upper bound on occupied cells per shape
///
/// The largest stock shape is the 3x3 block (9 cells); custom shapes built
/// from occupancy matrices get a little headroom.
pub const MAX_SHAPE_CELLS: usize = 16;

/// Color tag carried by a piece and stored in filled grid cells
///
/// The core only compares these for equality; rendering decides what each
/// tag looks like. The set matches the eight neon colors of the stock piece
/// factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Magenta,
    Cyan,
    Yellow,
    Red,
    Green,
    Blue,
    Orange,
    Purple,
}

impl ColorTag {
    /// All color tags, in factory pick order
    pub const ALL: [ColorTag; 8] = [
        ColorTag::Magenta,
        ColorTag::Cyan,
        ColorTag::Yellow,
        ColorTag::Red,
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Orange,
        ColorTag::Purple,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Magenta => "magenta",
            ColorTag::Cyan => "cyan",
            ColorTag::Yellow => "yellow",
            ColorTag::Red => "red",
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
            ColorTag::Orange => "orange",
            ColorTag::Purple => "purple",
        }
    }
}

/// Cell on the grid (None = empty, Some = filled with a color tag)
pub type Cell = Option<ColorTag>;

/// Shape variants offered by the stock piece factory
///
/// Each variant maps to one constant occupancy matrix (see the core crate's
/// shape catalog). Pre-rotated forms are separate variants; pieces never
/// rotate after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Single cell
    Dot,
    /// 2x2 block
    Square2,
    /// 3x3 block
    Square3,
    /// 2 rows x 3 columns block
    Rect2x3,
    /// 3 rows x 2 columns block
    Rect3x2,
    /// T with the stem pointing up
    TeeNorth,
    /// T with the stem pointing right
    TeeEast,
    /// T with the stem pointing down
    TeeSouth,
    /// T with the stem pointing left
    TeeWest,
    /// Small L (4 cells) and its rotations
    ElNorth,
    ElEast,
    ElSouth,
    ElWest,
    /// Large 3x3 corner (5 cells) and its rotations
    BigElNorth,
    BigElEast,
    BigElSouth,
    BigElWest,
    /// 2x2 corners (3 cells), named by the quadrant holding the right angle
    CornerNw,
    CornerNe,
    CornerSw,
    CornerSe,
    /// Z in horizontal and vertical form
    ZedNorth,
    ZedEast,
    /// S in horizontal and vertical form
    EssNorth,
    EssEast,
    /// Horizontal lines, 2..5 cells
    LineH2,
    LineH3,
    LineH4,
    LineH5,
    /// Vertical lines, 2..5 cells
    LineV2,
    LineV3,
    LineV4,
    LineV5,
}

impl ShapeKind {
    /// All shape variants, in factory pick order
    pub const ALL: [ShapeKind; 33] = [
        ShapeKind::Dot,
        ShapeKind::Square2,
        ShapeKind::Square3,
        ShapeKind::Rect2x3,
        ShapeKind::Rect3x2,
        ShapeKind::TeeNorth,
        ShapeKind::TeeEast,
        ShapeKind::TeeSouth,
        ShapeKind::TeeWest,
        ShapeKind::ElNorth,
        ShapeKind::ElEast,
        ShapeKind::ElSouth,
        ShapeKind::ElWest,
        ShapeKind::BigElNorth,
        ShapeKind::BigElEast,
        ShapeKind::BigElSouth,
        ShapeKind::BigElWest,
        ShapeKind::CornerNw,
        ShapeKind::CornerNe,
        ShapeKind::CornerSw,
        ShapeKind::CornerSe,
        ShapeKind::ZedNorth,
        ShapeKind::ZedEast,
        ShapeKind::EssNorth,
        ShapeKind::EssEast,
        ShapeKind::LineH2,
        ShapeKind::LineH3,
        ShapeKind::LineH4,
        ShapeKind::LineH5,
        ShapeKind::LineV2,
        ShapeKind::LineV3,
        ShapeKind::LineV4,
        ShapeKind::LineV5,
    ];
}

/// Errors returned by session mutations
///
/// Both are recoverable and leave the session untouched. Illegal placements
/// are not errors; they resolve to the `Returned` outcome instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Pick-up referenced a tray slot that does not exist
    InvalidIndex,
    /// The session is not accepting this input (game over, or a piece is
    /// already picked up)
    NotActive,
}

impl SessionError {
    pub fn message(self) -> &'static str {
        match self {
            SessionError::InvalidIndex => "tray slot does not exist",
            SessionError::NotActive => "session is not accepting input",
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shape_kinds_listed_once() {
        for (i, a) in ShapeKind::ALL.iter().enumerate() {
            for b in &ShapeKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_color_round_trip_names_unique() {
        for (i, a) in ColorTag::ALL.iter().enumerate() {
            for b in &ColorTag::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_session_error_messages() {
        assert!(!SessionError::InvalidIndex.message().is_empty());
        assert!(!SessionError::NotActive.message().is_empty());
    }
}
