use thiserror::Error;

use crate::geom::Point;

/// Errors raised while building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Carving advances two cells at a time, so both sides must be odd and
    /// large enough to hold at least a 2×2 lattice.
    #[error("invalid grid dimensions {rows}x{cols}: both must be odd and at least 5")]
    InvalidDimensions { rows: i32, cols: i32 },
    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),
    /// The outermost ring must stay wall.
    #[error("border cell {0} cannot be opened")]
    OpenBorder(Point),
    #[error("layout row {row} is {found} cells wide, expected {expected}")]
    RaggedRow { row: i32, expected: i32, found: i32 },
    #[error("layout contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Point },
    #[error("layout has a second start at {0}")]
    DuplicateStart(Point),
    #[error("layout has a second end at {0}")]
    DuplicateEnd(Point),
}
