//! Geometry primitives: [`Point`] and [`Dims`].
//!
//! Coordinates are `(row, col)`, zero-based, with rows growing downward.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid coordinate. Two points are the same cell position iff their
/// `(row, col)` pairs are equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in search order: up, down, left, right.
    #[inline]
    pub const fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        manhattan(self, other) == 1
    }
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// The `rows × cols` extent of a grid, anchored at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the extent has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Whether `p` is on the outermost ring of the grid.
    #[inline]
    pub fn is_border(self, p: Point) -> bool {
        self.contains(p)
            && (p.row == 0 || p.col == 0 || p.row == self.rows - 1 || p.col == self.cols - 1)
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if out of range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let cols = self.cols.max(1) as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every point.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            cur: Point::ZERO,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Point;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the points of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    cur: Point,
}

impl Iterator for DimsIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.dims.is_empty() || self.cur.row >= self.dims.rows {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.dims.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let done = match self.dims.index(self.cur) {
            Some(i) => i,
            None => self.dims.len(),
        };
        let remaining = self.dims.len() - done;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DimsIter {}
