//! The atomic grid unit.

use std::hash::{Hash, Hasher};

use crate::geom::Point;
use crate::terrain::Terrain;

/// One grid position with its structural attributes.
///
/// Identity is the position alone: equality and hashing ignore terrain and
/// flags, so two handles to the same coordinate always compare equal.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) pos: Point,
    pub(crate) terrain: Terrain,
    pub(crate) wall: bool,
    pub(crate) start: bool,
    pub(crate) end: bool,
}

impl Cell {
    /// A fresh open cell with empty terrain and no flags.
    pub const fn new(row: i32, col: i32) -> Self {
        Self {
            pos: Point::new(row, col),
            terrain: Terrain::Empty,
            wall: false,
            start: false,
            end: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Cost of entering this cell. Meaningless for walls.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.terrain.cost()
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.wall
    }

    #[inline]
    pub fn is_passable(&self) -> bool {
        !self.wall
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.end
    }

    /// Character for ASCII layouts.
    pub fn glyph(&self) -> char {
        if self.start {
            'S'
        } else if self.end {
            'E'
        } else if self.wall {
            '#'
        } else {
            self.terrain.glyph()
        }
    }

    /// Back to a wall with default attributes.
    pub(crate) fn reset_to_wall(&mut self) {
        self.terrain = Terrain::Empty;
        self.wall = true;
        self.start = false;
        self.end = false;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}
