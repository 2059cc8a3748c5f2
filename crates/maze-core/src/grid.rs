//! The maze grid: a fixed-shape, row-major array of [`Cell`]s plus the
//! designated start and end.
//!
//! The shape never changes after construction; contents change only through
//! generation or the layout-editing methods. The outer border is always wall.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Dims, Point};
use crate::mapgen::{Endpoints, MazeGen};
use crate::terrain::Terrain;

/// Smallest legal side length.
pub const MIN_SIDE: i32 = 5;

/// A rectangular maze of [`Cell`]s.
#[derive(Debug, Clone)]
pub struct Grid {
    dims: Dims,
    cells: Vec<Cell>,
    start: Option<Point>,
    end: Option<Point>,
    endpoints: Endpoints,
}

impl Grid {
    /// Create a solid-wall grid with no endpoints.
    ///
    /// Both dimensions must be odd and at least [`MIN_SIDE`].
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows < MIN_SIDE || cols < MIN_SIDE || rows % 2 == 0 || cols % 2 == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let dims = Dims::new(rows, cols);
        let cells = dims
            .iter()
            .map(|p| {
                let mut c = Cell::new(p.row, p.col);
                c.reset_to_wall();
                c
            })
            .collect();
        Ok(Self {
            dims,
            cells,
            start: None,
            end: None,
            endpoints: Endpoints::Corners,
        })
    }

    /// Select how [`generate`](Self::generate) places start and end.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// The endpoint policy used by generation.
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    // -----------------------------------------------------------------------
    // Generation
    // -----------------------------------------------------------------------

    /// Recarve the whole grid using the thread-local RNG.
    pub fn generate(&mut self) {
        self.generate_with(&mut rand::rng());
    }

    /// Recarve the whole grid deterministically from `seed`.
    pub fn generate_seeded(&mut self, seed: u64) {
        self.generate_with(&mut StdRng::seed_from_u64(seed));
    }

    /// Recarve the whole grid using `rng`.
    pub fn generate_with<R: Rng>(&mut self, rng: &mut R) {
        MazeGen::new(rng)
            .with_endpoints(self.endpoints)
            .generate(self);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn dimensions(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// The cell at `(row, col)`, or `None` if out of bounds.
    pub fn cell_at(&self, row: i32, col: i32) -> Option<&Cell> {
        self.cell(Point::new(row, col))
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.dims.index(p).map(|i| &self.cells[i])
    }

    pub fn start(&self) -> Option<&Cell> {
        self.start.and_then(|p| self.cell(p))
    }

    pub fn end(&self) -> Option<&Cell> {
        self.end.and_then(|p| self.cell(p))
    }

    pub fn start_pos(&self) -> Option<Point> {
        self.start
    }

    pub fn end_pos(&self) -> Option<Point> {
        self.end
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(Cell::is_passable)
    }

    /// Whether `p` is a wall. Out-of-bounds points count as wall.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        !self.is_passable(p)
    }

    /// Whether `p` lies strictly inside the border.
    #[inline]
    pub fn is_interior(&self, p: Point) -> bool {
        self.dims.contains(p) && !self.dims.is_border(p)
    }

    /// Passable cardinal neighbours of `p`, in order up, down, left, right.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_passable(n))
    }

    /// Number of non-wall cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    // -----------------------------------------------------------------------
    // Layout editing
    // -----------------------------------------------------------------------

    /// Set or clear the wall on `p`.
    ///
    /// Border cells cannot be opened. Walling an endpoint drops its
    /// designation.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        self.check_editable(p, !wall)?;
        if wall {
            if self.start == Some(p) {
                self.start = None;
            }
            if self.end == Some(p) {
                self.end = None;
            }
        }
        let cell = self.cell_mut(p)?;
        cell.wall = wall;
        if wall {
            cell.start = false;
            cell.end = false;
        }
        Ok(())
    }

    /// Set the terrain of `p`. Walls keep the terrain but ignore it.
    pub fn set_terrain(&mut self, p: Point, terrain: Terrain) -> Result<(), GridError> {
        self.cell_mut(p)?.terrain = terrain;
        Ok(())
    }

    /// Make `p` the start, clearing any previous start. Opens `p`.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.check_editable(p, true)?;
        if let Some(old) = self.start.take() {
            self.cell_mut(old)?.start = false;
        }
        let cell = self.cell_mut(p)?;
        cell.wall = false;
        cell.start = true;
        self.start = Some(p);
        Ok(())
    }

    /// Make `p` the end, clearing any previous end. Opens `p`.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        self.check_editable(p, true)?;
        if let Some(old) = self.end.take() {
            self.cell_mut(old)?.end = false;
        }
        let cell = self.cell_mut(p)?;
        cell.wall = false;
        cell.end = true;
        self.end = Some(p);
        Ok(())
    }

    /// Build a grid from an ASCII layout.
    ///
    /// Glyphs: `#` wall, `S` start, `E` end, and the terrain glyphs
    /// `.` `,` `:` `~`. Leading and trailing whitespace of the whole string
    /// is ignored; every line must have the same width and the border must
    /// be wall.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim_end).collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count() as i32;
            if found != cols {
                return Err(GridError::RaggedRow {
                    row: row as i32,
                    expected: cols,
                    found,
                });
            }
        }

        let mut grid = Grid::new(rows, cols)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let p = Point::new(row as i32, col as i32);
                match ch {
                    '#' => {}
                    'S' => {
                        if grid.start.is_some() {
                            return Err(GridError::DuplicateStart(p));
                        }
                        grid.set_start(p)?;
                    }
                    'E' => {
                        if grid.end.is_some() {
                            return Err(GridError::DuplicateEnd(p));
                        }
                        grid.set_end(p)?;
                    }
                    _ => {
                        let terrain =
                            Terrain::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, pos: p })?;
                        grid.set_wall(p, false)?;
                        grid.set_terrain(p, terrain)?;
                    }
                }
            }
        }
        Ok(grid)
    }

    fn check_editable(&self, p: Point, opening: bool) -> Result<(), GridError> {
        if !self.dims.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        if opening && self.dims.is_border(p) {
            return Err(GridError::OpenBorder(p));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Generator hooks
    // -----------------------------------------------------------------------

    fn cell_mut(&mut self, p: Point) -> Result<&mut Cell, GridError> {
        match self.dims.index(p) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(GridError::OutOfBounds(p)),
        }
    }

    pub(crate) fn cells_mut(&mut self) -> std::slice::IterMut<'_, Cell> {
        self.cells.iter_mut()
    }

    /// Turn every cell back into a plain wall and forget the endpoints.
    pub(crate) fn fill_walls(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_to_wall();
        }
        self.start = None;
        self.end = None;
    }

    /// Open an interior cell. Returns `true` if it was a wall.
    pub(crate) fn open(&mut self, p: Point) -> bool {
        if !self.is_interior(p) {
            return false;
        }
        match self.dims.index(p) {
            Some(i) => std::mem::replace(&mut self.cells[i].wall, false),
            None => false,
        }
    }

    /// Mark the generated endpoints. Both must be interior.
    pub(crate) fn designate(&mut self, start: Point, end: Point) {
        self.open(start);
        self.open(end);
        if let Some(i) = self.dims.index(start) {
            self.cells[i].start = true;
            self.start = Some(start);
        }
        if let Some(i) = self.dims.index(end) {
            self.cells[i].end = true;
            self.end = Some(end);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dims.cols as usize).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
#######
#######
#S~..E#
#######
#######";

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            Grid::new(4, 5).unwrap_err(),
            GridError::InvalidDimensions { rows: 4, cols: 5 }
        );
        assert!(Grid::new(3, 3).is_err());
        assert!(Grid::new(5, 6).is_err());
        assert!(Grid::new(-5, 5).is_err());
        assert!(Grid::new(5, 5).is_ok());
    }

    #[test]
    fn new_grid_is_solid_without_endpoints() {
        let g = Grid::new(5, 7).unwrap();
        assert_eq!(g.dimensions(), Dims::new(5, 7));
        assert_eq!(g.passable_count(), 0);
        assert!(g.start().is_none());
        assert!(g.end().is_none());
        assert_eq!(g.iter().count(), 35);
    }

    #[test]
    fn cell_at_bounds() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.cell_at(2, 3).unwrap().pos(), Point::new(2, 3));
        assert!(g.cell_at(5, 0).is_none());
        assert!(g.cell_at(0, -1).is_none());
    }

    #[test]
    fn parse_corridor() {
        let g = Grid::from_ascii(CORRIDOR).unwrap();
        assert_eq!(g.start_pos(), Some(Point::new(2, 1)));
        assert_eq!(g.end_pos(), Some(Point::new(2, 5)));
        assert_eq!(g.cell_at(2, 2).unwrap().terrain(), Terrain::Water);
        assert_eq!(g.passable_count(), 5);
        assert_eq!(g.to_string(), CORRIDOR);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Grid::from_ascii("#####\n####\n#####\n#####\n#####").unwrap_err(),
            GridError::RaggedRow {
                row: 1,
                expected: 5,
                found: 4
            }
        );
        assert!(matches!(
            Grid::from_ascii("#####\n#S?E#\n#...#\n#...#\n#####").unwrap_err(),
            GridError::InvalidGlyph { ch: '?', .. }
        ));
        assert_eq!(
            Grid::from_ascii("#####\n#S.S#\n#...#\n#..E#\n#####").unwrap_err(),
            GridError::DuplicateStart(Point::new(1, 3))
        );
        assert_eq!(
            Grid::from_ascii("#####\n#S.E#\n#...#\n#..E#\n#####").unwrap_err(),
            GridError::DuplicateEnd(Point::new(3, 3))
        );
        assert_eq!(
            Grid::from_ascii("##.##\n#S.E#\n#...#\n#...#\n#####").unwrap_err(),
            GridError::OpenBorder(Point::new(0, 2))
        );
        assert!(matches!(
            Grid::from_ascii("####\n#SE#\n####").unwrap_err(),
            GridError::InvalidDimensions { .. }
        ));
    }

    #[test]
    fn neighbors_skip_walls_in_order() {
        let g = Grid::from_ascii(
            "\
#####
#...#
#.#.#
#...#
#####",
        )
        .unwrap();
        let n: Vec<_> = g.neighbors(Point::new(1, 1)).collect();
        assert_eq!(n, vec![Point::new(2, 1), Point::new(1, 2)]);
        let n: Vec<_> = g.neighbors(Point::new(2, 1)).collect();
        assert_eq!(n, vec![Point::new(1, 1), Point::new(3, 1)]);
        // A wall still reports its open neighbours.
        assert_eq!(g.neighbors(Point::new(2, 2)).count(), 4);
    }

    #[test]
    fn moving_endpoints_clears_old_flags() {
        let mut g = Grid::from_ascii(CORRIDOR).unwrap();
        g.set_start(Point::new(2, 3)).unwrap();
        assert!(!g.cell_at(2, 1).unwrap().is_start());
        assert!(g.cell_at(2, 3).unwrap().is_start());
        assert_eq!(g.iter().filter(|c| c.is_start()).count(), 1);

        g.set_wall(Point::new(2, 5), true).unwrap();
        assert!(g.end().is_none());
        assert!(!g.cell_at(2, 5).unwrap().is_end());
    }

    #[test]
    fn border_stays_wall() {
        let mut g = Grid::new(5, 5).unwrap();
        assert_eq!(
            g.set_wall(Point::new(0, 2), false),
            Err(GridError::OpenBorder(Point::new(0, 2)))
        );
        assert_eq!(
            g.set_start(Point::new(4, 4)),
            Err(GridError::OpenBorder(Point::new(4, 4)))
        );
        assert_eq!(
            g.set_terrain(Point::new(9, 9), Terrain::Dirt),
            Err(GridError::OutOfBounds(Point::new(9, 9)))
        );
    }

    #[test]
    fn generate_keeps_invariants() {
        for seed in 0..25 {
            let endpoints = if seed % 2 == 0 {
                Endpoints::Corners
            } else {
                Endpoints::sampled()
            };
            let mut g = Grid::new(25, 25).unwrap().with_endpoints(endpoints);
            g.generate_seeded(seed);
            for c in g.iter() {
                if g.dimensions().is_border(c.pos()) {
                    assert!(c.is_wall(), "border cell {} open", c.pos());
                }
            }
            let start = g.start().unwrap();
            let end = g.end().unwrap();
            assert_ne!(start, end);
            assert!(start.is_passable() && end.is_passable());
            assert_eq!(g.iter().filter(|c| c.is_start()).count(), 1);
            assert_eq!(g.iter().filter(|c| c.is_end()).count(), 1);
        }
    }

    #[test]
    fn regenerate_does_not_leak_endpoints() {
        let mut g = Grid::new(15, 15).unwrap().with_endpoints(Endpoints::sampled());
        for seed in 0..10 {
            g.generate_seeded(seed);
            assert_eq!(g.iter().filter(|c| c.is_start()).count(), 1);
            assert_eq!(g.iter().filter(|c| c.is_end()).count(), 1);
        }
    }

    #[test]
    fn unseeded_generation_runs() {
        let mut g = Grid::new(9, 9).unwrap();
        g.generate();
        assert!(g.start().is_some());
        assert!(g.passable_count() >= 2 * 16 - 1);
    }

    #[test]
    fn display_round_trips() {
        let mut g = Grid::new(11, 11).unwrap();
        g.generate_seeded(99);
        let back = Grid::from_ascii(&g.to_string()).unwrap();
        assert_eq!(back.to_string(), g.to_string());
        assert_eq!(back.start_pos(), g.start_pos());
        assert_eq!(back.end_pos(), g.end_pos());
    }
}
