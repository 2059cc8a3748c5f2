//! Maze generation by randomized depth-first carving (recursive backtracker).
//!
//! Carving works on the lattice of odd `(row, col)` points: every step
//! jumps two cells, opens the wall in between and the destination. Once
//! the stack drains every lattice point is open and the carved region is a
//! spanning tree, so every open cell is reachable from every other.

use log::{debug, trace};
use rand::Rng;

use crate::geom::{Point, manhattan};
use crate::grid::Grid;
use crate::terrain::Terrain;

/// Default number of candidate ends drawn by [`Endpoints::sampled`].
pub const DEFAULT_END_CANDIDATES: usize = 32;

/// How [`MazeGen`] chooses the start and end cells after carving.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoints {
    /// Start at `(1, 1)`, end at `(rows - 2, cols - 2)`.
    #[default]
    Corners,
    /// Random start; the end is the Manhattan-farthest of `candidates`
    /// random open cells. This approximates the farthest point, it is not
    /// the true graph eccentricity.
    Sampled { candidates: usize },
}

impl Endpoints {
    /// [`Endpoints::Sampled`] with [`DEFAULT_END_CANDIDATES`].
    pub const fn sampled() -> Self {
        Endpoints::Sampled {
            candidates: DEFAULT_END_CANDIDATES,
        }
    }
}

const LATTICE_STEPS: [Point; 4] = [
    Point::new(-2, 0),
    Point::new(2, 0),
    Point::new(0, -2),
    Point::new(0, 2),
];

/// Maze generator operating on a [`Grid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub endpoints: Endpoints,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using corner endpoints.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            endpoints: Endpoints::Corners,
        }
    }

    /// Select the endpoint policy.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Reset `grid` to solid wall and carve a new maze into it, then
    /// designate start/end and scatter terrain over the open cells.
    ///
    /// Returns the number of open cells.
    pub fn generate(&mut self, grid: &mut Grid) -> usize {
        grid.fill_walls();
        let carved = self.carve(grid, Point::new(1, 1));
        let (start, end) = self.place_endpoints(grid);
        grid.designate(start, end);
        self.assign_terrain(grid);
        debug!(
            "generated {} maze: {} open cells, start {} end {}",
            grid.dimensions(),
            carved,
            start,
            end
        );
        carved
    }

    /// Depth-first carve from `origin`. Returns the number of cells opened.
    fn carve(&mut self, grid: &mut Grid, origin: Point) -> usize {
        let mut stack = vec![origin];
        let mut carved = grid.open(origin) as usize;
        let mut unvisited: Vec<Point> = Vec::with_capacity(4);

        while let Some(&current) = stack.last() {
            unvisited.clear();
            for step in LATTICE_STEPS {
                let next = current + step;
                if grid.is_interior(next) && grid.is_wall(next) {
                    unvisited.push(next);
                }
            }

            if unvisited.is_empty() {
                stack.pop();
                continue;
            }

            let next = unvisited[self.rng.random_range(0..unvisited.len())];
            let between = Point::new(
                (current.row + next.row) / 2,
                (current.col + next.col) / 2,
            );
            carved += grid.open(between) as usize;
            carved += grid.open(next) as usize;
            trace!("carve {current} -> {next}");
            stack.push(next);
        }

        carved
    }

    fn place_endpoints(&mut self, grid: &Grid) -> (Point, Point) {
        let corners = (
            Point::new(1, 1),
            Point::new(grid.rows() - 2, grid.cols() - 2),
        );
        let Endpoints::Sampled { candidates } = self.endpoints else {
            return corners;
        };

        let open: Vec<Point> = grid
            .iter()
            .filter(|c| c.is_passable())
            .map(|c| c.pos())
            .collect();
        if open.len() < 2 {
            return corners;
        }

        let start = open[self.rng.random_range(0..open.len())];
        let mut best: Option<Point> = None;
        for _ in 0..candidates.max(1) {
            let candidate = open[self.rng.random_range(0..open.len())];
            if candidate == start {
                continue;
            }
            if best.is_none_or(|b| manhattan(start, candidate) > manhattan(start, b)) {
                best = Some(candidate);
            }
        }

        // Every draw hit the start: fall back to a deterministic scan.
        let end = match best {
            Some(end) => end,
            None => open
                .iter()
                .copied()
                .filter(|&p| p != start)
                .max_by_key(|&p| manhattan(start, p))
                .unwrap_or(corners.1),
        };
        (start, end)
    }

    fn assign_terrain(&mut self, grid: &mut Grid) {
        for cell in grid.cells_mut() {
            if cell.is_wall() || cell.is_start() || cell.is_end() {
                continue;
            }
            let r: f64 = self.rng.random();
            cell.terrain = Terrain::from_sample(r);
        }
    }
}
