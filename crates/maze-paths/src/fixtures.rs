//! Hand-built layouts shared by the search tests.

use maze_core::{Grid, Point};

/// Two routes from S to E: three water cells across the top (5 cells,
/// cost 30) or a free detour along the bottom (9 cells, cost 0).
pub(crate) const TWO_ROUTES: &str = "\
#######
#S~~~E#
#.###.#
#.....#
#######";

/// A single corridor with cost profile EMPTY, WATER, EMPTY, EMPTY.
pub(crate) const CORRIDOR: &str = "\
#######
#######
#S~.E##
#######
#######";

/// Start and end in separate pockets.
pub(crate) const SPLIT: &str = "\
#####
#S#E#
#.#.#
#.#.#
#####";

/// A dirt step straight to E, or a free loop that first heads away from
/// it. The Manhattan estimate makes A* take the dirt.
pub(crate) const DIRT_SHORTCUT: &str = "\
#########
#S:E....#
#.#####.#
#.......#
#########";

/// Open 3×3 interior, start (1,1), end (3,3).
pub(crate) const OPEN: &str = "\
#####
#S..#
#...#
#..E#
#####";

pub(crate) fn grid(layout: &str) -> Grid {
    Grid::from_ascii(layout).unwrap()
}

pub(crate) fn pts(v: &[(i32, i32)]) -> Vec<Point> {
    v.iter().map(|&(r, c)| Point::new(r, c)).collect()
}

/// Generated mazes over a spread of seeds and both endpoint policies.
pub(crate) fn generated() -> impl Iterator<Item = Grid> {
    (0..40u64).map(|seed| {
        let endpoints = if seed % 2 == 0 {
            maze_core::Endpoints::Corners
        } else {
            maze_core::Endpoints::sampled()
        };
        let size = 5 + 2 * (seed as i32 % 10);
        let mut g = Grid::new(size, size + 4).unwrap().with_endpoints(endpoints);
        g.generate_seeded(seed);
        g
    })
}
