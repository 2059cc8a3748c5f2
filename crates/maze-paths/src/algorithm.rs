//! Algorithm selection and the grid-level entry points.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;
use maze_core::{Cell, Grid, Point};

use crate::astar::astar_path;
use crate::bfs::bfs_path;
use crate::dfs::dfs_path;
use crate::dijkstra::dijkstra_path;
use crate::error::{ParseAlgorithmError, SearchError};
use crate::result::PathResult;
use crate::search::path_cost;

/// The four supported search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in comparison order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    /// Whether the returned path is guaranteed cheapest.
    ///
    /// A* is excluded: its Manhattan estimate overshoots across
    /// zero-cost terrain.
    pub const fn is_cost_optimal(self) -> bool {
        matches!(self, Algorithm::Dijkstra)
    }

    /// Run this algorithm on `grid`. Shorthand for [`find_path`].
    pub fn run(self, grid: &Grid) -> Result<PathResult, SearchError> {
        find_path(self, grid)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Search `grid` from its start to its end with `algorithm`.
///
/// Fails only if the grid has no start or end. An unreachable end is
/// reported through [`PathResult::path`] being `None`.
pub fn find_path(algorithm: Algorithm, grid: &Grid) -> Result<PathResult, SearchError> {
    let from = grid.start_pos().ok_or(SearchError::MissingStart)?;
    let to = grid.end_pos().ok_or(SearchError::MissingEnd)?;

    let timer = Instant::now();
    let found = match algorithm {
        Algorithm::Bfs => bfs_path(grid, from, to).map(|p| with_cost(grid, p)),
        Algorithm::Dfs => dfs_path(grid, from, to).map(|p| with_cost(grid, p)),
        Algorithm::Dijkstra => dijkstra_path(grid, from, to),
        Algorithm::AStar => astar_path(grid, from, to),
    };
    let result = match found {
        Some((path, cost)) => {
            let cells: Vec<Cell> = path.iter().filter_map(|&p| grid.cell(p).copied()).collect();
            PathResult::found(algorithm, cells, cost, timer.elapsed())
        }
        None => PathResult::not_found(algorithm, timer.elapsed()),
    };

    if result.found_path() {
        debug!(
            "{algorithm}: {from} -> {to} in {} cells, cost {}, {} \u{3bc}s",
            result.path_length(),
            result.total_cost(),
            result.elapsed_micros()
        );
    } else {
        debug!("{algorithm}: no path from {from} to {to}");
    }
    Ok(result)
}

/// Run every algorithm in [`Algorithm::ALL`] order on the same grid.
pub fn compare_all(grid: &Grid) -> Result<Vec<PathResult>, SearchError> {
    Algorithm::ALL
        .into_iter()
        .map(|a| find_path(a, grid))
        .collect()
}

fn with_cost(grid: &Grid, path: Vec<Point>) -> (Vec<Point>, i32) {
    let cost = path_cost(grid, &path);
    (path, cost)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for a in Algorithm::ALL {
            let json = serde_json::to_string(&a).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, a);
        }
    }
}
