use std::fmt;
use std::time::Duration;

use maze_core::Cell;

use crate::algorithm::Algorithm;

/// Sentinel total cost of a search that found no path.
pub const NO_PATH_COST: i32 = -1;

/// Outcome of one search. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    path: Option<Vec<Cell>>,
    total_cost: i32,
    elapsed: Duration,
    algorithm: Algorithm,
}

impl PathResult {
    pub(crate) fn found(
        algorithm: Algorithm,
        path: Vec<Cell>,
        total_cost: i32,
        elapsed: Duration,
    ) -> Self {
        Self {
            path: Some(path),
            total_cost,
            elapsed,
            algorithm,
        }
    }

    pub(crate) fn not_found(algorithm: Algorithm, elapsed: Duration) -> Self {
        Self {
            path: None,
            total_cost: NO_PATH_COST,
            elapsed,
            algorithm,
        }
    }

    /// Cells from start to end inclusive, or `None` if no path exists.
    pub fn path(&self) -> Option<&[Cell]> {
        self.path.as_deref()
    }

    pub fn found_path(&self) -> bool {
        self.path.is_some()
    }

    /// Sum of terrain costs along the path, or [`NO_PATH_COST`].
    pub fn total_cost(&self) -> i32 {
        self.total_cost
    }

    /// Number of cells on the path, 0 when there is none.
    pub fn path_length(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Wall-clock time spent by the search.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_micros(&self) -> u64 {
        self.elapsed.as_micros().try_into().unwrap_or(u64::MAX)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Whether two results describe the same path and cost, ignoring timing.
    pub fn same_outcome(&self, other: &PathResult) -> bool {
        self.algorithm == other.algorithm
            && self.total_cost == other.total_cost
            && self.path_positions() == other.path_positions()
    }

    fn path_positions(&self) -> Option<Vec<maze_core::Point>> {
        self.path
            .as_ref()
            .map(|p| p.iter().map(Cell::pos).collect())
    }
}

impl fmt::Display for PathResult {
    /// Multi-line report, e.g.
    ///
    /// ```text
    /// === A* ===
    ///
    /// Path Found!
    ///
    /// Total Cost: 42
    /// Path Length: 37 steps
    /// Execution Time: 85 μs
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.algorithm_name())?;
        writeln!(f)?;
        if self.path.is_none() {
            return write!(f, "No path found!");
        }
        writeln!(f, "Path Found!")?;
        writeln!(f)?;
        writeln!(f, "Total Cost: {}", self.total_cost)?;
        writeln!(f, "Path Length: {} steps", self.path_length())?;
        write!(f, "Execution Time: {} \u{3bc}s", self.elapsed_micros())
    }
}
