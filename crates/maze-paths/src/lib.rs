//! Path search over weighted-terrain mazes.
//!
//! Four strategies are provided, each as a generic point-level search and
//! through the grid-level [`find_path`] entry point:
//!
//! - **BFS** fewest steps ([`bfs_path`])
//! - **DFS** first path found depth-first ([`dfs_path`])
//! - **Dijkstra** cheapest total terrain cost ([`dijkstra_path`])
//! - **A\*** Dijkstra guided by a Manhattan estimate ([`astar_path`])
//!
//! Cost is attached to nodes: entering a cell costs its terrain cost, and
//! the start cell's own cost is counted once.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, reachability |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`Grid`](maze_core::Grid) implements all three.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod reach;
mod result;
mod search;
mod traits;

#[cfg(test)]
mod fixtures;

pub use algorithm::{Algorithm, compare_all, find_path};
pub use astar::astar_path;
pub use bfs::bfs_path;
pub use dfs::dfs_path;
pub use dijkstra::dijkstra_path;
pub use error::{ParseAlgorithmError, SearchError};
pub use reach::reachable_from;
pub use result::{NO_PATH_COST, PathResult};
pub use search::{ParentMap, path_cost, reconstruct_path};
pub use traits::{AstarPather, Pather, WeightedPather};
