//! **maze-core**: grid mazes with weighted terrain.
//!
//! This crate provides the data model consumed by `maze-paths` and by any
//! presentation layer: geometry primitives, the terrain catalog, cells, the
//! [`Grid`] itself and the recursive-backtracker generator behind
//! [`Grid::generate`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;
pub mod terrain;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Dims, Point, manhattan};
pub use grid::{Grid, MIN_SIDE};
pub use mapgen::{Endpoints, MazeGen};
pub use terrain::Terrain;
