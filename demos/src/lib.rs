//! Terminal front end shared by the demo binaries.
//!
//! Parses command-line options, renders a [`Grid`] with an optional path
//! overlay, and formats [`PathResult`] reports.

use std::collections::HashSet;
use std::str::FromStr;

use clap::Parser;
use crossterm::style::{Color, Stylize};
use maze_core::{Cell, Endpoints, Grid, Point, Terrain};
use maze_paths::{Algorithm, PathResult};

pub const DEFAULT_SIZE: i32 = 25;

// Palette
const COL_EMPTY: Color = Color::Rgb { r: 245, g: 247, b: 242 };
const COL_GRASS: Color = Color::Rgb { r: 106, g: 168, b: 79 };
const COL_DIRT: Color = Color::Rgb { r: 180, g: 142, b: 91 };
const COL_WATER: Color = Color::Rgb { r: 61, g: 133, b: 198 };
const COL_WALL: Color = Color::Rgb { r: 55, g: 71, b: 79 };
const COL_START: Color = Color::Rgb { r: 76, g: 175, b: 80 };
const COL_END: Color = Color::Rgb { r: 244, g: 67, b: 54 };
const COL_PATH: Color = Color::Rgb { r: 255, g: 193, b: 7 };

const PATH_GLYPH: char = '*';

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Generate a maze and compare path searches on it
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "maze-compare",
    version,
    after_help = "Logging is controlled by RUST_LOG, e.g. RUST_LOG=debug."
)]
pub struct Options {
    /// Rows and columns (odd, >= 5)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: i32,

    /// Rows only, overrides --size
    #[arg(long)]
    pub rows: Option<i32>,

    /// Columns only, overrides --size
    #[arg(long)]
    pub cols: Option<i32>,

    /// Deterministic maze from this seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// BFS, DFS, Dijkstra or A* (repeatable; default all)
    #[arg(long = "algorithm", value_name = "NAME", value_parser = Algorithm::from_str)]
    pub algorithms: Vec<Algorithm>,

    /// Random start and a far end instead of opposite corners
    #[arg(long)]
    pub sampled: bool,

    /// Colour the output
    #[arg(long)]
    pub color: bool,
}

impl Options {
    pub fn rows(&self) -> i32 {
        self.rows.unwrap_or(self.size)
    }

    pub fn cols(&self) -> i32 {
        self.cols.unwrap_or(self.size)
    }

    /// The algorithms to run, in the order given. Every one when none is.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        if self.sampled {
            Endpoints::sampled()
        } else {
            Endpoints::Corners
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw `grid` one character per cell, marking the interior of `path`
/// with `*`. With `color` set, cells are styled with ANSI colours.
pub fn render(grid: &Grid, path: Option<&[Cell]>, color: bool) -> String {
    let on_path: HashSet<Point> = path
        .unwrap_or_default()
        .iter()
        .map(Cell::pos)
        .collect();

    let mut out = String::with_capacity(grid.dimensions().len() * 2);
    for (i, cell) in grid.iter().enumerate() {
        if i > 0 && cell.col() == 0 {
            out.push('\n');
        }
        let overlaid = on_path.contains(&cell.pos()) && !cell.is_start() && !cell.is_end();
        let glyph = if overlaid { PATH_GLYPH } else { cell.glyph() };
        if color {
            let fg = if overlaid { COL_PATH } else { cell_color(cell) };
            out.push_str(&glyph.to_string().with(fg).to_string());
        } else {
            out.push(glyph);
        }
    }
    out
}

fn cell_color(cell: &Cell) -> Color {
    if cell.is_start() {
        COL_START
    } else if cell.is_end() {
        COL_END
    } else if cell.is_wall() {
        COL_WALL
    } else {
        match cell.terrain() {
            Terrain::Empty => COL_EMPTY,
            Terrain::Grass => COL_GRASS,
            Terrain::Dirt => COL_DIRT,
            Terrain::Water => COL_WATER,
        }
    }
}

/// One-line key for the rendered glyphs.
pub fn legend() -> String {
    let mut s = String::from("# wall  S start  E end  * path");
    for t in Terrain::ALL {
        s.push_str(&format!("  {} {} ({})", t.glyph(), t.name(), t.cost()));
    }
    s
}

/// The search report, flagged when the algorithm may have missed a
/// cheaper path.
pub fn report(result: &PathResult) -> String {
    if result.found_path() && !result.algorithm().is_cost_optimal() {
        format!("{result}\n(cheapest path not guaranteed)")
    } else {
        result.to_string()
    }
}
