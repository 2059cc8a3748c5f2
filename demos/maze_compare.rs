//! Generate a maze and compare path searches on it.
//!
//! Run: cargo run --bin maze-compare -- --size 31 --seed 7 --color

use clap::Parser;
use log::info;
use maze_core::Grid;
use maze_demos::{Options, legend, render, report};
use maze_paths::find_path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let opts = Options::parse();

    let mut grid = Grid::new(opts.rows(), opts.cols())?.with_endpoints(opts.endpoints());
    match opts.seed {
        Some(seed) => grid.generate_seeded(seed),
        None => grid.generate(),
    }
    info!(
        "maze {} with {} open cells",
        grid.dimensions(),
        grid.passable_count()
    );

    println!("{}\n", legend());
    for algorithm in opts.algorithms() {
        let result = find_path(algorithm, &grid)?;
        println!("{}\n", render(&grid, result.path(), opts.color));
        println!("{}\n", report(&result));
    }
    Ok(())
}
