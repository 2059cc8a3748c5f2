use maze_core::{Grid, Point, manhattan};

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather whose nodes carry a cost paid on entry.
pub trait WeightedPather: Pather {
    /// Cost of entering `p`. Must be >= 0.
    fn cost(&self, p: Point) -> i32;
}

/// Weighted pather with a distance heuristic for A*.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}

impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

impl WeightedPather for Grid {
    fn cost(&self, p: Point) -> i32 {
        self.cell(p).map_or(0, |c| c.cost())
    }
}

impl AstarPather for Grid {
    /// Manhattan distance. Not admissible when zero-cost terrain lies on
    /// the way, since a step can then cost less than one.
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
