//! Bookkeeping shared by the searches: parent maps, path reconstruction and
//! the priority-queue entry.

use std::cmp::Ordering;
use std::collections::HashMap;

use maze_core::Point;

use crate::traits::WeightedPather;

/// Parent links recorded during a search. The source maps to `None`.
pub type ParentMap = HashMap<Point, Option<Point>>;

/// Walk parent links back from `end` to the source and return the path in
/// source-to-`end` order.
pub fn reconstruct_path(parents: &ParentMap, end: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(p) = cur {
        path.push(p);
        cur = parents.get(&p).copied().flatten();
    }
    path.reverse();
    path
}

/// Sum of entry costs over every node of `path`, the first one included.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[Point]) -> i32 {
    path.iter().map(|&p| pather.cost(p)).sum()
}

/// Heap entry ordered by `key`, lowest first.
///
/// Entries with equal keys pop in insertion order: `seq` is a per-search
/// counter used as the secondary key. Entries are never removed or updated
/// in place; a node reached again with a better score gets a fresh entry and
/// the stale one is dropped when popped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) pos: Point,
    pub(crate) key: i32,
    pub(crate) g: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key, then oldest.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
