use std::collections::{BinaryHeap, HashMap, HashSet};

use maze_core::Point;

use crate::search::{NodeRef, ParentMap, reconstruct_path};
use crate::traits::WeightedPather;

/// Cheapest path from `from` to `to` using Dijkstra's algorithm.
///
/// The cost of a path is the sum of the entry costs of all its nodes,
/// `from` included, so the returned cost always equals
/// [`path_cost`](crate::path_cost) of the returned path. Returns `None` if
/// `to` is unreachable.
pub fn dijkstra_path<P: WeightedPather>(
    pather: &P,
    from: Point,
    to: Point,
) -> Option<(Vec<Point>, i32)> {
    let g0 = pather.cost(from);
    // Missing entries stand for an infinite distance.
    let mut dist: HashMap<Point, i32> = HashMap::from([(from, g0)]);
    let mut parents = ParentMap::from([(from, None)]);
    let mut visited: HashSet<Point> = HashSet::new();
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    open.push(NodeRef {
        pos: from,
        key: g0,
        g: g0,
        seq,
    });

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cur = current.pos;
        // Stale entry for a node already settled.
        if !visited.insert(cur) {
            continue;
        }

        if cur == to {
            return Some((reconstruct_path(&parents, to), current.g));
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &n in nbuf.iter() {
            if visited.contains(&n) {
                continue;
            }
            let tentative = current.g + pather.cost(n);
            if dist.get(&n).is_some_and(|&d| tentative >= d) {
                continue;
            }
            dist.insert(n, tentative);
            parents.insert(n, Some(cur));
            seq += 1;
            open.push(NodeRef {
                pos: n,
                key: tentative,
                g: tentative,
                seq,
            });
        }
    }

    None
}
