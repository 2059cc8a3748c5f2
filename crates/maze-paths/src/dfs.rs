use std::collections::HashSet;

use maze_core::Point;

use crate::search::{ParentMap, reconstruct_path};
use crate::traits::Pather;

/// Depth-first search from `from` to `to`.
///
/// Same visited-on-push discipline as [`bfs_path`](crate::bfs_path) but
/// with a stack, so the last neighbor pushed is explored first. The path
/// is whatever the traversal reaches first; neither its length nor its
/// cost is minimal in general.
pub fn dfs_path<P: Pather>(pather: &P, from: Point, to: Point) -> Option<Vec<Point>> {
    let mut stack = vec![from];
    let mut visited = HashSet::from([from]);
    let mut parents = ParentMap::from([(from, None)]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = stack.pop() {
        if cur == to {
            return Some(reconstruct_path(&parents, to));
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &n in nbuf.iter() {
            if visited.insert(n) {
                parents.insert(n, Some(cur));
                stack.push(n);
            }
        }
    }

    None
}
