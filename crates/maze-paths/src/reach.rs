//! Reachability flood fill.

use std::collections::HashSet;

use maze_core::Point;

use crate::traits::Pather;

/// Every point connected to `p` through `pather`'s neighbor relation,
/// `p` included, in discovery order.
pub fn reachable_from<P: Pather>(pather: &P, p: Point) -> Vec<Point> {
    let mut seen = HashSet::from([p]);
    let mut result = vec![p];
    let mut stack = vec![p];
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cp) = stack.pop() {
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if seen.insert(np) {
                stack.push(np);
                result.push(np);
            }
        }
    }

    result
}
