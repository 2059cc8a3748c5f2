use std::collections::{HashSet, VecDeque};

use maze_core::Point;

use crate::search::{ParentMap, reconstruct_path};
use crate::traits::Pather;

/// Breadth-first search from `from` to `to`.
///
/// Nodes are marked visited when enqueued, so each is queued at most once.
/// The returned path has the fewest steps; among equally short paths the
/// pather's neighbor order decides.
pub fn bfs_path<P: Pather>(pather: &P, from: Point, to: Point) -> Option<Vec<Point>> {
    let mut queue = VecDeque::from([from]);
    let mut visited = HashSet::from([from]);
    let mut parents = ParentMap::from([(from, None)]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = queue.pop_front() {
        if cur == to {
            return Some(reconstruct_path(&parents, to));
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &n in nbuf.iter() {
            if visited.insert(n) {
                parents.insert(n, Some(cur));
                queue.push_back(n);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, OPEN, SPLIT, TWO_ROUTES};

    #[test]
    fn fewest_steps_in_open_room() {
        let g = fixtures::grid(OPEN);
        let path = bfs_path(&g, Point::new(1, 1), Point::new(3, 3)).unwrap();
        assert_eq!(path, fixtures::pts(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]));
    }

    #[test]
    fn ignores_cost() {
        let g = fixtures::grid(TWO_ROUTES);
        let path = bfs_path(&g, Point::new(1, 1), Point::new(1, 5)).unwrap();
        assert_eq!(path.len(), 5);
        assert!(path.iter().all(|p| p.row == 1));
    }

    #[test]
    fn unreachable() {
        let g = fixtures::grid(SPLIT);
        assert_eq!(bfs_path(&g, Point::new(1, 1), Point::new(1, 3)), None);
    }

    #[test]
    fn source_is_target() {
        let g = fixtures::grid(OPEN);
        let p = Point::new(2, 2);
        assert_eq!(bfs_path(&g, p, p), Some(vec![p]));
    }
}
