use std::collections::{BinaryHeap, HashMap, HashSet};

use maze_core::Point;

use crate::search::{NodeRef, ParentMap, reconstruct_path};
use crate::traits::AstarPather;

/// Path from `from` to `to` using A*, ordered by `g + estimate(n, to)`.
///
/// Same structure and cost convention as
/// [`dijkstra_path`](crate::dijkstra_path). With the Manhattan estimate of
/// [`Grid`](maze_core::Grid) the result is only guaranteed cheapest when no
/// zero-cost terrain is involved: a free step lowers the estimate by one
/// while adding nothing to `g`, so the estimate can overshoot.
pub fn astar_path<P: AstarPather>(
    pather: &P,
    from: Point,
    to: Point,
) -> Option<(Vec<Point>, i32)> {
    let g0 = pather.cost(from);
    let mut g_score: HashMap<Point, i32> = HashMap::from([(from, g0)]);
    let mut parents = ParentMap::from([(from, None)]);
    let mut visited: HashSet<Point> = HashSet::new();
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    open.push(NodeRef {
        pos: from,
        key: g0 + pather.estimate(from, to),
        g: g0,
        seq,
    });

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cur = current.pos;
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
            if g_score.get(&n).is_some_and(|&g| tentative >= g) {
                continue;
            }
            g_score.insert(n, tentative);
            parents.insert(n, Some(cur));
            seq += 1;
            open.push(NodeRef {
                pos: n,
                key: tentative + pather.estimate(n, to),
                g: tentative,
                seq,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, CORRIDOR, DIRT_SHORTCUT, OPEN, SPLIT, TWO_ROUTES};
    use crate::{Pather, WeightedPather, dijkstra_path, path_cost};
    use maze_core::{Grid, Terrain};
    use std::cell::RefCell;

    #[test]
    fn takes_the_free_detour() {
        let g = fixtures::grid(TWO_ROUTES);
        let (path, cost) = astar_path(&g, Point::new(1, 1), Point::new(1, 5)).unwrap();
        assert_eq!(cost, 0);
        assert_eq!(path.len(), 9);
        assert_eq!(path_cost(&g, &path), 0);
    }

    #[test]
    fn corridor_cost_is_sum_of_cells() {
        let g = fixtures::grid(CORRIDOR);
        let (path, cost) = astar_path(&g, Point::new(2, 1), Point::new(2, 4)).unwrap();
        assert_eq!(cost, 10);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn matches_dijkstra_without_free_cells() {
        // Every open cell costs at least one, so Manhattan is admissible.
        let mut g = fixtures::grid(OPEN);
        for c in g.clone().iter().filter(|c| c.is_passable()) {
            g.set_terrain(c.pos(), Terrain::Grass).unwrap();
        }
        g.set_terrain(Point::new(2, 2), Terrain::Water).unwrap();
        let (from, to) = (Point::new(1, 1), Point::new(3, 3));
        let (_, a) = astar_path(&g, from, to).unwrap();
        let (_, d) = dijkstra_path(&g, from, to).unwrap();
        assert_eq!(a, d);
        assert_eq!(a, 5);
    }

    /// Wraps a grid with a caller-chosen estimate and records every
    /// expanded node.
    struct Steered<'a, F> {
        grid: &'a Grid,
        estimate: F,
        expanded: RefCell<Vec<Point>>,
    }

    impl<'a, F: Fn(Point) -> i32> Steered<'a, F> {
        fn new(grid: &'a Grid, estimate: F) -> Self {
            Self {
                grid,
                estimate,
                expanded: RefCell::new(Vec::new()),
            }
        }
    }

    impl<F: Fn(Point) -> i32> Pather for Steered<'_, F> {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            self.expanded.borrow_mut().push(p);
            Pather::neighbors(self.grid, p, buf);
        }
    }

    impl<F: Fn(Point) -> i32> WeightedPather for Steered<'_, F> {
        fn cost(&self, p: Point) -> i32 {
            WeightedPather::cost(self.grid, p)
        }
    }

    impl<F: Fn(Point) -> i32> AstarPather for Steered<'_, F> {
        fn estimate(&self, from: Point, _: Point) -> i32 {
            (self.estimate)(from)
        }
    }

    #[test]
    fn zero_estimate_reduces_to_dijkstra() {
        let g = fixtures::grid(TWO_ROUTES);
        let (from, to) = (Point::new(1, 1), Point::new(1, 5));
        assert_eq!(
            astar_path(&Steered::new(&g, |_| 0), from, to),
            dijkstra_path(&g, from, to)
        );
    }

    #[test]
    fn stale_entries_are_skipped() {
        // The estimate lures the search through the water at (1,2) first,
        // queueing (2,2) and (1,3) at g = 10. Both are later improved to
        // g = 0, leaving stale entries behind that must not be expanded.
        let mut g = fixtures::grid(OPEN);
        g.set_terrain(Point::new(1, 2), Terrain::Water).unwrap();
        let to = Point::new(3, 3);
        let steered = Steered::new(&g, |p| match (p.row, p.col) {
            (1, 2) => 0,
            (3, 3) => 100,
            _ => 20,
        });
        let (path, cost) = astar_path(&steered, Point::new(1, 1), to).unwrap();
        assert_eq!(cost, 0);
        assert_eq!(path, fixtures::pts(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]));

        let expanded = steered.expanded.borrow();
        let unique: HashSet<_> = expanded.iter().collect();
        assert_eq!(unique.len(), expanded.len(), "a node was expanded twice");
        assert!(expanded.contains(&Point::new(1, 2)));
    }

    #[test]
    fn manhattan_estimate_can_miss_the_cheapest_path() {
        // The free detour wanders away from E, pushing its f above the
        // dirt shortcut's. A* settles for cost 5 where Dijkstra finds 0.
        let g = fixtures::grid(DIRT_SHORTCUT);
        let (from, to) = (Point::new(1, 1), Point::new(1, 3));
        let (path, cost) = astar_path(&g, from, to).unwrap();
        assert_eq!(cost, 5);
        assert_eq!(path, fixtures::pts(&[(1, 1), (1, 2), (1, 3)]));
        assert_eq!(dijkstra_path(&g, from, to).map(|(_, c)| c), Some(0));
    }

    #[test]
    fn unreachable() {
        let g = fixtures::grid(SPLIT);
        assert_eq!(astar_path(&g, Point::new(1, 1), Point::new(1, 3)), None);
    }
}
