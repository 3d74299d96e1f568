//! Admissible cost-to-go estimates over a [`ProximityGraph`].
//!
//! - [`straight_line`]: Euclidean distance to a fixed goal. Any real path is
//!   at least as long as the straight segment between its endpoints.
//! - [`tour_bound`]: lower bound on the cost of finishing a tour: the
//!   minimum spanning tree over the unvisited nodes, plus the cheapest edge
//!   leaving the current node and the cheapest edge returning to the start.

use crate::proximity::ProximityGraph;

/// Straight-line distance from `from` to `goal`.
#[inline]
pub fn straight_line(graph: &ProximityGraph, from: usize, goal: usize) -> f64 {
    graph.distance(from, goal)
}

/// Minimum spanning tree cost over `nodes` using Prim's algorithm on the
/// complete Euclidean graph. Returns 0 for zero or one node.
///
/// The tree grows from `nodes[0]`; each round adds the cheapest edge joining
/// the tree to a node still outside it.
pub fn mst_cost(graph: &ProximityGraph, nodes: &[usize]) -> f64 {
    let Some((&root, rest)) = nodes.split_first() else {
        return 0.0;
    };

    // (node, cheapest known edge to the tree)
    let mut outside: Vec<(usize, f64)> = rest
        .iter()
        .map(|&j| (j, graph.distance(root, j)))
        .collect();
    let mut total = 0.0;

    loop {
        let cheapest = outside
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.1.total_cmp(&b.1.1))
            .map(|(k, &(node, edge))| (k, node, edge));
        let Some((k, next, edge)) = cheapest else {
            break;
        };
        total += edge;
        outside.swap_remove(k);
        for (j, best) in outside.iter_mut() {
            *best = best.min(graph.distance(next, *j));
        }
    }
    total
}

/// Lower bound on the remaining cost of a tour that started at `start`, is
/// currently at `last`, and still has to visit `unvisited` before closing.
/// Returns 0 once nothing is left to visit.
pub fn tour_bound(graph: &ProximityGraph, start: usize, last: usize, unvisited: &[usize]) -> f64 {
    if unvisited.is_empty() {
        return 0.0;
    }
    let nearest = |from: usize| {
        unvisited
            .iter()
            .map(|&u| graph.distance(from, u))
            .fold(f64::INFINITY, f64::min)
    };
    mst_cost(graph, unvisited) + nearest(last) + nearest(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepsearch_core::Vec2;

    fn complete(points: &[(f64, f64)]) -> ProximityGraph {
        let pts = points.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
        ProximityGraph::k_nearest(pts, points.len())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mst_of_nothing_is_zero() {
        let g = complete(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(mst_cost(&g, &[]), 0.0);
        assert_eq!(mst_cost(&g, &[1]), 0.0);
    }

    #[test]
    fn mst_of_unit_square() {
        let g = complete(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!(close(mst_cost(&g, &[0, 1, 2, 3]), 3.0));
        // Order of the node list does not change the tree cost.
        assert!(close(mst_cost(&g, &[2, 0, 3, 1]), 3.0));
    }

    #[test]
    fn mst_picks_short_edges_over_direct_ones() {
        // 0 --3-- 1 --4-- 2, with 0-2 = 5 never used.
        let g = complete(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
        assert!(close(mst_cost(&g, &[0, 1, 2]), 7.0));
    }

    #[test]
    fn mst_is_non_negative() {
        let g = complete(&[(5.0, 2.0), (1.0, 9.0), (7.0, 7.0), (3.0, 3.0), (8.0, 0.5)]);
        let all: Vec<usize> = (0..g.len()).collect();
        for n in 0..=all.len() {
            assert!(mst_cost(&g, &all[..n]) >= 0.0);
        }
    }

    #[test]
    fn tour_bound_is_zero_when_done() {
        let g = complete(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(tour_bound(&g, 0, 1, &[]), 0.0);
    }

    #[test]
    fn tour_bound_sums_its_three_parts() {
        // start 0 at origin, currently at 1, unvisited {2, 3} one unit apart.
        let g = complete(&[(0.0, 0.0), (10.0, 0.0), (10.0, 2.0), (11.0, 2.0)]);
        let expected = 1.0 + 2.0 + (10.0f64).hypot(2.0);
        assert!(close(tour_bound(&g, 0, 1, &[2, 3]), expected));
    }

    #[test]
    fn tour_bound_never_exceeds_true_completion() {
        let g = complete(&[(0.0, 0.0), (4.0, 1.0), (6.0, 5.0), (1.0, 6.0)]);
        // From path [0, 1], the only completions are 1-2-3-0 and 1-3-2-0.
        let via = |a: usize, b: usize| {
            g.distance(1, a) + g.distance(a, b) + g.distance(b, 0)
        };
        let best = via(2, 3).min(via(3, 2));
        assert!(tour_bound(&g, 0, 1, &[2, 3]) <= best + 1e-9);
    }

    #[test]
    fn straight_line_is_distance() {
        let g = complete(&[(0.0, 0.0), (3.0, 4.0)]);
        assert_eq!(straight_line(&g, 0, 1), 5.0);
    }
}
