//! Recovering finished paths.
//!
//! Breadth-first search stores one predecessor per node and rebuilds the path
//! here. The candidate-based strategies carry their path with them and only
//! need [`Candidate::into_path`](crate::Candidate::into_path).

use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::WeightedGraph;

/// Walk predecessor links from `goal` back to `start` and return the path in
/// start-to-goal order. Returns `None` if the chain breaks before `start`.
pub fn from_parents<N: Copy + Eq + Hash>(
    parents: &HashMap<N, N>,
    start: N,
    goal: N,
) -> Option<Vec<N>> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = *parents.get(&cur)?;
        path.push(cur);
        // A cycle in the links would otherwise never terminate.
        if path.len() > parents.len() + 1 {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// Sum of edge costs along `path`.
pub fn path_cost<G: WeightedGraph>(graph: &G, path: &[G::Node]) -> f64 {
    path.windows(2).map(|w| graph.cost(w[0], w[1])).sum()
}
