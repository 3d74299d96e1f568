use std::fmt::Debug;
use std::hash::Hash;

use crate::error::GraphError;

/// Minimal search interface: provides node identity and neighbor enumeration.
pub trait Graph {
    /// Opaque node identifier.
    type Node: Copy + Eq + Hash + Debug;

    /// Append neighbors of `node` into `buf`, in the graph's canonical order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<Self::Node>);

    /// Whether `node` is a traversable node of this graph.
    fn contains(&self, node: Self::Node) -> bool;

    /// Number of traversable nodes.
    fn node_count(&self) -> usize;

    /// Check that the graph is non-empty and that every node in `nodes`
    /// belongs to it.
    fn validate(&self, nodes: &[Self::Node]) -> Result<(), GraphError> {
        if self.node_count() == 0 {
            return Err(GraphError::Empty);
        }
        match nodes.iter().find(|&&n| !self.contains(n)) {
            Some(n) => Err(GraphError::UnknownNode {
                node: format!("{n:?}"),
            }),
            None => Ok(()),
        }
    }
}

/// Graph with weighted (non-negative cost) edges.
pub trait WeightedGraph: Graph {
    /// Cost of moving from `from` to `to`.
    fn cost(&self, from: Self::Node, to: Self::Node) -> f64;
}
