//! Weighted proximity graph over a 2D point set.

use stepsearch_core::Vec2;

use crate::traits::{Graph, WeightedGraph};

/// Nodes are indices into a point set; edge cost is the Euclidean distance
/// between the two points.
///
/// Adjacency is fixed at construction. Tour problems ignore it and treat the
/// point set as a complete graph (see [`ProximityGraph::distance`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProximityGraph {
    points: Vec<Vec2>,
    adj: Vec<Vec<usize>>,
}

impl ProximityGraph {
    /// Build the symmetric k-nearest-neighbor graph of `points`.
    ///
    /// For each node the other nodes are ranked by distance (ties by index)
    /// and the first `k` are linked in both directions. Neighbor lists keep
    /// insertion order and never hold duplicates.
    pub fn k_nearest(points: Vec<Vec2>, k: usize) -> Self {
        let n = points.len();
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut ranked: Vec<(usize, f64)> = Vec::with_capacity(n);

        for i in 0..n {
            ranked.clear();
            ranked.extend(
                (0..n)
                    .filter(|&j| j != i)
                    .map(|j| (j, points[i].distance(points[j]))),
            );
            ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

            for &(j, _) in ranked.iter().take(k) {
                link(&mut adj, i, j);
            }
        }

        log::debug!("built {k}-nearest proximity graph over {n} points");
        Self { points, adj }
    }

    /// Build a graph with exactly the given undirected edges.
    ///
    /// Edges naming an index past the point set, and self-loops, are ignored.
    pub fn with_edges(points: Vec<Vec2>, edges: &[(usize, usize)]) -> Self {
        let n = points.len();
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(a, b) in edges {
            if a < n && b < n && a != b {
                link(&mut adj, a, b);
            }
        }
        Self { points, adj }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All node positions, indexed by node.
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Adjacency list of node `i`.
    #[inline]
    pub fn adjacent(&self, i: usize) -> &[usize] {
        &self.adj[i]
    }

    /// Every undirected edge once, as `(low, high)` index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(i, ns)| ns.iter().filter(move |&&j| i < j).map(move |&j| (i, j)))
    }

    /// Straight-line distance between any two nodes, adjacent or not.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.points[a].distance(self.points[b])
    }
}

fn link(adj: &mut [Vec<usize>], a: usize, b: usize) {
    if !adj[a].contains(&b) {
        adj[a].push(b);
    }
    if !adj[b].contains(&a) {
        adj[b].push(a);
    }
}

impl Graph for ProximityGraph {
    type Node = usize;

    fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
        if let Some(ns) = self.adj.get(node) {
            buf.extend_from_slice(ns);
        }
    }

    fn contains(&self, node: usize) -> bool {
        node < self.points.len()
    }

    fn node_count(&self) -> usize {
        self.points.len()
    }
}

impl WeightedGraph for ProximityGraph {
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.distance(from, to)
    }
}
