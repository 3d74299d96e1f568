//! In-progress search paths.

use std::collections::HashSet;
use std::hash::Hash;

/// An ordered, duplicate-free path from the start node plus its accumulated
/// cost.
///
/// Membership is mirrored in a set so [`contains`](Self::contains) is O(1).
#[derive(Debug, Clone)]
pub struct Candidate<N> {
    path: Vec<N>,
    members: HashSet<N>,
    cost: f64,
}

impl<N: Copy + Eq + Hash> Candidate<N> {
    /// A path holding only `start`, at zero cost.
    pub fn root(start: N) -> Self {
        Self {
            path: vec![start],
            members: HashSet::from([start]),
            cost: 0.0,
        }
    }

    /// Child path that steps to `next` at `step_cost`, or `None` if `next`
    /// is already on the path.
    pub fn extend(&self, next: N, step_cost: f64) -> Option<Self> {
        if self.members.contains(&next) {
            return None;
        }
        let mut child = self.clone();
        child.path.push(next);
        child.members.insert(next);
        child.cost += step_cost;
        Some(child)
    }

    /// Add a cost that is not tied to a new node (a tour's closing edge).
    #[inline]
    pub fn add_cost(&mut self, extra: f64) {
        self.cost += extra;
    }

    /// The node the path currently ends at.
    #[inline]
    pub fn last(&self) -> N {
        // A candidate always holds at least its root.
        self.path[self.path.len() - 1]
    }

    /// Whether `node` is on the path.
    #[inline]
    pub fn contains(&self, node: N) -> bool {
        self.members.contains(&node)
    }

    /// Number of nodes on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always false; a candidate holds at least its start node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Accumulated cost.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The nodes in visiting order.
    #[inline]
    pub fn path(&self) -> &[N] {
        &self.path
    }

    /// Consume the candidate, keeping the node sequence.
    #[inline]
    pub fn into_path(self) -> Vec<N> {
        self.path
    }
}
