//! Problem modes for informed search over a [`ProximityGraph`].

use crate::candidate::Candidate;
use crate::error::SearchError;
use crate::heuristic;
use crate::proximity::ProximityGraph;
use crate::traits::Graph;

/// What counts as a finished candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// Reach this node along graph edges.
    Node(usize),
    /// Visit every node, then return to the start.
    Tour,
}

/// A start node, a [`Goal`] and the graph they live in.
///
/// Owns expansion, completion and the heuristic so that [`BeamSearch`] and
/// [`Astar`] stay independent of the problem mode.
///
/// [`BeamSearch`]: crate::BeamSearch
/// [`Astar`]: crate::Astar
#[derive(Debug, Clone, Copy)]
pub struct Problem<'g> {
    graph: &'g ProximityGraph,
    start: usize,
    goal: Goal,
}

impl<'g> Problem<'g> {
    /// Point-to-point search from `start` to `goal` along graph edges.
    pub fn route(graph: &'g ProximityGraph, start: usize, goal: usize) -> Result<Self, SearchError> {
        graph.validate(&[start, goal])?;
        Ok(Self {
            graph,
            start,
            goal: Goal::Node(goal),
        })
    }

    /// Tour construction from `start`, treating the graph as complete.
    pub fn tour(graph: &'g ProximityGraph, start: usize) -> Result<Self, SearchError> {
        graph.validate(&[start])?;
        Ok(Self {
            graph,
            start,
            goal: Goal::Tour,
        })
    }

    /// The graph being searched.
    #[inline]
    pub fn graph(&self) -> &'g ProximityGraph {
        self.graph
    }

    /// The start node.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The goal.
    #[inline]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// The initial candidate holding only the start node.
    pub fn root(&self) -> Candidate<usize> {
        let mut root = Candidate::root(self.start);
        self.close_if_complete(&mut root);
        root
    }

    /// Whether `c` is a finished solution.
    #[inline]
    pub fn is_complete(&self, c: &Candidate<usize>) -> bool {
        match self.goal {
            Goal::Node(goal) => c.last() == goal,
            Goal::Tour => c.len() == self.graph.len(),
        }
    }

    /// Append every child of `c` to `out`.
    ///
    /// Routes follow graph edges; tours may step to any node. Nodes already
    /// on the path are skipped. A tour child that visits the last remaining
    /// node has the closing edge back to the start included in its cost.
    pub fn successors(&self, c: &Candidate<usize>, out: &mut Vec<Candidate<usize>>) {
        let last = c.last();
        let mut push = |next: usize| {
            if let Some(mut child) = c.extend(next, self.graph.distance(last, next)) {
                self.close_if_complete(&mut child);
                out.push(child);
            }
        };
        match self.goal {
            Goal::Node(_) => self.graph.adjacent(last).iter().copied().for_each(&mut push),
            Goal::Tour => (0..self.graph.len()).for_each(&mut push),
        }
    }

    /// Admissible estimate of the cost still needed to complete `c`.
    pub fn estimate(&self, c: &Candidate<usize>) -> f64 {
        match self.goal {
            Goal::Node(goal) => heuristic::straight_line(self.graph, c.last(), goal),
            Goal::Tour => {
                let unvisited: Vec<usize> = (0..self.graph.len()).filter(|&i| !c.contains(i)).collect();
                heuristic::tour_bound(self.graph, self.start, c.last(), &unvisited)
            }
        }
    }

    /// Rank key used by A*: cost so far plus the admissible estimate.
    #[inline]
    pub fn rank(&self, c: &Candidate<usize>) -> f64 {
        c.cost() + self.estimate(c)
    }

    /// Rank key used by beam search, which only looks at the last node.
    ///
    /// Routes rank like A*. An open tour ranks by its cost plus the distance
    /// from its last node back to the start; a complete tour already carries
    /// that closing edge in its cost.
    pub fn beam_rank(&self, c: &Candidate<usize>) -> f64 {
        match self.goal {
            Goal::Node(_) => self.rank(c),
            Goal::Tour if self.is_complete(c) => c.cost(),
            Goal::Tour => c.cost() + self.graph.distance(c.last(), self.start),
        }
    }

    fn close_if_complete(&self, c: &mut Candidate<usize>) {
        if self.goal == Goal::Tour && self.is_complete(c) {
            c.add_cost(self.graph.distance(c.last(), self.start));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use stepsearch_core::Vec2;

    fn triangle() -> ProximityGraph {
        let pts = vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(3.0, 4.0)];
        ProximityGraph::with_edges(pts, &[(0, 1), (1, 2)])
    }

    #[test]
    fn route_follows_edges() {
        let g = triangle();
        let p = Problem::route(&g, 0, 2).unwrap();
        let mut out = Vec::new();
        p.successors(&p.root(), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path(), &[0, 1]);
        assert_eq!(out[0].cost(), 3.0);
        assert!(!p.is_complete(&out[0]));

        let mut next = Vec::new();
        p.successors(&out[0], &mut next);
        // 0 is already on the path.
        assert_eq!(next.len(), 1);
        assert!(p.is_complete(&next[0]));
        assert_eq!(next[0].cost(), 7.0);
    }

    #[test]
    fn route_estimate_is_straight_line() {
        let g = triangle();
        let p = Problem::route(&g, 0, 2).unwrap();
        assert_eq!(p.estimate(&p.root()), 5.0);
        assert_eq!(p.rank(&p.root()), 5.0);
    }

    #[test]
    fn tour_ignores_adjacency_and_closes() {
        let g = triangle();
        let p = Problem::tour(&g, 0).unwrap();
        let mut out = Vec::new();
        p.successors(&p.root(), &mut out);
        // Node 2 is not adjacent to 0 but is still a tour successor.
        let lasts: Vec<usize> = out.iter().map(|c| c.last()).collect();
        assert_eq!(lasts, vec![1, 2]);

        let mut done = Vec::new();
        p.successors(&out[0], &mut done);
        assert_eq!(done.len(), 1);
        assert!(p.is_complete(&done[0]));
        // 0 -> 1 -> 2 -> back to 0.
        assert_eq!(done[0].cost(), 3.0 + 4.0 + 5.0);
        assert_eq!(p.estimate(&done[0]), 0.0);
    }

    #[test]
    fn beam_rank_looks_back_to_start() {
        let g = triangle();
        let route = Problem::route(&g, 0, 2).unwrap();
        let root = route.root();
        assert_eq!(route.beam_rank(&root), route.rank(&root));

        let tour = Problem::tour(&g, 0).unwrap();
        let mut out = Vec::new();
        tour.successors(&tour.root(), &mut out);
        // [0, 2]: 5 out, 5 back.
        assert_eq!(tour.beam_rank(&out[1]), 10.0);
        let mut done = Vec::new();
        tour.successors(&out[0], &mut done);
        assert_eq!(tour.beam_rank(&done[0]), 12.0);
    }

    #[test]
    fn single_node_tour_root_is_complete() {
        let g = ProximityGraph::with_edges(vec![Vec2::new(1.0, 1.0)], &[]);
        let p = Problem::tour(&g, 0).unwrap();
        let root = p.root();
        assert!(p.is_complete(&root));
        assert_eq!(root.cost(), 0.0);
    }

    #[test]
    fn rejects_bad_endpoints() {
        let g = triangle();
        assert!(matches!(
            Problem::route(&g, 0, 3),
            Err(SearchError::InvalidGraph(GraphError::UnknownNode { .. }))
        ));
        let empty = ProximityGraph::with_edges(Vec::new(), &[]);
        assert_eq!(
            Problem::tour(&empty, 0).unwrap_err(),
            SearchError::InvalidGraph(GraphError::Empty)
        );
    }
}
