use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::SearchError;
use crate::reconstruct;
use crate::strategy::{Progress, Solution, Strategy};
use crate::traits::Graph;

/// Breadth-first search: shortest path by edge count.
///
/// Nodes are marked visited when enqueued, so each node enters the queue at
/// most once. A predecessor map recovers the path once the goal is dequeued.
pub struct Bfs<'g, G: Graph> {
    graph: &'g G,
    start: G::Node,
    goal: G::Node,
    queue: VecDeque<G::Node>,
    visited: HashSet<G::Node>,
    order: Vec<G::Node>,
    parents: HashMap<G::Node, G::Node>,
    // scratch buffer for neighbor queries
    nbuf: Vec<G::Node>,
}

impl<'g, G: Graph> Bfs<'g, G> {
    /// Seed a run from `start` towards `goal`.
    pub fn new(graph: &'g G, start: G::Node, goal: G::Node) -> Result<Self, SearchError> {
        graph.validate(&[start, goal])?;
        log::debug!("bfs: {start:?} -> {goal:?} over {} nodes", graph.node_count());
        Ok(Self {
            graph,
            start,
            goal,
            queue: VecDeque::from([start]),
            visited: HashSet::from([start]),
            order: vec![start],
            parents: HashMap::new(),
            nbuf: Vec::with_capacity(4),
        })
    }

    /// Whether `node` has been enqueued during this run.
    #[inline]
    pub fn is_visited(&self, node: G::Node) -> bool {
        self.visited.contains(&node)
    }

    /// Predecessor of `node` on its breadth-first tree, if it has one.
    #[inline]
    pub fn parent(&self, node: G::Node) -> Option<G::Node> {
        self.parents.get(&node).copied()
    }
}

impl<G: Graph> Strategy for Bfs<'_, G> {
    type Node = G::Node;

    fn name(&self) -> &'static str {
        "BFS"
    }

    fn step(&mut self) -> Progress<G::Node> {
        let Some(current) = self.queue.pop_front() else {
            return Progress::Done(Err(SearchError::NoPathFound));
        };

        if current == self.goal {
            return Progress::Done(
                reconstruct::from_parents(&self.parents, self.start, self.goal)
                    .map(|path| Solution {
                        cost: (path.len() - 1) as f64,
                        path,
                    })
                    .ok_or(SearchError::NoPathFound),
            );
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.graph.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            if self.visited.insert(n) {
                self.order.push(n);
                self.parents.insert(n, current);
                self.queue.push_back(n);
            }
        }

        self.nbuf = nbuf;
        Progress::Running
    }

    fn frontier(&self) -> Vec<Vec<G::Node>> {
        self.queue.iter().map(|&n| vec![n]).collect()
    }

    fn visited(&self) -> Vec<G::Node> {
        self.order.clone()
    }
}
