use std::collections::HashSet;

use crate::candidate::Candidate;
use crate::error::SearchError;
use crate::strategy::{Progress, Solution, Strategy};
use crate::traits::Graph;

/// Depth-first search: the first path found in stack order.
///
/// Each stack entry carries its own path because stack order does not leave
/// a single consistent predecessor per node. Nodes are marked visited when
/// pushed. Neighbors are pushed in reverse so the first-listed neighbor is
/// explored first. Path cost is the number of edges.
pub struct Dfs<'g, G: Graph> {
    graph: &'g G,
    goal: G::Node,
    stack: Vec<Candidate<G::Node>>,
    visited: HashSet<G::Node>,
    order: Vec<G::Node>,
    nbuf: Vec<G::Node>,
}

impl<'g, G: Graph> Dfs<'g, G> {
    /// Seed a run from `start` towards `goal`.
    pub fn new(graph: &'g G, start: G::Node, goal: G::Node) -> Result<Self, SearchError> {
        graph.validate(&[start, goal])?;
        log::debug!("dfs: {start:?} -> {goal:?} over {} nodes", graph.node_count());
        Ok(Self {
            graph,
            goal,
            stack: vec![Candidate::root(start)],
            visited: HashSet::from([start]),
            order: vec![start],
            nbuf: Vec::with_capacity(4),
        })
    }

    /// Whether `node` has been pushed during this run.
    #[inline]
    pub fn is_visited(&self, node: G::Node) -> bool {
        self.visited.contains(&node)
    }
}

impl<G: Graph> Strategy for Dfs<'_, G> {
    type Node = G::Node;

    fn name(&self) -> &'static str {
        "DFS"
    }

    fn step(&mut self) -> Progress<G::Node> {
        let Some(current) = self.stack.pop() else {
            return Progress::Done(Err(SearchError::NoPathFound));
        };

        if current.last() == self.goal {
            return Progress::Done(Ok(Solution {
                cost: current.cost(),
                path: current.into_path(),
            }));
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.graph.neighbors(current.last(), &mut nbuf);

        for &n in nbuf.iter().rev() {
            if !self.visited.insert(n) {
                continue;
            }
            self.order.push(n);
            if let Some(child) = current.extend(n, 1.0) {
                self.stack.push(child);
            }
        }

        self.nbuf = nbuf;
        Progress::Running
    }

    fn frontier(&self) -> Vec<Vec<G::Node>> {
        self.stack.iter().rev().map(|c| c.path().to_vec()).collect()
    }

    fn visited(&self) -> Vec<G::Node> {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::Bfs;
    use crate::grid::GridGraph;
    use crate::scheduler::Scheduler;
    use stepsearch_core::Point;

    const MAZE: &str = "\
#######
#.....#
#.###.#
#...#.#
###.#.#
#.....#
###.###";

    #[test]
    fn explores_first_listed_neighbor_first() {
        let g = GridGraph::new(3, 3);
        let mut dfs = Dfs::new(&g, Point::cell(1, 1), Point::cell(2, 2)).unwrap();
        assert_eq!(dfs.step(), Progress::Running);
        // Up is listed first, so it sits on top of the stack.
        let frontier = dfs.frontier();
        assert_eq!(frontier[0], vec![Point::cell(1, 1), Point::cell(0, 1)]);
        assert_eq!(frontier.len(), 4);
        assert!(dfs.is_visited(Point::cell(1, 2)));
    }

    #[test]
    fn finds_a_valid_path() {
        let g = GridGraph::parse(MAZE).unwrap();
        let dfs = Dfs::new(&g, Point::cell(1, 1), Point::cell(6, 3)).unwrap();
        let sol = Scheduler::new(dfs).run().unwrap();
        assert_eq!(sol.path.first(), Some(&Point::cell(1, 1)));
        assert_eq!(sol.path.last(), Some(&Point::cell(6, 3)));
        assert_eq!(sol.cost, (sol.path.len() - 1) as f64);
        let unique: HashSet<_> = sol.path.iter().collect();
        assert_eq!(unique.len(), sol.path.len());
        for w in sol.path.windows(2) {
            assert_eq!(w[0].manhattan(w[1]), 1);
        }
    }

    #[test]
    fn never_shorter_than_bfs() {
        let g = GridGraph::parse(MAZE).unwrap();
        let (s, t) = (Point::cell(1, 1), Point::cell(6, 3));
        let bfs = Scheduler::new(Bfs::new(&g, s, t).unwrap()).run().unwrap();
        let dfs = Scheduler::new(Dfs::new(&g, s, t).unwrap()).run().unwrap();
        assert!(bfs.path.len() <= dfs.path.len());

        let open = GridGraph::new(6, 6);
        let (s, t) = (Point::cell(0, 0), Point::cell(5, 5));
        let bfs = Scheduler::new(Bfs::new(&open, s, t).unwrap()).run().unwrap();
        let dfs = Scheduler::new(Dfs::new(&open, s, t).unwrap()).run().unwrap();
        assert_eq!(bfs.cost, 10.0);
        assert!(bfs.cost <= dfs.cost);
    }

    #[test]
    fn walled_in_goal_reports_no_path() {
        let g = GridGraph::parse("#####\n#...#\n#####\n#.#.#\n#####").unwrap();
        let dfs = Dfs::new(&g, Point::cell(1, 1), Point::cell(3, 3)).unwrap();
        assert_eq!(
            Scheduler::new(dfs).run().unwrap_err(),
            SearchError::NoPathFound
        );
    }
}
