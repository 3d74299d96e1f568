//! The stepping contract shared by every search algorithm, and the tagged
//! unions used to pick one at runtime.

use std::fmt::Debug;
use std::hash::Hash;

use crate::astar::Astar;
use crate::beam::BeamSearch;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::error::SearchError;
use crate::problem::Problem;
use crate::traits::Graph;

/// A finished path and its total cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<N> {
    pub path: Vec<N>,
    pub cost: f64,
}

/// Result of advancing a strategy by one step.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress<N> {
    /// More work remains.
    Running,
    /// The run reached a terminal state.
    Done(Result<Solution<N>, SearchError>),
}

/// A search algorithm as an explicit state machine.
///
/// All run state (frontier, visited marks, best solution) is owned by the
/// implementor and created by its constructor. [`step`](Self::step) performs
/// exactly one pop/expand cycle. Callers must not call `step` again after it
/// returned [`Progress::Done`]; [`Scheduler`](crate::Scheduler) enforces this.
pub trait Strategy {
    /// Node identifier of the searched graph.
    type Node: Copy + Eq + Hash + Debug;

    /// Short algorithm name for logs and reports.
    fn name(&self) -> &'static str;

    /// Advance by one pop/expand cycle.
    fn step(&mut self) -> Progress<Self::Node>;

    /// Node sequences currently awaiting expansion, in the order they would
    /// be taken.
    fn frontier(&self) -> Vec<Vec<Self::Node>>;

    /// Nodes marked or expanded so far, in the order that happened.
    fn visited(&self) -> Vec<Self::Node>;
}

// ---------------------------------------------------------------------------
// Uninformed
// ---------------------------------------------------------------------------

/// Either uninformed traversal over any [`Graph`].
pub enum Uninformed<'g, G: Graph> {
    Bfs(Bfs<'g, G>),
    Dfs(Dfs<'g, G>),
}

impl<'g, G: Graph> Uninformed<'g, G> {
    /// Breadth-first search from `start` to `goal`.
    pub fn bfs(graph: &'g G, start: G::Node, goal: G::Node) -> Result<Self, SearchError> {
        Bfs::new(graph, start, goal).map(Self::Bfs)
    }

    /// Depth-first search from `start` to `goal`.
    pub fn dfs(graph: &'g G, start: G::Node, goal: G::Node) -> Result<Self, SearchError> {
        Dfs::new(graph, start, goal).map(Self::Dfs)
    }
}

impl<G: Graph> Strategy for Uninformed<'_, G> {
    type Node = G::Node;

    fn name(&self) -> &'static str {
        match self {
            Self::Bfs(s) => s.name(),
            Self::Dfs(s) => s.name(),
        }
    }

    fn step(&mut self) -> Progress<G::Node> {
        match self {
            Self::Bfs(s) => s.step(),
            Self::Dfs(s) => s.step(),
        }
    }

    fn frontier(&self) -> Vec<Vec<G::Node>> {
        match self {
            Self::Bfs(s) => s.frontier(),
            Self::Dfs(s) => s.frontier(),
        }
    }

    fn visited(&self) -> Vec<G::Node> {
        match self {
            Self::Bfs(s) => s.visited(),
            Self::Dfs(s) => s.visited(),
        }
    }
}

// ---------------------------------------------------------------------------
// Informed
// ---------------------------------------------------------------------------

/// Either best-first search over a [`Problem`].
pub enum Informed<'g> {
    Beam(BeamSearch<'g>),
    Astar(Astar<'g>),
}

impl<'g> Informed<'g> {
    /// Beam search keeping at most `width` candidates per step.
    pub fn beam(problem: Problem<'g>, width: usize) -> Result<Self, SearchError> {
        BeamSearch::new(problem, width).map(Self::Beam)
    }

    /// A* search.
    pub fn astar(problem: Problem<'g>) -> Self {
        Self::Astar(Astar::new(problem))
    }
}

impl Strategy for Informed<'_> {
    type Node = usize;

    fn name(&self) -> &'static str {
        match self {
            Self::Beam(s) => s.name(),
            Self::Astar(s) => s.name(),
        }
    }

    fn step(&mut self) -> Progress<usize> {
        match self {
            Self::Beam(s) => s.step(),
            Self::Astar(s) => s.step(),
        }
    }

    fn frontier(&self) -> Vec<Vec<usize>> {
        match self {
            Self::Beam(s) => s.frontier(),
            Self::Astar(s) => s.frontier(),
        }
    }

    fn visited(&self) -> Vec<usize> {
        match self {
            Self::Beam(s) => s.visited(),
            Self::Astar(s) => s.visited(),
        }
    }
}
