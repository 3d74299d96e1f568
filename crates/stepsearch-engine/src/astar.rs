//! A* over candidate paths.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::candidate::Candidate;
use crate::error::SearchError;
use crate::problem::Problem;
use crate::strategy::{Progress, Solution, Strategy};

/// Open-list entry ordered by `f`, ties broken by insertion order.
struct Entry {
    f: f64,
    seq: u64,
    cand: Candidate<usize>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest insertion among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search over a [`Problem`].
///
/// The open list is unbounded and ranked by `f = cost + estimate`. Each step
/// pops the lowest `f`; a complete candidate popped this way is optimal
/// because the estimate never overstates the remaining cost, so it ends the
/// run immediately. No pruning happens across candidates: several partial
/// paths to the same node may be open at once.
pub struct Astar<'g> {
    problem: Problem<'g>,
    open: BinaryHeap<Entry>,
    seq: u64,
    expanded: Vec<usize>,
    seen: HashSet<usize>,
    children: Vec<Candidate<usize>>,
}

impl<'g> Astar<'g> {
    /// Start a run with the problem's root candidate on the open list.
    pub fn new(problem: Problem<'g>) -> Self {
        log::debug!(
            "astar: start {}, goal {:?}",
            problem.start(),
            problem.goal()
        );
        let mut s = Self {
            problem,
            open: BinaryHeap::new(),
            seq: 0,
            expanded: Vec::new(),
            seen: HashSet::new(),
            children: Vec::new(),
        };
        s.push(problem.root());
        s
    }

    /// Number of candidates on the open list.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    fn push(&mut self, cand: Candidate<usize>) {
        let f = self.problem.rank(&cand);
        self.open.push(Entry {
            f,
            seq: self.seq,
            cand,
        });
        self.seq += 1;
    }
}

impl Strategy for Astar<'_> {
    type Node = usize;

    fn name(&self) -> &'static str {
        "A*"
    }

    fn step(&mut self) -> Progress<usize> {
        let Some(Entry { cand, .. }) = self.open.pop() else {
            return Progress::Done(Err(SearchError::NoPathFound));
        };

        if self.problem.is_complete(&cand) {
            return Progress::Done(Ok(Solution {
                cost: cand.cost(),
                path: cand.into_path(),
            }));
        }

        if self.seen.insert(cand.last()) {
            self.expanded.push(cand.last());
        }

        let mut children = std::mem::take(&mut self.children);
        children.clear();
        self.problem.successors(&cand, &mut children);
        for child in children.drain(..) {
            self.push(child);
        }
        self.children = children;

        log::trace!("astar: {} open", self.open.len());
        Progress::Running
    }

    fn frontier(&self) -> Vec<Vec<usize>> {
        let mut entries: Vec<&Entry> = self.open.iter().collect();
        // Greatest first is pop order.
        entries.sort_by(|a, b| b.cmp(a));
        entries.iter().map(|e| e.cand.path().to_vec()).collect()
    }

    fn visited(&self) -> Vec<usize> {
        self.expanded.clone()
    }
}
