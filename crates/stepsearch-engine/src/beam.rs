//! Beam search: breadth-wise expansion pruned to a fixed width.

use std::collections::HashSet;

use crate::candidate::Candidate;
use crate::error::SearchError;
use crate::problem::Problem;
use crate::strategy::{Progress, Solution, Strategy};

/// Width used when the caller does not choose one.
pub const DEFAULT_BEAM_WIDTH: usize = 3;

/// Beam search over a [`Problem`].
///
/// Each step expands every candidate in the beam, ranks all children by
/// [`Problem::beam_rank`] and keeps the best `width`. Children that complete
/// are taken out of the beam and offered to the best-solution slot instead. The
/// run ends when the beam empties: with the best completed candidate if one
/// was seen, otherwise with [`SearchError::NoPathFound`].
///
/// This is an approximation. A child that ranks well early can push the
/// eventual optimum out of the beam for good.
pub struct BeamSearch<'g> {
    problem: Problem<'g>,
    width: usize,
    beam: Vec<Candidate<usize>>,
    best: Option<Candidate<usize>>,
    expanded: Vec<usize>,
    seen: HashSet<usize>,
    // scratch buffer for successor generation
    children: Vec<Candidate<usize>>,
}

impl<'g> BeamSearch<'g> {
    /// Start a run keeping at most `width` candidates per step.
    pub fn new(problem: Problem<'g>, width: usize) -> Result<Self, SearchError> {
        if width == 0 {
            return Err(SearchError::InvalidBeamWidth);
        }
        log::debug!(
            "beam: width {width}, start {}, goal {:?}",
            problem.start(),
            problem.goal()
        );
        Ok(Self {
            beam: vec![problem.root()],
            problem,
            width,
            best: None,
            expanded: Vec::new(),
            seen: HashSet::new(),
            children: Vec::new(),
        })
    }

    /// The configured beam width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Candidates currently in the beam, best first.
    #[inline]
    pub fn beam(&self) -> &[Candidate<usize>] {
        &self.beam
    }

    /// Cheapest completed candidate seen so far.
    #[inline]
    pub fn best(&self) -> Option<&Candidate<usize>> {
        self.best.as_ref()
    }

    fn offer(&mut self, c: Candidate<usize>) {
        if self.best.as_ref().is_none_or(|b| c.cost() < b.cost()) {
            log::debug!("beam: new best {:.3} via {:?}", c.cost(), c.path());
            self.best = Some(c);
        }
    }
}

impl Strategy for BeamSearch<'_> {
    type Node = usize;

    fn name(&self) -> &'static str {
        "Beam Search"
    }

    fn step(&mut self) -> Progress<usize> {
        if self.beam.is_empty() {
            return Progress::Done(match self.best.take() {
                Some(c) => Ok(Solution {
                    cost: c.cost(),
                    path: c.into_path(),
                }),
                None => Err(SearchError::NoPathFound),
            });
        }

        let mut children = std::mem::take(&mut self.children);
        let mut pool: Vec<(f64, Candidate<usize>)> = Vec::new();

        for cand in std::mem::take(&mut self.beam) {
            if self.problem.is_complete(&cand) {
                self.offer(cand);
                continue;
            }
            if self.seen.insert(cand.last()) {
                self.expanded.push(cand.last());
            }

            children.clear();
            self.problem.successors(&cand, &mut children);
            for child in children.drain(..) {
                if self.problem.is_complete(&child) {
                    self.offer(child);
                } else {
                    pool.push((self.problem.beam_rank(&child), child));
                }
            }
        }

        // Stable, so equal ranks keep generation order.
        pool.sort_by(|a, b| a.0.total_cmp(&b.0));
        pool.truncate(self.width);
        self.beam = pool.into_iter().map(|(_, c)| c).collect();
        self.children = children;

        log::trace!(
            "beam: {} candidates, best {:?}",
            self.beam.len(),
            self.best.as_ref().map(Candidate::cost)
        );
        Progress::Running
    }

    fn frontier(&self) -> Vec<Vec<usize>> {
        self.beam.iter().map(|c| c.path().to_vec()).collect()
    }

    fn visited(&self) -> Vec<usize> {
        self.expanded.clone()
    }
}
