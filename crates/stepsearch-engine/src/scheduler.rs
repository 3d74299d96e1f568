//! Driving a [`Strategy`] one cooperative step at a time.
//!
//! The scheduler never sleeps or spawns; the caller decides the pace (a tight
//! loop, one step per frame, one per timer tick). Dropping a scheduler
//! abandons the run.

use crate::error::SearchError;
use crate::strategy::{Progress, Solution, Strategy};

/// Scheduler configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerConfig {
    /// Fail with [`SearchError::StepLimit`] once this many steps ran without
    /// reaching a terminal state. `None` means no limit.
    pub max_steps: Option<usize>,
}

/// What a running search looks like after a step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<N> {
    /// Steps taken so far.
    pub step: usize,
    /// Node sequences awaiting expansion, in the order they would be taken.
    pub frontier: Vec<Vec<N>>,
    /// Nodes marked or expanded so far, in order.
    pub visited: Vec<N>,
}

/// Outcome of a single [`Scheduler::step`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Status<N> {
    Running(Snapshot<N>),
    Success(Solution<N>),
    Failure(SearchError),
}

impl<N> Status<N> {
    /// Whether the run is over.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running(_))
    }

    /// The solution, if this is a success.
    #[inline]
    pub fn solution(&self) -> Option<&Solution<N>> {
        match self {
            Self::Success(s) => Some(s),
            _ => None,
        }
    }
}

impl<N> From<Result<Solution<N>, SearchError>> for Status<N> {
    fn from(outcome: Result<Solution<N>, SearchError>) -> Self {
        match outcome {
            Ok(s) => Self::Success(s),
            Err(e) => Self::Failure(e),
        }
    }
}

/// Owns one search run and advances it on demand.
///
/// Once terminal, further [`step`](Self::step) calls return the same terminal
/// status without touching the strategy. As an [`Iterator`] it yields one
/// status per step and stops after the terminal one.
pub struct Scheduler<S: Strategy> {
    strategy: S,
    config: SchedulerConfig,
    steps: usize,
    outcome: Option<Result<Solution<S::Node>, SearchError>>,
    reported: bool,
}

impl<S: Strategy> Scheduler<S> {
    /// Wrap `strategy` with the default configuration.
    pub fn new(strategy: S) -> Self {
        Self::with_config(strategy, SchedulerConfig::default())
    }

    /// Wrap `strategy` with an explicit configuration.
    pub fn with_config(strategy: S, config: SchedulerConfig) -> Self {
        Self {
            strategy,
            config,
            steps: 0,
            outcome: None,
            reported: false,
        }
    }

    /// Advance by one step and report the resulting status.
    pub fn step(&mut self) -> Status<S::Node> {
        if self.advance() {
            Status::Running(self.snapshot())
        } else {
            self.terminal()
        }
    }

    /// Step until terminal without building snapshots.
    pub fn run(&mut self) -> Result<Solution<S::Node>, SearchError> {
        while self.advance() {}
        match self.terminal() {
            Status::Success(s) => Ok(s),
            Status::Failure(e) => Err(e),
            Status::Running(_) => Err(SearchError::NoPathFound),
        }
    }

    /// Current frontier and visited nodes, without stepping.
    pub fn snapshot(&self) -> Snapshot<S::Node> {
        Snapshot {
            step: self.steps,
            frontier: self.strategy.frontier(),
            visited: self.strategy.visited(),
        }
    }

    /// Steps taken so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether a terminal status has been reached.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Perform one step. Returns `true` while the run is still going.
    fn advance(&mut self) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        if self.config.max_steps.is_some_and(|max| self.steps >= max) {
            self.finish(Err(SearchError::StepLimit { steps: self.steps }));
            return false;
        }
        self.steps += 1;
        match self.strategy.step() {
            Progress::Running => true,
            Progress::Done(outcome) => {
                self.finish(outcome);
                false
            }
        }
    }

    fn finish(&mut self, outcome: Result<Solution<S::Node>, SearchError>) {
        match &outcome {
            Ok(s) => log::debug!(
                "{}: solved in {} steps, {} nodes, cost {:.3}",
                self.strategy.name(),
                self.steps,
                s.path.len(),
                s.cost
            ),
            Err(e) => log::debug!("{}: stopped after {} steps: {e}", self.strategy.name(), self.steps),
        }
        self.outcome = Some(outcome);
    }

    fn terminal(&self) -> Status<S::Node> {
        match &self.outcome {
            Some(outcome) => outcome.clone().into(),
            None => Status::Running(self.snapshot()),
        }
    }
}

impl<S: Strategy> Iterator for Scheduler<S> {
    type Item = Status<S::Node>;

    fn next(&mut self) -> Option<Status<S::Node>> {
        if self.reported {
            return None;
        }
        let status = self.step();
        self.reported = status.is_terminal();
        Some(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridGraph;
    use crate::problem::Problem;
    use crate::proximity::ProximityGraph;
    use crate::strategy::{Informed, Uninformed};
    use stepsearch_core::{Point, Vec2};

    fn corridor() -> GridGraph {
        GridGraph::parse("......").unwrap()
    }

    #[test]
    fn steps_until_terminal_then_repeats_it() {
        let g = corridor();
        let bfs = Uninformed::bfs(&g, Point::cell(0, 0), Point::cell(0, 5)).unwrap();
        let mut sched = Scheduler::new(bfs);
        let mut running = 0;
        let last = loop {
            match sched.step() {
                Status::Running(snap) => {
                    running += 1;
                    assert_eq!(snap.step, running);
                }
                other => break other,
            }
        };
        assert_eq!(running, 5);
        assert_eq!(sched.steps(), 6);
        assert!(sched.is_finished());
        let sol = last.solution().cloned().unwrap();
        assert_eq!(sol.cost, 5.0);
        assert_eq!(sched.step(), last);
        assert_eq!(sched.steps(), 6);
    }

    #[test]
    fn snapshot_reports_frontier_and_visited() {
        let g = corridor();
        let bfs = Uninformed::bfs(&g, Point::cell(0, 2), Point::cell(0, 5)).unwrap();
        let mut sched = Scheduler::new(bfs);
        let Status::Running(snap) = sched.step() else {
            panic!("expected a running status");
        };
        assert_eq!(snap.frontier, vec![vec![Point::cell(0, 1)], vec![Point::cell(0, 3)]]);
        assert_eq!(
            snap.visited,
            vec![Point::cell(0, 2), Point::cell(0, 1), Point::cell(0, 3)]
        );
    }

    #[test]
    fn step_limit_fails_the_run() {
        let g = corridor();
        let dfs = Uninformed::dfs(&g, Point::cell(0, 0), Point::cell(0, 5)).unwrap();
        let mut sched = Scheduler::with_config(dfs, SchedulerConfig { max_steps: Some(3) });
        assert_eq!(sched.run(), Err(SearchError::StepLimit { steps: 3 }));
        assert_eq!(
            sched.step(),
            Status::Failure(SearchError::StepLimit { steps: 3 })
        );
    }

    #[test]
    fn iterator_ends_after_terminal() {
        let g = corridor();
        let bfs = Uninformed::bfs(&g, Point::cell(0, 0), Point::cell(0, 2)).unwrap();
        let statuses: Vec<_> = Scheduler::new(bfs).collect();
        assert_eq!(statuses.len(), 3);
        assert!(statuses[..2].iter().all(|s| !s.is_terminal()));
        assert!(matches!(statuses[2], Status::Success(_)));
    }

    #[test]
    fn reruns_are_identical() {
        let pts = (0..9)
            .map(|i| Vec2::new((i * 37 % 11) as f64, (i * 53 % 13) as f64))
            .collect();
        let g = ProximityGraph::k_nearest(pts, 3);
        let run = |astar: bool| {
            let p = Problem::tour(&g, 0).unwrap();
            let s = if astar {
                Informed::astar(p)
            } else {
                Informed::beam(p, 3).unwrap()
            };
            let mut sched = Scheduler::new(s);
            let trace: Vec<_> = sched.by_ref().collect();
            (trace, sched.run())
        };
        for astar in [false, true] {
            let (trace_a, sol_a) = run(astar);
            let (trace_b, sol_b) = run(astar);
            assert_eq!(trace_a, trace_b);
            assert_eq!(sol_a, sol_b);
            assert!(sol_a.is_ok());
        }
    }

    #[test]
    fn grid_reruns_are_identical() {
        let g = GridGraph::parse(
            "\
.....#..
.##.....
..#.##.#
#...#...
..#...#.",
        )
        .unwrap();
        let (start, goal) = (Point::cell(0, 0), Point::cell(4, 7));
        let run = |dfs: bool| {
            let s = if dfs {
                Uninformed::dfs(&g, start, goal)
            } else {
                Uninformed::bfs(&g, start, goal)
            };
            Scheduler::new(s.unwrap()).collect::<Vec<_>>()
        };
        for dfs in [false, true] {
            let trace = run(dfs);
            assert_eq!(trace, run(dfs));
            assert!(matches!(trace.last(), Some(Status::Success(_))));
        }
    }

    #[test]
    fn informed_union_reports_names() {
        let g = ProximityGraph::with_edges(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)], &[(0, 1)]);
        let p = Problem::route(&g, 0, 1).unwrap();
        assert_eq!(Informed::astar(p).name(), "A*");
        assert_eq!(Informed::beam(p, 2).unwrap().name(), "Beam Search");
        let grid = corridor();
        let dfs = Uninformed::dfs(&grid, Point::cell(0, 0), Point::cell(0, 1)).unwrap();
        assert_eq!(dfs.name(), "DFS");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn snapshot_round_trip() {
        let snap = Snapshot {
            step: 4,
            frontier: vec![vec![0usize, 3], vec![0, 2]],
            visited: vec![0, 3],
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot<usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    #[test]
    fn config_round_trip() {
        let cfg = SchedulerConfig { max_steps: Some(40) };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SchedulerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
