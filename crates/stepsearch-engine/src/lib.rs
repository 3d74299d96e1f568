//! Incremental graph search with observable intermediate state.
//!
//! Every algorithm is an explicit state machine advanced one pop/expand cycle
//! at a time, so a caller can render the frontier between steps, pace the
//! run however it likes, or abandon it by simply dropping it:
//!
//! - **BFS** and **DFS** ([`Uninformed`]) over any [`Graph`], typically a
//!   walled [`GridGraph`]
//! - **Beam search** and **A\*** ([`Informed`]) over a [`ProximityGraph`],
//!   either point-to-point or as tour construction ([`Problem`])
//!
//! [`Scheduler`] wraps a strategy behind a uniform
//! `step() -> Running | Success | Failure` contract.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | BFS, DFS |
//! | [`WeightedGraph`] : [`Graph`] | path costs ([`reconstruct::path_cost`]) |
//! | [`Strategy`] | [`Scheduler`] |

mod astar;
mod beam;
mod bfs;
mod candidate;
mod dfs;
mod error;
mod grid;
pub mod heuristic;
mod problem;
mod proximity;
pub mod reconstruct;
mod scheduler;
mod strategy;
mod traits;

pub use astar::Astar;
pub use beam::{BeamSearch, DEFAULT_BEAM_WIDTH};
pub use bfs::Bfs;
pub use candidate::Candidate;
pub use dfs::Dfs;
pub use error::{GraphError, SearchError};
pub use grid::{GridError, GridGraph, OPEN, WALL};
pub use problem::{Goal, Problem};
pub use proximity::ProximityGraph;
pub use scheduler::{Scheduler, SchedulerConfig, Snapshot, Status};
pub use strategy::{Informed, Progress, Solution, Strategy, Uninformed};
pub use traits::{Graph, WeightedGraph};
