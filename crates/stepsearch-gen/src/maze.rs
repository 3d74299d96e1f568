//! Random walled mazes.
//!
//! The outer ring is always wall except for a single exit in the middle of
//! the bottom row. Interior cells become walls independently with a fixed
//! probability, so a maze may or may not have a way out.

use rand::{Rng, RngExt};
use stepsearch_core::Point;
use stepsearch_engine::{Graph, GridGraph};

/// Maze generation parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    /// Chance (0.0–1.0) that an interior cell is a wall.
    pub wall_probability: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            wall_probability: 0.3,
        }
    }
}

/// A generated maze plus the endpoints a solver should use.
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: GridGraph,
    /// Row 1, column 1, always open.
    pub start: Point,
    /// The exit on the bottom border.
    pub goal: Point,
}

/// Maze generator driven by `rng`.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the given configuration.
    pub fn new(config: MazeConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate a fresh maze.
    ///
    /// Grids smaller than 3×3 have no interior; they come back fully open
    /// apart from the border.
    pub fn generate(&mut self) -> Maze {
        let MazeConfig {
            rows,
            cols,
            wall_probability,
        } = self.config;
        let rng = &mut self.rng;

        let mut grid = GridGraph::from_fn(rows, cols, |p| {
            grid_border(p, rows, cols) || rng.random::<f64>() < wall_probability
        });

        let start = Point::cell(1.min(rows - 1), 1.min(cols - 1));
        let goal = Point::cell(rows - 1, cols / 2);
        grid.set_wall(start, false);
        grid.set_wall(goal, false);

        log::debug!(
            "maze: {rows}x{cols}, {} open cells, exit at {goal}",
            grid.node_count()
        );
        Maze { grid, start, goal }
    }
}

#[inline]
fn grid_border(p: Point, rows: i32, cols: i32) -> bool {
    p.x == 0 || p.y == 0 || p.x == cols - 1 || p.y == rows - 1
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_from_json() {
        let cfg: MazeConfig =
            serde_json::from_str(r#"{"rows":20,"cols":30,"wall_probability":0.25}"#).unwrap();
        assert_eq!(cfg.rows, 20);
        assert_eq!(cfg.cols, 30);
        assert_eq!(cfg.wall_probability, 0.25);
    }
}
