//! Random inputs for the search engine: walled mazes and scattered points.

pub mod maze;
pub mod points;

pub use maze::{Maze, MazeConfig, MazeGen};
pub use points::{PointGen, ScatterConfig};
