//! Walled rectangular lattice graph.

use std::fmt;

use stepsearch_core::{Point, Range};

use crate::traits::{Graph, WeightedGraph};

/// Character for a wall cell in the textual grid format.
pub const WALL: char = '#';
/// Character for an open cell in the textual grid format.
pub const OPEN: char = '.';

/// A bounded `rows × cols` lattice where each cell is either open or a wall.
///
/// Neighbors are the in-bounds, open cells directly up, down, left and right
/// of a cell, in that order. Walls never appear as neighbors and every
/// traversed edge costs 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    rng: Range,
    walls: Vec<bool>,
    open: usize,
}

impl GridGraph {
    /// Create a grid with every cell open.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rng = Range::lattice(rows, cols);
        Self {
            rng,
            walls: vec![false; rng.len()],
            open: rng.len(),
        }
    }

    /// Create a grid, marking as wall every cell for which `wall` is true.
    pub fn from_fn(rows: i32, cols: i32, mut wall: impl FnMut(Point) -> bool) -> Self {
        let mut g = Self::new(rows, cols);
        for p in g.rng.iter() {
            if wall(p) {
                g.set_wall(p, true);
            }
        }
        g
    }

    /// Parse a grid from lines of [`WALL`] and [`OPEN`] characters.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if let Some(line) = lines.iter().position(|l| l.chars().count() != cols) {
            return Err(GridError::InconsistentWidth {
                line,
                expected: cols,
            });
        }

        let mut g = Self::new(lines.len() as i32, cols as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    WALL => g.set_wall(p, true),
                    OPEN => {}
                    _ => return Err(GridError::InvalidRune { ch, pos: p }),
                }
            }
        }
        Ok(g)
    }

    /// The lattice rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rng.height()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.rng.width()
    }

    /// Whether `p` is a wall. Out-of-bounds cells count as walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.rng.index(p).is_none_or(|i| self.walls[i])
    }

    /// Whether `p` is an in-bounds open cell.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        !self.is_wall(p)
    }

    /// Mark or clear a wall. Does nothing if `p` is out of bounds.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        let Some(i) = self.rng.index(p) else {
            return;
        };
        if self.walls[i] != wall {
            self.walls[i] = wall;
            if wall {
                self.open -= 1;
            } else {
                self.open += 1;
            }
        }
    }

    /// Render each row as text, letting `overlay` replace the character of
    /// any cell it returns `Some` for.
    pub fn render_rows(&self, overlay: impl Fn(Point) -> Option<char>) -> Vec<String> {
        (self.rng.min.y..self.rng.max.y)
            .map(|y| {
                (self.rng.min.x..self.rng.max.x)
                    .map(|x| {
                        let p = Point::new(x, y);
                        overlay(p).unwrap_or(if self.is_wall(p) { WALL } else { OPEN })
                    })
                    .collect()
            })
            .collect()
    }
}

impl Graph for GridGraph {
    type Node = Point;

    fn neighbors(&self, node: Point, buf: &mut Vec<Point>) {
        buf.extend(node.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }

    fn contains(&self, node: Point) -> bool {
        self.passable(node)
    }

    fn node_count(&self) -> usize {
        self.open
    }
}

impl WeightedGraph for GridGraph {
    fn cost(&self, _from: Point, _to: Point) -> f64 {
        1.0
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_rows(|_| None).join("\n"))
    }
}

/// Errors that can occur when parsing a textual grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Line `line` does not have the width of the first line.
    InconsistentWidth { line: usize, expected: usize },
    /// A character other than [`WALL`] or [`OPEN`] was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth { line, expected } => {
                write!(f, "grid: line {line} is not {expected} cells wide")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
