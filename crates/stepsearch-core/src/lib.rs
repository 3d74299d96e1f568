//! **stepsearch-core**: geometry primitives shared by the stepsearch crates.
//!
//! Lattice graphs are addressed by integer [`Point`]s inside a [`Range`];
//! point-set graphs place their nodes at continuous [`Vec2`] positions.

pub mod geom;
pub mod vec2;

pub use geom::{Point, Range, RangeIter};
pub use vec2::Vec2;
