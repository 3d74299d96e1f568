//! Random point sets for route and tour problems.

use rand::{Rng, RngExt};
use stepsearch_core::Vec2;
use stepsearch_engine::ProximityGraph;

/// Point scattering parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScatterConfig {
    /// Number of points.
    pub count: usize,
    /// Lower corner of the square the points fall in, on both axes.
    pub origin: f64,
    /// Side length of that square.
    pub span: f64,
    /// Neighbors linked per point in the proximity graph.
    pub k: usize,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 40,
            origin: 50.0,
            span: 500.0,
            k: 3,
        }
    }
}

impl ScatterConfig {
    /// Defaults for tour instances: fewer cities, since tours search every
    /// ordering of them.
    pub fn tour() -> Self {
        Self {
            count: 8,
            ..Self::default()
        }
    }
}

/// Generator for scattered point sets driven by `rng`.
pub struct PointGen<R: Rng> {
    pub rng: R,
    pub config: ScatterConfig,
}

impl<R: Rng> PointGen<R> {
    /// Create a generator with the given configuration.
    pub fn new(config: ScatterConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// `count` points uniform in `[origin, origin + span)` on both axes.
    pub fn scatter(&mut self) -> Vec<Vec2> {
        let ScatterConfig {
            count,
            origin,
            span,
            ..
        } = self.config;
        (0..count)
            .map(|_| {
                let x = origin + self.rng.random::<f64>() * span;
                let y = origin + self.rng.random::<f64>() * span;
                Vec2::new(x, y)
            })
            .collect()
    }

    /// Scatter a fresh point set and link each point to its `k` nearest
    /// neighbors.
    pub fn proximity_graph(&mut self) -> ProximityGraph {
        let points = self.scatter();
        ProximityGraph::k_nearest(points, self.config.k)
    }
}
