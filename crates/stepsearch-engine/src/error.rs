//! Failure kinds reported by graph construction and search runs.

use std::fmt;

/// Input graph or endpoint problems, detected before a run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The graph has no nodes at all.
    Empty,
    /// A start or goal node is not part of the graph (out of bounds, a wall,
    /// or an index past the node count).
    UnknownNode { node: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("graph has no nodes"),
            Self::UnknownNode { node } => write!(f, "node {node} is not part of the graph"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Why a search run stopped without a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier was exhausted before the goal (or a full tour) was reached.
    NoPathFound,
    /// The graph or endpoints were malformed.
    InvalidGraph(GraphError),
    /// A beam search was configured with width 0.
    InvalidBeamWidth,
    /// The scheduler's step budget ran out.
    StepLimit { steps: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPathFound => f.write_str("no path found"),
            Self::InvalidGraph(e) => write!(f, "invalid graph: {e}"),
            Self::InvalidBeamWidth => f.write_str("beam width must be at least 1"),
            Self::StepLimit { steps } => write!(f, "step limit reached after {steps} steps"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGraph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for SearchError {
    fn from(e: GraphError) -> Self {
        Self::InvalidGraph(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn messages() {
        assert_eq!(SearchError::NoPathFound.to_string(), "no path found");
        assert_eq!(
            SearchError::from(GraphError::Empty).to_string(),
            "invalid graph: graph has no nodes"
        );
        assert_eq!(
            SearchError::StepLimit { steps: 12 }.to_string(),
            "step limit reached after 12 steps"
        );
    }

    #[test]
    fn invalid_graph_exposes_source() {
        let e = SearchError::from(GraphError::UnknownNode { node: "7".into() });
        let src = e.source().map(|s| s.to_string());
        assert_eq!(src.as_deref(), Some("node 7 is not part of the graph"));
        assert!(SearchError::NoPathFound.source().is_none());
    }
}
