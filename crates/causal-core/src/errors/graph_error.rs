//! DAG container errors.

use super::error_code::{self, ErrorCode};
use crate::Node;

/// Errors raised by [`crate::Dag`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The arc set contains a directed cycle. `path` lists the nodes of one cycle.
    #[error("cycle detected in DAG: {path:?}")]
    Cycle { path: Vec<Node> },

    #[error("unknown node: {node}")]
    UnknownNode { node: Node },

    #[error("arc {from} -> {to} not found")]
    ArcNotFound { from: Node, to: Node },

    #[error("self-loop on node {node}")]
    SelfLoop { node: Node },

    #[error("invalid adjacency matrix: {reason}")]
    InvalidMatrix { reason: String },
}

impl ErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Cycle { .. } => error_code::CYCLE_DETECTED,
            Self::UnknownNode { .. } => error_code::UNKNOWN_NODE,
            Self::ArcNotFound { .. } => error_code::ARC_NOT_FOUND,
            Self::SelfLoop { .. } => error_code::SELF_LOOP,
            Self::InvalidMatrix { .. } => error_code::INVALID_MATRIX,
        }
    }
}
