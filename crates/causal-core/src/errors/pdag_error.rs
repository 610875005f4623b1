//! PDAG errors.

use super::error_code::{self, ErrorCode};
use crate::Node;

/// Errors raised by PDAG construction, mutation, and extension.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PdagError {
    /// A mutator was asked to replace or remove an arc that does not exist.
    #[error("invalid arc: {from} -> {to} is not an arc of the PDAG")]
    InvalidArc { from: Node, to: Node },

    /// A mutator was asked to orient or remove an edge that does not exist.
    #[error("invalid edge: {a} - {b} is not an undirected edge of the PDAG")]
    InvalidEdge { a: Node, b: Node },

    /// No DAG extension exists. `remaining` are the nodes that could not be eliminated.
    #[error("PDAG has no consistent DAG extension; stuck on nodes {remaining:?}")]
    Inconsistent { remaining: Vec<Node> },

    /// A node pair is present more than once (as arc and edge, or as opposing arcs).
    #[error("conflicting adjacency between {a} and {b}")]
    Conflict { a: Node, b: Node },

    #[error("self-loop on node {node}")]
    SelfLoop { node: Node },

    #[error("unknown node: {node}")]
    UnknownNode { node: Node },

    #[error("PDAG still has {edges} undirected edge(s)")]
    NotFullyDirected { edges: usize },
}

impl ErrorCode for PdagError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArc { .. } => error_code::INVALID_ARC,
            Self::InvalidEdge { .. } => error_code::INVALID_EDGE,
            Self::Inconsistent { .. } => error_code::INCONSISTENT_PDAG,
            Self::Conflict { .. } => error_code::PDAG_CONFLICT,
            Self::SelfLoop { .. } => error_code::SELF_LOOP,
            Self::UnknownNode { .. } => error_code::UNKNOWN_NODE,
            Self::NotFullyDirected { .. } => error_code::NOT_FULLY_DIRECTED,
        }
    }
}
