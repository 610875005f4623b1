//! Top-level error for equivalence-class operations.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, GraphError, PdagError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EquivalenceError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("PDAG error: {0}")]
    Pdag(#[from] PdagError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A supplied CPDAG does not share the skeleton of the DAG it should describe.
    #[error("CPDAG skeleton does not match the DAG: {details}")]
    SkeletonMismatch { details: String },
}

impl ErrorCode for EquivalenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Pdag(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::SkeletonMismatch { .. } => error_code::SKELETON_MISMATCH,
        }
    }
}

pub type EquivalenceResult<T> = Result<T, EquivalenceError>;
