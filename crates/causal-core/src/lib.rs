//! # causal-core
//!
//! Foundation crate for the causal equivalence engine.
//! Defines the node id, the `Dag` container, errors, config, and tracing.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod graph;
pub mod tracing_setup;

/// Opaque, totally ordered node identifier.
pub type Node = usize;

// Re-export the most commonly used types at the crate root.
pub use config::{CausalConfig, SelectionPolicy};
pub use errors::{ConfigError, EquivalenceError, EquivalenceResult, ErrorCode, GraphError, PdagError};
pub use graph::structure::{pair, Pair, VStructure};
pub use graph::{Arc, Dag};
