//! Error handling: one error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod equivalence_error;
pub mod error_code;
pub mod graph_error;
pub mod pdag_error;

pub use config_error::ConfigError;
pub use equivalence_error::{EquivalenceError, EquivalenceResult};
pub use error_code::ErrorCode;
pub use graph_error::GraphError;
pub use pdag_error::PdagError;
