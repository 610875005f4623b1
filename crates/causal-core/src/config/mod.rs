//! Configuration system. TOML-based, layered: env > file > defaults.

pub mod causal_config;
pub mod defaults;
pub mod extension_config;
pub mod intervention_config;
pub mod observability_config;

pub use causal_config::CausalConfig;
pub use extension_config::ExtensionConfig;
pub use intervention_config::{InterventionConfig, SelectionPolicy};
pub use observability_config::ObservabilityConfig;
