use serde::{Deserialize, Serialize};

use super::defaults;

/// Consistent-extension enumeration configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Stop enumerating after this many distinct DAGs. `None` = unlimited.
    pub max_extensions: Option<usize>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            max_extensions: defaults::DEFAULT_MAX_EXTENSIONS,
        }
    }
}
