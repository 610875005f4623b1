use serde::{Deserialize, Serialize};

use super::defaults;

/// How a candidate intervention is scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Score against the known DAG: the exact number of undirected edges left.
    #[default]
    Oracle,
    /// Score by the largest remaining count over every DAG in the equivalence class.
    WorstCase,
    /// Score by the mean remaining count over every DAG in the equivalence class.
    Expected,
}

impl SelectionPolicy {
    pub const ALL: [SelectionPolicy; 3] = [Self::Oracle, Self::WorstCase, Self::Expected];

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "oracle" => Some(Self::Oracle),
            "worst_case" => Some(Self::WorstCase),
            "expected" => Some(Self::Expected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::WorstCase => "worst_case",
            Self::Expected => "expected",
        }
    }
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intervention selection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterventionConfig {
    /// Scoring policy for candidate nodes.
    pub policy: SelectionPolicy,
    /// Evaluate candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for InterventionConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::from_str_name(defaults::DEFAULT_SELECTION_POLICY)
                .unwrap_or_default(),
            parallel: defaults::DEFAULT_PARALLEL_SELECTION,
        }
    }
}
