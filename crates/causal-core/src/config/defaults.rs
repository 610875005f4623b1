// Single source of truth for all default values.

// --- Extension ---
/// `None` means "enumerate every consistent extension".
pub const DEFAULT_MAX_EXTENSIONS: Option<usize> = None;

// --- Intervention ---
pub const DEFAULT_SELECTION_POLICY: &str = "oracle";
pub const DEFAULT_PARALLEL_SELECTION: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// --- Environment ---
pub const ENV_MAX_EXTENSIONS: &str = "CAUSAL_MAX_EXTENSIONS";
pub const ENV_SELECTION_POLICY: &str = "CAUSAL_SELECTION_POLICY";
pub const ENV_LOG_LEVEL: &str = "CAUSAL_LOG_LEVEL";
