//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to expose a stable code string that
/// callers can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CYCLE_DETECTED").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CYCLE_DETECTED: &str = "CYCLE_DETECTED";
pub const UNKNOWN_NODE: &str = "UNKNOWN_NODE";
pub const ARC_NOT_FOUND: &str = "ARC_NOT_FOUND";
pub const SELF_LOOP: &str = "SELF_LOOP";
pub const INVALID_MATRIX: &str = "INVALID_MATRIX";
pub const INVALID_ARC: &str = "INVALID_ARC";
pub const INVALID_EDGE: &str = "INVALID_EDGE";
pub const INCONSISTENT_PDAG: &str = "INCONSISTENT_PDAG";
pub const PDAG_CONFLICT: &str = "PDAG_CONFLICT";
pub const NOT_FULLY_DIRECTED: &str = "NOT_FULLY_DIRECTED";
pub const SKELETON_MISMATCH: &str = "SKELETON_MISMATCH";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
