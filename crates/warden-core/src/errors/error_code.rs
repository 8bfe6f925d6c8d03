//! Stable machine-readable codes attached to errors and warning logs.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_IO_ERROR: &str = "CONFIG_IO_ERROR";
pub const LICENSEE_PANIC: &str = "LICENSEE_PANIC";

/// Attach a stable code to an error type so log consumers can match on
/// it without parsing messages.
pub trait WardenErrorCode {
    fn error_code(&self) -> &'static str;
}
