//! Error types for the Warden licensing runtime.
//!
//! Broadcast failures are deliberately absent from this module: a
//! licensee that fails during notification is logged and skipped, never
//! surfaced as an error to the caller of `set_status`.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::WardenErrorCode;
