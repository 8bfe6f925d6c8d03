//! # warden-core
//!
//! Foundation crate for the Warden licensing runtime.
//! Defines the license status value, the `Licensee` capability, the
//! registry that broadcasts status changes to every registered
//! licensee, plus config, errors, and tracing bootstrap.
//! Feature modules depend on this and nothing else.

pub mod config;
pub mod errors;
pub mod licensing;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::WardenConfig;
pub use errors::error_code::WardenErrorCode;
pub use errors::ConfigError;
pub use licensing::licensee::Licensee;
pub use licensing::registry::LicenseeRegistry;
pub use licensing::status::{LicenseState, LicenseStatus, OperationMode};
