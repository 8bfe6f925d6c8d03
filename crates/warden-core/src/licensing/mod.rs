//! Licensing & feature gating — license-state distribution primitive.
//!
//! A central registry holds the effective license status and pushes it
//! to every registered licensee, synchronously, whenever it changes.
//! Each licensee derives its own gating decision from the last status
//! it was given; the registry never inspects feature-specific logic.
//!
//! ## Components
//! - **status** — operation mode + license state value object
//! - **licensee** — capability implemented by gated feature modules
//! - **registry** — the authority: registration and broadcast
//! - **testing** — in-tree doubles for registry consumers

pub mod licensee;
pub mod registry;
pub mod status;
pub mod testing;

pub use licensee::Licensee;
pub use registry::LicenseeRegistry;
pub use status::{LicenseState, LicenseStatus, OperationMode};
