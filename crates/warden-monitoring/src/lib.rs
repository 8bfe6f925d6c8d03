//! # warden-monitoring
//!
//! Reference feature module for the Warden licensing runtime: a
//! monitoring/collection subsystem that derives its own gating flag
//! from pushed license statuses and stops buffering samples the moment
//! the license is disabled.

pub mod collector;
pub mod config;
pub mod licensee;

pub use collector::{CollectionEvent, CollectionEventKind, MetricsCollector};
pub use config::CollectorConfig;
pub use licensee::MonitoringLicensee;
