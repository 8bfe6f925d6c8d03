//! LicenseeRegistry — the single source of truth for license status.
//!
//! Current status and the licensee list live behind one lock so that
//! "update status + notify everyone" is a single critical section.
//! Every licensee therefore observes the same total order of
//! transitions, and a registration racing a broadcast resolves to
//! either the prior or the new status — never a dropped or doubled
//! delivery.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::config::LicenseConfig;
use crate::errors::error_code;
use crate::errors::ConfigError;

use super::licensee::Licensee;
use super::status::LicenseStatus;

struct RegistryInner {
    status: LicenseStatus,
    licensees: Vec<Arc<dyn Licensee>>,
}

/// Process-wide license authority. Constructed once and passed
/// explicitly to anything that needs it; shared via `Arc`.
pub struct LicenseeRegistry {
    inner: Mutex<RegistryInner>,
}

impl LicenseeRegistry {
    /// Create a registry holding `initial` as the current status.
    pub fn new(initial: LicenseStatus) -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                status: initial,
                licensees: Vec::new(),
            }),
        }
    }

    /// Create a registry from the license section of the config file.
    pub fn from_config(config: &LicenseConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.initial_status()?))
    }

    /// Register a licensee and immediately push the current status to
    /// it. Registration is never silent: by the time this returns, the
    /// licensee has observed exactly one status.
    pub fn register(&self, licensee: Arc<dyn Licensee>) {
        let mut inner = self.inner.lock().unwrap();
        let status = inner.status;
        inner.licensees.push(licensee.clone());
        debug!(
            licensee = licensee.id(),
            state = status.state().as_str(),
            "licensee registered"
        );
        Self::notify(&licensee, status);
    }

    /// Replace the current status and notify every registered licensee
    /// exactly once. Setting an equal status re-broadcasts; receivers
    /// treat that as a no-op.
    pub fn set_status(&self, status: LicenseStatus) {
        let mut inner = self.inner.lock().unwrap();
        inner.status = status;
        debug!(
            mode = status.mode().as_str(),
            state = status.state().as_str(),
            licensees = inner.licensees.len(),
            "broadcasting license status"
        );
        for licensee in &inner.licensees {
            Self::notify(licensee, status);
        }
    }

    /// The last status set, or the initial status if none has been.
    pub fn current_status(&self) -> LicenseStatus {
        self.inner.lock().unwrap().status
    }

    /// Number of registered licensees.
    pub fn licensee_count(&self) -> usize {
        self.inner.lock().unwrap().licensees.len()
    }

    /// Deliver one status to one licensee, isolating panics so a
    /// misbehaving licensee cannot prevent delivery to its peers.
    fn notify(licensee: &Arc<dyn Licensee>, status: LicenseStatus) {
        let result = panic::catch_unwind(AssertUnwindSafe(|| licensee.on_change(status)));
        if result.is_err() {
            warn!(
                code = error_code::LICENSEE_PANIC,
                licensee = licensee.id(),
                state = status.state().as_str(),
                "licensee panicked in on_change; continuing broadcast"
            );
        }
    }
}

impl Default for LicenseeRegistry {
    fn default() -> Self {
        Self::new(LicenseStatus::default())
    }
}
