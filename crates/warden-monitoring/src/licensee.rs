//! MonitoringLicensee — translates license status into a collection gate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tracing::debug;

use warden_core::licensing::licensee::Licensee;
use warden_core::licensing::registry::LicenseeRegistry;
use warden_core::licensing::status::LicenseStatus;

pub const LICENSEE_ID: &str = "monitoring";

/// The monitoring subsystem's licensee. Knows nothing about licensing
/// beyond the statuses it is handed; its scheduler and collector read
/// `collection_enabled()` from their own threads.
pub struct MonitoringLicensee {
    status: RwLock<LicenseStatus>,
    enabled: AtomicBool,
}

impl MonitoringLicensee {
    /// Construct and register with the authority in one step. The
    /// registry pushes the current status before returning, so the
    /// licensee is never observable without one.
    pub fn register(registry: &LicenseeRegistry) -> Arc<Self> {
        let licensee = Arc::new(Self {
            status: RwLock::new(LicenseStatus::default()),
            enabled: AtomicBool::new(false),
        });
        registry.register(licensee.clone());
        licensee
    }

    /// Whether collection is currently allowed. Lock-free; reflects the
    /// most recent `on_change` that has returned.
    pub fn collection_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// The last status applied.
    pub fn status(&self) -> LicenseStatus {
        *self.status.read().unwrap()
    }
}

impl Licensee for MonitoringLicensee {
    fn id(&self) -> &str {
        LICENSEE_ID
    }

    fn on_change(&self, status: LicenseStatus) {
        // Status first, then the flag; readers gate on the flag.
        *self.status.write().unwrap() = status;
        self.enabled
            .store(status.allows_operation(), Ordering::SeqCst);
        debug!(
            state = status.state().as_str(),
            enabled = status.allows_operation(),
            "monitoring collection gate updated"
        );
    }
}
