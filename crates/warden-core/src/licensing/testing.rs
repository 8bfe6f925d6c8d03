//! In-tree test doubles for registry consumers.
//!
//! `MockLicenseService` stands in for the out-of-scope verification
//! collaborator that decides the effective license state. Its enable
//! behavior is an explicit strategy parameter so tests that want
//! `GracePeriod` ask for it instead of relying on hidden randomness.

use std::sync::{Arc, Mutex};

use super::licensee::Licensee;
use super::registry::LicenseeRegistry;
use super::status::{LicenseState, LicenseStatus, OperationMode};

/// Which operating state `MockLicenseService::enable` pushes.
/// Both gate features on; they differ only in the warning surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnableState {
    Enabled,
    GracePeriod,
}

impl EnableState {
    fn as_license_state(self) -> LicenseState {
        match self {
            Self::Enabled => LicenseState::Enabled,
            Self::GracePeriod => LicenseState::GracePeriod,
        }
    }
}

/// Stand-in for the external license verification service: flips the
/// registry between an operating state and `Disabled` on demand.
pub struct MockLicenseService {
    registry: Arc<LicenseeRegistry>,
    mode: OperationMode,
    enable_state: EnableState,
}

impl MockLicenseService {
    pub fn new(
        registry: Arc<LicenseeRegistry>,
        mode: OperationMode,
        enable_state: EnableState,
    ) -> Self {
        Self {
            registry,
            mode,
            enable_state,
        }
    }

    /// Push the configured operating state to all licensees.
    pub fn enable(&self) {
        self.registry.set_status(LicenseStatus::new(
            self.mode,
            self.enable_state.as_license_state(),
        ));
    }

    /// Push `Disabled` to all licensees.
    pub fn disable(&self) {
        self.registry
            .set_status(LicenseStatus::new(self.mode, LicenseState::Disabled));
    }

    pub fn registry(&self) -> &Arc<LicenseeRegistry> {
        &self.registry
    }
}

/// Records every status it receives, in order.
pub struct RecordingLicensee {
    id: String,
    received: Mutex<Vec<LicenseStatus>>,
}

impl RecordingLicensee {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// All statuses received so far, oldest first.
    pub fn received(&self) -> Vec<LicenseStatus> {
        self.received.lock().unwrap().clone()
    }

    /// The most recently received status, if any.
    pub fn last(&self) -> Option<LicenseStatus> {
        self.received.lock().unwrap().last().copied()
    }
}

impl Licensee for RecordingLicensee {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_change(&self, status: LicenseStatus) {
        self.received.lock().unwrap().push(status);
    }
}

/// Panics on every notification; used to verify broadcast isolation.
pub struct PanickingLicensee;

impl Licensee for PanickingLicensee {
    fn id(&self) -> &str {
        "panicking-licensee"
    }

    fn on_change(&self, _status: LicenseStatus) {
        panic!("intentional panic in licensee");
    }
}
