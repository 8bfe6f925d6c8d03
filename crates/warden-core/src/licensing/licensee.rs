//! The `Licensee` capability — implemented by any feature module that
//! must react to license status changes.

use super::status::LicenseStatus;

/// A feature module's view of licensing.
///
/// Implementors own their gating derivation (an `is_feature_enabled`
/// style boolean computed from the last-seen status); the registry only
/// pushes statuses. `on_change` runs on whatever thread the registry
/// broadcasts from and while the registry lock is held, so it must not
/// call back into the registry and must be cheap.
pub trait Licensee: Send + Sync {
    /// Stable identifier, used when logging broadcast failures.
    fn id(&self) -> &str;

    /// Invoked with the current status when the licensee is registered,
    /// and with the new status on every transition afterwards.
    /// Receiving an equal status twice must be a harmless re-apply.
    fn on_change(&self, status: LicenseStatus);
}
