//! End-to-end gating behavior of the monitoring licensee against the
//! license registry: immediate status on registration, enable/disable
//! cycles, grace-period handling, late joiners, and isolation from a
//! failing peer.

use std::sync::Arc;

use warden_core::licensing::status::{LicenseState, LicenseStatus, OperationMode};
use warden_core::licensing::testing::{EnableState, MockLicenseService, PanickingLicensee};
use warden_core::licensing::LicenseeRegistry;
use warden_monitoring::MonitoringLicensee;

fn registry_with(state: LicenseState) -> Arc<LicenseeRegistry> {
    Arc::new(LicenseeRegistry::new(LicenseStatus::new(
        OperationMode::Basic,
        state,
    )))
}

#[test]
fn registers_against_enabled_license_and_collects_immediately() {
    let registry = registry_with(LicenseState::Enabled);
    let monitoring = MonitoringLicensee::register(&registry);

    assert!(monitoring.collection_enabled());
    assert_eq!(monitoring.status(), registry.current_status());
}

#[test]
fn disabling_license_turns_collection_off() {
    let registry = registry_with(LicenseState::Enabled);
    let monitoring = MonitoringLicensee::register(&registry);

    registry.set_status(LicenseStatus::new(
        OperationMode::Basic,
        LicenseState::Disabled,
    ));

    assert!(!monitoring.collection_enabled());
    assert_eq!(monitoring.status().state(), LicenseState::Disabled);
}

#[test]
fn grace_period_keeps_collection_on() {
    let registry = registry_with(LicenseState::Disabled);
    let monitoring = MonitoringLicensee::register(&registry);
    assert!(!monitoring.collection_enabled());

    registry.set_status(LicenseStatus::new(
        OperationMode::Basic,
        LicenseState::GracePeriod,
    ));

    assert!(monitoring.collection_enabled());
    assert_eq!(monitoring.status().state(), LicenseState::GracePeriod);
}

#[test]
fn late_joiner_is_gated_by_current_status_without_a_new_broadcast() {
    let registry = registry_with(LicenseState::Disabled);
    let first = MonitoringLicensee::register(&registry);

    registry.set_status(LicenseStatus::new(
        OperationMode::Basic,
        LicenseState::GracePeriod,
    ));

    // Registered after the transition; must pick up the current status
    // immediately, with no extra set_status required.
    let second = MonitoringLicensee::register(&registry);

    assert!(first.collection_enabled());
    assert!(second.collection_enabled());
    assert_eq!(second.status().state(), LicenseState::GracePeriod);
}

#[test]
fn enable_disable_cycle_through_mock_service() {
    let registry = registry_with(LicenseState::Disabled);
    let monitoring = MonitoringLicensee::register(&registry);
    let service =
        MockLicenseService::new(registry.clone(), OperationMode::Basic, EnableState::Enabled);

    service.enable();
    assert!(monitoring.collection_enabled());
    assert_eq!(monitoring.status().state(), LicenseState::Enabled);

    service.disable();
    assert!(!monitoring.collection_enabled());

    service.enable();
    assert!(monitoring.collection_enabled());
}

#[test]
fn grace_period_strategy_also_enables_collection() {
    let registry = registry_with(LicenseState::Disabled);
    let monitoring = MonitoringLicensee::register(&registry);
    let service = MockLicenseService::new(
        registry.clone(),
        OperationMode::Trial,
        EnableState::GracePeriod,
    );

    service.enable();
    assert!(monitoring.collection_enabled());
    assert_eq!(monitoring.status().state(), LicenseState::GracePeriod);
    assert_eq!(monitoring.status().mode(), OperationMode::Trial);
}

#[test]
fn failing_peer_does_not_affect_monitoring_gate() {
    let registry = registry_with(LicenseState::Enabled);
    registry.register(Arc::new(PanickingLicensee));
    let monitoring = MonitoringLicensee::register(&registry);
    assert!(monitoring.collection_enabled());

    // Broadcast reaches monitoring even though the peer panics first.
    registry.set_status(LicenseStatus::new(
        OperationMode::Basic,
        LicenseState::Disabled,
    ));
    assert!(!monitoring.collection_enabled());
}

#[test]
fn repeated_equal_status_is_a_noop_for_the_gate() {
    let registry = registry_with(LicenseState::Enabled);
    let monitoring = MonitoringLicensee::register(&registry);

    let status = LicenseStatus::new(OperationMode::Basic, LicenseState::Enabled);
    registry.set_status(status);
    registry.set_status(status);

    assert!(monitoring.collection_enabled());
    assert_eq!(monitoring.status(), status);
}
