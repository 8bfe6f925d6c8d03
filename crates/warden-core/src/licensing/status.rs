//! License status — the immutable value the registry distributes.

use serde::{Deserialize, Serialize};

/// Commercial tier of the active license.
///
/// Informational only in this core: gating decisions never branch on
/// the mode, but licensees may surface it in warnings or UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationMode {
    Trial,
    Basic,
    Standard,
    Gold,
    Platinum,
}

impl OperationMode {
    pub const ALL: [OperationMode; 5] = [
        Self::Trial,
        Self::Basic,
        Self::Standard,
        Self::Gold,
        Self::Platinum,
    ];

    /// Mode name as string (for config, logging).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }

    /// Parse mode from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trial" => Some(Self::Trial),
            "basic" => Some(Self::Basic),
            "standard" => Some(Self::Standard),
            "gold" => Some(Self::Gold),
            "platinum" => Some(Self::Platinum),
            _ => None,
        }
    }
}

impl Default for OperationMode {
    fn default() -> Self {
        Self::Basic
    }
}

/// Validity of the active license.
///
/// Any state may transition to any other at any time (renewal, expiry,
/// manual install or revocation); there is no terminal state.
/// `GracePeriod` gates identically to `Enabled` but is kept distinct so
/// downstream modules can surface a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseState {
    Enabled,
    GracePeriod,
    Disabled,
}

impl LicenseState {
    pub const ALL: [LicenseState; 3] = [Self::Enabled, Self::GracePeriod, Self::Disabled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::GracePeriod => "grace_period",
            Self::Disabled => "disabled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "enabled" => Some(Self::Enabled),
            "grace_period" => Some(Self::GracePeriod),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }
}

impl Default for LicenseState {
    fn default() -> Self {
        Self::Disabled
    }
}

/// The immutable status value pushed to licensees.
///
/// Two statuses with equal mode and state are interchangeable;
/// receiving the same status twice must be a harmless re-apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LicenseStatus {
    mode: OperationMode,
    state: LicenseState,
}

impl LicenseStatus {
    pub fn new(mode: OperationMode, state: LicenseState) -> Self {
        Self { mode, state }
    }

    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    pub fn state(&self) -> LicenseState {
        self.state
    }

    /// Whether this status permits gated features to operate.
    /// `Enabled` and `GracePeriod` both do; `Disabled` does not.
    pub fn allows_operation(&self) -> bool {
        matches!(self.state, LicenseState::Enabled | LicenseState::GracePeriod)
    }
}
