//! License section of the runtime configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::licensing::status::{LicenseState, LicenseStatus, OperationMode};

/// Initial license status the registry starts with, before the
/// verification collaborator pushes a real one.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LicenseConfig {
    /// Initial operation mode. Default: "basic".
    pub mode: Option<String>,
    /// Initial license state. Default: "disabled" — features stay off
    /// until an authority says otherwise.
    pub state: Option<String>,
}

impl LicenseConfig {
    /// Returns the effective initial mode, defaulting to `Basic`.
    pub fn effective_mode(&self) -> Result<OperationMode, ConfigError> {
        match &self.mode {
            None => Ok(OperationMode::default()),
            Some(s) => OperationMode::parse(s).ok_or_else(|| ConfigError::InvalidValue {
                field: "license.mode".to_string(),
                message: format!("unknown operation mode '{s}'"),
            }),
        }
    }

    /// Returns the effective initial state, defaulting to `Disabled`.
    pub fn effective_state(&self) -> Result<LicenseState, ConfigError> {
        match &self.state {
            None => Ok(LicenseState::default()),
            Some(s) => LicenseState::parse(s).ok_or_else(|| ConfigError::InvalidValue {
                field: "license.state".to_string(),
                message: format!("unknown license state '{s}'"),
            }),
        }
    }

    /// The status a fresh registry starts with.
    pub fn initial_status(&self) -> Result<LicenseStatus, ConfigError> {
        Ok(LicenseStatus::new(
            self.effective_mode()?,
            self.effective_state()?,
        ))
    }
}
