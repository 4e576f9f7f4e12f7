pub mod defaults;
mod lifecycle_config;
mod observability_config;
mod selection_config;
mod state_config;

pub use lifecycle_config::LifecycleConfig;
pub use observability_config::ObservabilityConfig;
pub use selection_config::SelectionConfig;
pub use state_config::StateConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level engine configuration. Every section falls back to defaults,
/// so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavicueConfig {
    pub selection: SelectionConfig,
    pub lifecycle: LifecycleConfig,
    pub state: StateConfig,
    pub observability: ObservabilityConfig,
}

impl NavicueConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selection.validate()?;
        self.lifecycle.validate()?;
        self.state.validate()?;
        Ok(())
    }
}

pub(crate) fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be a finite non-negative number, got {value}"),
        })
    }
}
