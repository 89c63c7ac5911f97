//! Kitchen profile.
//!
//! Describes the equipment available for one run. Only `burner_count`
//! feeds the risk analysis; `oven_capacity_lbs` is accepted and carried
//! but weight-based oven checks are not performed.
//!
//! Profiles can be loaded from TOML:
//!
//! ```
//! use u_kitchen::models::KitchenProfile;
//!
//! let profile = KitchenProfile::from_toml_str("burner_count = 4").unwrap();
//! assert_eq!(profile.burner_count, Some(4));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Per-run kitchen equipment description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitchenProfile {
    /// Oven capacity by weight (lbs). Not used by scheduling.
    #[serde(default)]
    pub oven_capacity_lbs: Option<f64>,
    /// Number of stovetop burners. `None` disables the burner check.
    #[serde(default)]
    pub burner_count: Option<u32>,
}

impl KitchenProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the burner count.
    pub fn with_burners(mut self, burner_count: u32) -> Self {
        self.burner_count = Some(burner_count);
        self
    }

    /// Sets the oven capacity (lbs).
    pub fn with_oven_capacity(mut self, lbs: f64) -> Self {
        self.oven_capacity_lbs = Some(lbs);
        self
    }

    /// Burner count usable for the stovetop check (`None` when unset or zero).
    pub fn burners(&self) -> Option<u32> {
        self.burner_count.filter(|&n| n > 0)
    }

    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, is not valid TOML, or
    /// describes an impossible kitchen.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a profile from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a profile from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let profile: Self = toml::from_str(s)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks the equipment counts are physically meaningful.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.burner_count == Some(0) {
            return Err(ConfigError::Invalid(
                "burner_count must be at least 1".to_string(),
            ));
        }
        if let Some(lbs) = self.oven_capacity_lbs {
            if lbs.is_nan() || lbs <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "oven_capacity_lbs must be positive, got {lbs}"
                )));
            }
        }
        Ok(())
    }
}
