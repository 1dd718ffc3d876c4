// ABOUTME: Tunable validity bands and display precision for body-composition results
// ABOUTME: Loaded once from STUDIO_COMPOSITION_* environment overrides with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composition Engine Configuration
//!
//! All values can be overridden via environment variables with the
//! `STUDIO_COMPOSITION_` prefix. Invalid overrides are reported and the
//! defaults are used instead.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use studio_core::constants::env_prefixes;
use studio_core::errors::AppError;
use thiserror::Error;
use tracing::warn;

/// Global configuration singleton
static COMPOSITION_CONFIG: OnceLock<CompositionConfig> = OnceLock::new();

/// Default validity bands
mod defaults {
    /// Lowest density for which the Siri law yields at most 100% fat
    pub const DENSITY_MIN: f64 = 0.90;
    /// Highest density for which the Siri law yields at least 0% fat
    pub const DENSITY_MAX: f64 = 1.10;
    /// Lower edge of the physiological sanity band (% fat)
    pub const PLAUSIBLE_FAT_MIN: f64 = 2.0;
    /// Upper edge of the physiological sanity band (% fat)
    pub const PLAUSIBLE_FAT_MAX: f64 = 60.0;
    /// Decimal places used for displayed percentages and masses
    pub const DISPLAY_DECIMALS: u32 = 1;
    /// Largest accepted display precision
    pub const MAX_DISPLAY_DECIMALS: u32 = 6;
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bounds are inverted or outside their domain
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::ValueOutOfRange(_) => Self::out_of_range(error.to_string()),
            ConfigError::InvalidRange(_) | ConfigError::Parse(_) => {
                Self::config(error.to_string())
            }
        }
    }
}

/// Validity bands and display precision for the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionConfig {
    /// Lowest accepted body density (g/cm3)
    pub density_min: f64,
    /// Highest accepted body density (g/cm3)
    pub density_max: f64,
    /// Fat percentages below this are reported but flagged implausible
    pub plausible_fat_min: f64,
    /// Fat percentages above this are reported but flagged implausible
    pub plausible_fat_max: f64,
    /// Decimal places for display rounding
    pub display_decimals: u32,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            density_min: defaults::DENSITY_MIN,
            density_max: defaults::DENSITY_MAX,
            plausible_fat_min: defaults::PLAUSIBLE_FAT_MIN,
            plausible_fat_max: defaults::PLAUSIBLE_FAT_MAX,
            display_decimals: defaults::DISPLAY_DECIMALS,
        }
    }
}

impl CompositionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        COMPOSITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load composition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.density_min.is_finite() && self.density_max.is_finite()) {
            return Err(ConfigError::ValueOutOfRange("density bounds must be finite"));
        }
        if self.density_min <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("density_min must be > 0"));
        }
        if self.density_min >= self.density_max {
            return Err(ConfigError::InvalidRange(
                "density_min must be below density_max",
            ));
        }

        if !(0.0..=100.0).contains(&self.plausible_fat_min)
            || !(0.0..=100.0).contains(&self.plausible_fat_max)
        {
            return Err(ConfigError::ValueOutOfRange(
                "plausible fat bounds must lie within 0-100",
            ));
        }
        if self.plausible_fat_min >= self.plausible_fat_max {
            return Err(ConfigError::InvalidRange(
                "plausible_fat_min must be below plausible_fat_max",
            ));
        }

        if self.display_decimals > defaults::MAX_DISPLAY_DECIMALS {
            return Err(ConfigError::ValueOutOfRange("display_decimals must be <= 6"));
        }

        Ok(())
    }

    /// Whether a fat percentage lies inside the sanity band
    #[must_use]
    pub fn is_plausible_fat(&self, fat_percentage: f64) -> bool {
        (self.plausible_fat_min..=self.plausible_fat_max).contains(&fat_percentage)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(suffix: &str, target: &mut T) -> Result<(), ConfigError> {
        let env_var_name = format!("{}{suffix}", env_prefixes::COMPOSITION);
        if let Ok(val) = env::var(&env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("DENSITY_MIN", &mut self.density_min)?;
        Self::apply_env_var("DENSITY_MAX", &mut self.density_max)?;
        Self::apply_env_var("PLAUSIBLE_FAT_MIN", &mut self.plausible_fat_min)?;
        Self::apply_env_var("PLAUSIBLE_FAT_MAX", &mut self.plausible_fat_max)?;
        Self::apply_env_var("DISPLAY_DECIMALS", &mut self.display_decimals)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serial_test::serial;

    const OVERRIDES: [&str; 5] = [
        "STUDIO_COMPOSITION_DENSITY_MIN",
        "STUDIO_COMPOSITION_DENSITY_MAX",
        "STUDIO_COMPOSITION_PLAUSIBLE_FAT_MIN",
        "STUDIO_COMPOSITION_PLAUSIBLE_FAT_MAX",
        "STUDIO_COMPOSITION_DISPLAY_DECIMALS",
    ];

    fn clear_overrides() {
        for name in OVERRIDES {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = CompositionConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.is_plausible_fat(15.0));
        assert!(!config.is_plausible_fat(1.5));
        assert!(!config.is_plausible_fat(61.0));
    }

    #[test]
    fn test_inverted_bands_are_rejected() {
        let config = CompositionConfig {
            density_min: 1.1,
            density_max: 0.9,
            ..CompositionConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

        let config = CompositionConfig {
            plausible_fat_min: 40.0,
            plausible_fat_max: 30.0,
            ..CompositionConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

        let config = CompositionConfig {
            plausible_fat_max: 140.0,
            ..CompositionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_config_errors_convert_to_app_errors() {
        use studio_core::errors::ErrorCode;

        let error = AppError::from(ConfigError::ValueOutOfRange("display_decimals must be <= 6"));
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(error.message.contains("display_decimals"));

        let error = AppError::from(ConfigError::InvalidRange(
            "density_min must be below density_max",
        ));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    #[serial]
    fn test_env_overrides_apply() {
        clear_overrides();
        env::set_var("STUDIO_COMPOSITION_PLAUSIBLE_FAT_MIN", "3.5");
        env::set_var("STUDIO_COMPOSITION_DISPLAY_DECIMALS", " 2 ");

        let config = CompositionConfig::load().unwrap();
        clear_overrides();

        assert!((config.plausible_fat_min - 3.5).abs() < f64::EPSILON);
        assert_eq!(config.display_decimals, 2);
        assert!((config.density_max - 1.10).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_unparseable_override_is_an_error() {
        clear_overrides();
        env::set_var("STUDIO_COMPOSITION_DENSITY_MIN", "low");

        let result = CompositionConfig::load();
        clear_overrides();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    #[serial]
    fn test_override_that_breaks_validation_is_an_error() {
        clear_overrides();
        env::set_var("STUDIO_COMPOSITION_DISPLAY_DECIMALS", "9");

        let result = CompositionConfig::load();
        clear_overrides();

        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    }
}
