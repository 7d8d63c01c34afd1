//! # Settings Module
//!
//! ## Purpose
//! Holds the display conventions used when numbers are turned into text and the log
//! level of the terminal front end. Settings are optional: without a configuration
//! file every value falls back to the laboratory defaults below.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "sci_threshold": 1e-6,
//!   "sci_digits": 6,
//!   "general_decimals": 6,
//!   "fine_decimals": 10,
//!   "log_level": "info"
//! }
//! ```
//!
//! ## Usage
//! ```rust
//! use LabAssist::settings::DisplaySettings;
//!
//! let settings = DisplaySettings::load_or_default("labassist_config.json");
//! assert!(settings.general_decimals <= 15);
//! ```
use crate::errors::SettingsError;
use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// default name of the configuration file looked up by the binary
pub const DEFAULT_CONFIG_FILE: &str = "labassist_config.json";
/// f64 carries ~15-17 significant digits, more decimals only print noise
const MAX_DECIMALS: usize = 15;

/// Display conventions for converted values.
///
/// # Fields
/// * `sci_threshold` - non-zero values with a smaller magnitude are shown in scientific notation
/// * `sci_digits` - fractional digits of the scientific mantissa
/// * `general_decimals` - rounding for pressure, flow rate, concentration and temperature
/// * `fine_decimals` - rounding for mass and volume, where tiny units (pg, nL) are common
/// * `log_level` - level of the terminal logger ("off", "error", "warn", "info", "debug", "trace")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub sci_threshold: f64,
    pub sci_digits: usize,
    pub general_decimals: usize,
    pub fine_decimals: usize,
    pub log_level: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            sci_threshold: 1e-6,
            sci_digits: 6,
            general_decimals: 6,
            fine_decimals: 10,
            log_level: "info".to_string(),
        }
    }
}

impl DisplaySettings {
    /// Reads and validates settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings: DisplaySettings = serde_json::from_str(&content)?;
        settings.validate()?;
        info!("display settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Writes settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads settings if the file exists and is valid, defaults otherwise.
    /// A broken file is reported in the log, never fatal.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{}; using default display settings", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.sci_threshold.is_finite() || self.sci_threshold < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "sci_threshold must be a non-negative number, got {}",
                self.sci_threshold
            )));
        }
        for (name, value) in [
            ("sci_digits", self.sci_digits),
            ("general_decimals", self.general_decimals),
            ("fine_decimals", self.fine_decimals),
        ] {
            if value > MAX_DECIMALS {
                return Err(SettingsError::Invalid(format!(
                    "{} must not exceed {}, got {}",
                    name, MAX_DECIMALS, value
                )));
            }
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(SettingsError::Invalid(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
