//! Configuration management for CNC Quote
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Quote preferences (default material and thickness, currency, display units)
//! - Material catalog sources (catalog file, per-material overrides)

pub use cncquote_core::units::MeasurementSystem;
use cncquote_core::{MaterialCatalog, MaterialProfile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::load_catalog_file;
use crate::error::{ConfigError, SettingsError, SettingsResult};
use crate::format::{read_file, write_file};

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "cncquote";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Longest quote validity accepted in a config, ten years
pub const MAX_VALIDITY_DAYS: u32 = 3650;

/// Quote preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSettings {
    /// Material used when none is given on the command line
    pub default_material: String,
    /// Stock thickness used when none is given, in mm
    pub default_thickness_mm: f64,
    /// Prefix for monetary amounts
    pub currency_symbol: String,
    /// Decimal places for monetary amounts
    pub decimal_places: u8,
    /// Units for lengths and areas in rendered quotes
    pub measurement_system: MeasurementSystem,
    /// Days a quotation stays valid
    pub validity_days: u32,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            default_material: "steel".to_string(),
            default_thickness_mm: 1.0,
            currency_symbol: "$".to_string(),
            decimal_places: 2,
            measurement_system: MeasurementSystem::default(),
            validity_days: 30,
        }
    }
}

/// Material catalog sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
    /// Catalog file (JSON or TOML) applied on top of the standard materials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Profiles added or replaced after the catalog file
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<MaterialProfile>,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quote preferences
    pub quote: QuoteSettings,
    /// Material catalog sources
    pub materials: MaterialSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform default config path, e.g. `~/.config/cncquote/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                ConfigError::NoConfigDir(std::env::consts::OS.to_string()).into()
            })
    }

    /// Load config from file (JSON or TOML)
    ///
    /// A relative `catalog_path` is resolved against the config file's directory.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let mut config: Self = read_file(path)?;

        if let (Some(catalog), Some(dir)) = (&config.materials.catalog_path, path.parent()) {
            if catalog.is_relative() {
                config.materials.catalog_path = Some(dir.join(catalog));
            }
        }

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load an explicit config file, else the platform default if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => {
                tracing::debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        write_file(path, self)?;
        tracing::debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let quote = &self.quote;

        if quote.default_material.trim().is_empty() {
            return Err(invalid("quote.default_material", "must not be empty"));
        }

        if !quote.default_thickness_mm.is_finite() || quote.default_thickness_mm <= 0.0 {
            return Err(invalid("quote.default_thickness_mm", "must be > 0"));
        }

        if quote.decimal_places > 6 {
            return Err(invalid("quote.decimal_places", "must be at most 6"));
        }

        if quote.validity_days == 0 || quote.validity_days > MAX_VALIDITY_DAYS {
            return Err(invalid(
                "quote.validity_days",
                format!("must be between 1 and {MAX_VALIDITY_DAYS}"),
            ));
        }

        for profile in &self.materials.overrides {
            profile.validate().map_err(|e| {
                invalid(format!("materials.overrides.{}", profile.name), e.to_string())
            })?;
        }

        Ok(())
    }

    /// Build the material catalog described by this config
    ///
    /// Starts from the standard catalog, applies the catalog file and then the
    /// overrides. Fails if the default material is not in the result.
    pub fn build_catalog(&self) -> SettingsResult<MaterialCatalog> {
        let mut catalog = MaterialCatalog::standard();

        if let Some(path) = &self.materials.catalog_path {
            let file = load_catalog_file(path)?;
            if file.replace_standard {
                catalog = MaterialCatalog::new();
            }
            for profile in file.materials {
                catalog.add_material(profile)?;
            }
        }

        for profile in &self.materials.overrides {
            catalog.add_material(profile.clone())?;
        }

        catalog.require(&self.quote.default_material)?;
        tracing::debug!(materials = catalog.len(), "Built material catalog");
        Ok(catalog)
    }
}

fn invalid(key: impl Into<String>, reason: impl Into<String>) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.into(),
        reason: reason.into(),
    }
}
