//! Error types for the settings crate.
//!
//! File errors carry the path they came from so the binary can report them
//! without extra context.

use cncquote_core::CatalogError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors loading, saving or applying settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A config or catalog file could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// A config file could not be written.
    #[error("Cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// A `.json` file did not match the expected layout.
    #[error("Malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A `.toml` file did not match the expected layout.
    #[error("Malformed TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Settings could not be encoded for saving.
    #[error("Cannot encode settings: {0}")]
    Encode(String),

    /// A configuration value is outside its domain.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The file format or location could not be determined.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured materials do not form a usable catalog.
    #[error("Material catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors locating configuration files.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Only `.json` and `.toml` files are understood.
    #[error("Unsupported settings file format '{extension}' for {}", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The platform has no per-user configuration directory.
    #[error("No configuration directory on this platform ({0})")]
    NoConfigDir(String),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_the_file() {
        let err = SettingsError::Read {
            path: PathBuf::from("/etc/cncquote/config.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot read /etc/cncquote/config.toml: not found"
        );
    }

    #[test]
    fn test_invalid_setting_display() {
        let err = SettingsError::InvalidSetting {
            key: "quote.default_thickness_mm".to_string(),
            reason: "must be > 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid setting 'quote.default_thickness_mm': must be > 0"
        );
    }

    #[test]
    fn test_format_error_is_transparent() {
        let err: SettingsError = ConfigError::UnsupportedFormat {
            path: PathBuf::from("config.yaml"),
            extension: "yaml".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Unsupported settings file format 'yaml' for config.yaml"
        );
    }

    #[test]
    fn test_catalog_error_conversion() {
        let err: SettingsError = CatalogError::UnknownMaterial {
            name: "gold".to_string(),
            available: "steel".to_string(),
        }
        .into();
        assert!(matches!(err, SettingsError::Catalog(_)));
        assert!(err.to_string().contains("gold"));
    }
}
