//! JSON and TOML settings files, chosen by extension

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: extension.to_string(),
            }
            .into()),
        }
    }
}

/// Read and decode a settings file
pub(crate) fn read_file<T: DeserializeOwned>(path: &Path) -> SettingsResult<T> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        FileFormat::Json => serde_json::from_str(&content).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        }),
        FileFormat::Toml => toml::from_str(&content).map_err(|source| SettingsError::Toml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Encode and write a settings file, creating parent directories
pub(crate) fn write_file<T: Serialize>(path: &Path, value: &T) -> SettingsResult<()> {
    let content = match FileFormat::from_path(path)? {
        FileFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| SettingsError::Encode(e.to_string()))?
        }
        FileFormat::Toml => {
            toml::to_string_pretty(value).map_err(|e| SettingsError::Encode(e.to_string()))?
        }
    };

    let write_err = |source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)
}
