//! Material catalog files
//!
//! A catalog file lists material profiles in JSON or TOML:
//!
//! ```toml
//! replace_standard = false
//!
//! [[materials]]
//! name = "titanium"
//! feed_rate_mm_per_min = 150.0
//! density_cost_per_cm3 = 0.9
//! machine_rate_per_hour = 80.0
//! setup_time_min = 20.0
//! ```
//!
//! Omitted setup and tool change times take the standard values.

use cncquote_core::MaterialProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SettingsResult;
use crate::format::read_file;

/// Contents of a material catalog file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Drop the standard materials instead of extending them
    #[serde(default)]
    pub replace_standard: bool,
    #[serde(default)]
    pub materials: Vec<MaterialProfile>,
}

/// Read a catalog file
pub fn load_catalog_file(path: &Path) -> SettingsResult<CatalogFile> {
    let file: CatalogFile = read_file(path)?;

    tracing::debug!(
        path = %path.display(),
        materials = file.materials.len(),
        replace_standard = file.replace_standard,
        "Loaded material catalog file"
    );
    Ok(file)
}
