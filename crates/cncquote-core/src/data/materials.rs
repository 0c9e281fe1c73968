//! Materials catalog module
//!
//! This module provides:
//! - Material machining and pricing profiles
//! - Profile invariant validation
//! - The standard six-material catalog
//! - Custom material registration
//!
//! A catalog is built once and then shared read-only. Nothing in this
//! module is global; callers construct a catalog and pass it where needed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CatalogError, InvalidMaterialError};

/// Setup time applied to every standard material, in minutes
pub const DEFAULT_SETUP_TIME_MIN: f64 = 15.0;

/// Tool change time applied to every standard material, in minutes
pub const DEFAULT_TOOL_CHANGE_TIME_MIN: f64 = 5.0;

/// Material identifier
///
/// Lookup key derived from a material name: trimmed and lower-cased,
/// so "Steel", "steel" and " STEEL " address the same profile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub String);

impl MaterialId {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Machining and pricing parameters for one material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// Material name
    pub name: String,
    /// Linear cutting speed in mm/min
    pub feed_rate_mm_per_min: f64,
    /// Stock cost per cubic centimetre
    pub density_cost_per_cm3: f64,
    /// Machine time cost per hour
    pub machine_rate_per_hour: f64,
    /// Fixed setup overhead per job, in minutes
    #[serde(default = "default_setup_time")]
    pub setup_time_min: f64,
    /// Fixed tool change overhead per job, in minutes
    #[serde(default = "default_tool_change_time")]
    pub tool_change_time_min: f64,
}

fn default_setup_time() -> f64 {
    DEFAULT_SETUP_TIME_MIN
}

fn default_tool_change_time() -> f64 {
    DEFAULT_TOOL_CHANGE_TIME_MIN
}

impl MaterialProfile {
    /// Create a profile with the standard setup and tool change times
    pub fn new(
        name: impl Into<String>,
        feed_rate_mm_per_min: f64,
        density_cost_per_cm3: f64,
        machine_rate_per_hour: f64,
    ) -> Self {
        Self {
            name: name.into(),
            feed_rate_mm_per_min,
            density_cost_per_cm3,
            machine_rate_per_hour,
            setup_time_min: DEFAULT_SETUP_TIME_MIN,
            tool_change_time_min: DEFAULT_TOOL_CHANGE_TIME_MIN,
        }
    }

    pub fn with_setup_time(mut self, minutes: f64) -> Self {
        self.setup_time_min = minutes;
        self
    }

    pub fn with_tool_change_time(mut self, minutes: f64) -> Self {
        self.tool_change_time_min = minutes;
        self
    }

    /// Catalog key for this profile
    pub fn id(&self) -> MaterialId {
        MaterialId::new(&self.name)
    }

    /// Name with the first letter capitalised, for display
    pub fn display_name(&self) -> String {
        let mut chars = self.name.trim().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Check the profile invariants
    ///
    /// Rates must be positive and finite; fixed overheads must be
    /// non-negative and finite.
    pub fn validate(&self) -> Result<(), InvalidMaterialError> {
        let positive = [
            ("feed_rate_mm_per_min", self.feed_rate_mm_per_min),
            ("density_cost_per_cm3", self.density_cost_per_cm3),
            ("machine_rate_per_hour", self.machine_rate_per_hour),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(self.invalid(field, value, "must be a positive finite number"));
            }
        }

        let non_negative = [
            ("setup_time_min", self.setup_time_min),
            ("tool_change_time_min", self.tool_change_time_min),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(self.invalid(field, value, "must be a non-negative finite number"));
            }
        }

        Ok(())
    }

    fn invalid(&self, field: &str, value: f64, reason: &str) -> InvalidMaterialError {
        InvalidMaterialError {
            material: self.name.clone(),
            field: field.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}

/// Materials catalog - read-only lookup of material profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialCatalog {
    /// Profiles by ID, ordered by key
    materials: BTreeMap<MaterialId, MaterialProfile>,
}

impl MaterialCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The six standard materials
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for profile in [
            MaterialProfile::new("steel", 300.0, 0.08, 45.0),
            MaterialProfile::new("aluminum", 600.0, 0.12, 40.0),
            MaterialProfile::new("plastic", 800.0, 0.04, 35.0),
            MaterialProfile::new("wood", 1200.0, 0.02, 30.0),
            MaterialProfile::new("brass", 400.0, 0.15, 42.0),
            MaterialProfile::new("copper", 350.0, 0.20, 45.0),
        ] {
            catalog.materials.insert(profile.id(), profile);
        }
        catalog
    }

    /// Add or replace a material, validating it first
    ///
    /// Returns the profile previously registered under the same name.
    pub fn add_material(
        &mut self,
        profile: MaterialProfile,
    ) -> Result<Option<MaterialProfile>, CatalogError> {
        if profile.name.trim().is_empty() {
            return Err(profile
                .invalid("name", 0.0, "must not be empty")
                .into());
        }
        profile.validate()?;

        let previous = self.materials.insert(profile.id(), profile);
        if let Some(prev) = &previous {
            tracing::debug!(material = %prev.name, "Replaced material profile");
        }
        Ok(previous)
    }

    /// Builder form of [`MaterialCatalog::add_material`]
    pub fn with_material(mut self, profile: MaterialProfile) -> Result<Self, CatalogError> {
        self.add_material(profile)?;
        Ok(self)
    }

    /// Get a material by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&MaterialProfile> {
        self.materials.get(&MaterialId::new(name))
    }

    /// Get a material by name, failing with the list of known names
    pub fn require(&self, name: &str) -> Result<&MaterialProfile, CatalogError> {
        self.get(name).ok_or_else(|| CatalogError::UnknownMaterial {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// All profiles ordered by ID
    pub fn iter(&self) -> impl Iterator<Item = &MaterialProfile> {
        self.materials.values()
    }

    /// All material IDs in order
    pub fn names(&self) -> Vec<String> {
        self.materials.keys().map(|id| id.0.clone()).collect()
    }

    /// Get the number of materials in the catalog
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Initialize the standard materials catalog
pub fn standard_catalog() -> MaterialCatalog {
    MaterialCatalog::standard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_id_normalises_name() {
        assert_eq!(MaterialId::new("  Steel "), MaterialId("steel".to_string()));
        assert_eq!(MaterialId::new("ALUMINUM").to_string(), "aluminum");
    }

    #[test]
    fn test_display_name() {
        let profile = MaterialProfile::new("brass", 400.0, 0.15, 42.0);
        assert_eq!(profile.display_name(), "Brass");
    }

    #[test]
    fn test_validate_rejects_zero_feed_rate() {
        let profile = MaterialProfile::new("broken", 0.0, 0.1, 40.0);
        let err = profile.validate().unwrap_err();
        assert_eq!(err.field, "feed_rate_mm_per_min");
        assert_eq!(err.material, "broken");
    }

    #[test]
    fn test_validate_rejects_negative_overhead() {
        let profile = MaterialProfile::new("broken", 100.0, 0.1, 40.0).with_setup_time(-1.0);
        assert_eq!(profile.validate().unwrap_err().field, "setup_time_min");

        let profile = MaterialProfile::new("broken", 100.0, 0.1, 40.0)
            .with_tool_change_time(f64::INFINITY);
        assert_eq!(profile.validate().unwrap_err().field, "tool_change_time_min");
    }

    #[test]
    fn test_zero_overheads_are_valid() {
        let profile = MaterialProfile::new("bare", 100.0, 0.1, 40.0)
            .with_setup_time(0.0)
            .with_tool_change_time(0.0);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_deserialize_defaults_overheads() {
        let json = r#"{
            "name": "titanium",
            "feed_rate_mm_per_min": 150.0,
            "density_cost_per_cm3": 0.9,
            "machine_rate_per_hour": 80.0
        }"#;
        let profile: MaterialProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.setup_time_min, DEFAULT_SETUP_TIME_MIN);
        assert_eq!(profile.tool_change_time_min, DEFAULT_TOOL_CHANGE_TIME_MIN);
    }
}
