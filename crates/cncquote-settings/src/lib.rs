//! CNC Quote Settings Crate
//!
//! Handles application configuration and the material catalog loader.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;

pub use catalog::{load_catalog_file, CatalogFile};
pub use config::{Config, MaterialSettings, QuoteSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use format::FileFormat;
