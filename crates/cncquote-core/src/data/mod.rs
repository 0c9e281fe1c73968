//! Data models for CNC Quote
//!
//! Read-only reference data consumed by the quoting pipeline.

pub mod materials;

pub use materials::{standard_catalog, MaterialCatalog, MaterialId, MaterialProfile};
