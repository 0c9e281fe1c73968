//! Primitive documents
//!
//! JSON hand-off format between a drawing parser and the measurer.
//! Accepts either a bare array of primitives or an object with a
//! `primitives` field and an optional source name:
//!
//! ```json
//! {
//!   "source": "bracket.dxf",
//!   "primitives": [
//!     { "type": "line", "start": { "x": 0, "y": 0 }, "end": { "x": 100, "y": 0 } },
//!     { "type": "circle", "center": { "x": 50, "y": 50 }, "radius": 10 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::primitive::Primitive;

/// Errors reading a primitive document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document could not be read
    #[error("Failed to read primitives: {0}")]
    Io(#[from] io::Error),

    /// The document is not valid primitive JSON
    #[error("Invalid primitive document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed drawing ready for measurement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveDocument {
    /// Name of the drawing the primitives were extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub primitives: Vec<Primitive>,
}

/// Parse a primitive document from JSON text
pub fn parse_primitives(json: &str) -> Result<PrimitiveDocument, DocumentError> {
    if json.trim_start().starts_with('[') {
        let primitives: Vec<Primitive> = serde_json::from_str(json)?;
        return Ok(PrimitiveDocument {
            source: None,
            primitives,
        });
    }
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a primitive document from disk
///
/// The file name becomes the source name when the document has none.
pub fn load_primitives(path: &Path) -> Result<PrimitiveDocument, DocumentError> {
    let content = std::fs::read_to_string(path)?;
    let mut document = parse_primitives(&content)?;
    if document.source.is_none() {
        document.source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
    }
    tracing::debug!(
        path = %path.display(),
        primitives = document.primitives.len(),
        "Loaded primitive document"
    );
    Ok(document)
}
