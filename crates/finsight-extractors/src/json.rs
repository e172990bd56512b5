//! JSON reader.

use std::path::Path;

use serde_json::Value;

use crate::error::ExtractResult;
use crate::types::{ExtractConfig, ExtractedData};
use crate::FormatReader;

/// Reader for JSON documents.
///
/// Returns the parsed value as-is; a decode failure (which includes the
/// zero-byte file) is recovered as an empty object plus a log entry.
#[derive(Debug, Clone, Default)]
pub struct JsonReader;

impl JsonReader {
    pub fn new() -> Self {
        Self
    }
}

impl FormatReader for JsonReader {
    fn read(&self, path: &Path, _config: &ExtractConfig) -> ExtractResult<ExtractedData> {
        let raw = std::fs::read(path)?;
        match serde_json::from_slice::<Value>(&raw) {
            Ok(value) => Ok(ExtractedData::Json(value)),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to decode JSON file");
                Ok(ExtractedData::Json(Value::Object(serde_json::Map::new())))
            }
        }
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }
}
