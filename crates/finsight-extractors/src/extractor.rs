//! Extraction entry point: path + config in, normalized result out.

use std::path::Path;

use crate::error::{ExtractError, ExtractResult};
use crate::registry::ReaderRegistry;
use crate::types::{ExtractConfig, ExtractedData};

/// Single entry point for data extraction.
///
/// Owns the file-existence check and format selection, then hands the file
/// to exactly one registered reader. Reader failures are wrapped into
/// [`ExtractError::ExtractionFailed`] so callers face one error type for
/// "the read failed" regardless of format.
pub struct DataExtractor {
    registry: ReaderRegistry,
}

impl DataExtractor {
    /// Extractor with the built-in reader set (csv, excel, json, pdf).
    pub fn new() -> Self {
        Self {
            registry: ReaderRegistry::with_defaults(),
        }
    }

    /// Extractor over a custom registry.
    pub fn with_registry(registry: ReaderRegistry) -> Self {
        Self { registry }
    }

    /// The registry backing this extractor.
    pub fn registry(&self) -> &ReaderRegistry {
        &self.registry
    }

    /// Extract data from the file at `path`.
    ///
    /// Fails with [`ExtractError::NotFound`] if the path does not reference
    /// an existing file (checked before any format logic), and with
    /// [`ExtractError::UnsupportedFormat`] if no registered reader claims
    /// the extension. Content-level problems inside a reader do not fail
    /// the request; they produce an empty result.
    pub fn extract(&self, path: &Path, config: &ExtractConfig) -> ExtractResult<ExtractedData> {
        if !path.is_file() {
            return Err(ExtractError::NotFound(path.to_path_buf()));
        }

        let format = normalized_extension(path);
        let reader = self
            .registry
            .reader_for(&format)
            .ok_or_else(|| ExtractError::UnsupportedFormat(format.clone()))?;

        reader.validate_config(config);

        let data = reader
            .read(path, config)
            .map_err(|source| ExtractError::ExtractionFailed {
                format: format.clone(),
                source: Box::new(source),
            })?;

        if !data.is_empty() {
            tracing::info!(
                path = %path.display(),
                format = %format,
                reader = reader.name(),
                "extraction complete"
            );
        }

        Ok(data)
    }
}

impl Default for DataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension of `path`, lower-cased, without the leading separator.
/// Missing extensions normalize to an empty string, which no reader claims.
fn normalized_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
