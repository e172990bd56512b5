//! Registry mapping file extensions to format readers.

use std::sync::Arc;

use crate::json::JsonReader;
use crate::pdf::PdfReader;
use crate::tabular::{CsvReader, ExcelReader};
use crate::FormatReader;

/// Ordered collection of format readers.
///
/// The registry is the single dispatch site for format selection: the
/// extractor resolves a reader here and nowhere else. Supporting a new
/// format means registering one new [`FormatReader`] implementation.
pub struct ReaderRegistry {
    readers: Vec<Arc<dyn FormatReader>>,
}

impl ReaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
        }
    }

    /// Registry with all built-in readers: csv, xlsx/xls/xlsm/xlsb, json, pdf.
    pub fn with_defaults() -> Self {
        Self::new()
            .register(Arc::new(CsvReader::new()))
            .register(Arc::new(ExcelReader::new()))
            .register(Arc::new(JsonReader::new()))
            .register(Arc::new(PdfReader::new()))
    }

    /// Add a reader to the registry.
    pub fn register(mut self, reader: Arc<dyn FormatReader>) -> Self {
        self.readers.push(reader);
        self
    }

    /// Resolve the reader for a normalized extension.
    pub fn reader_for(&self, extension: &str) -> Option<Arc<dyn FormatReader>> {
        self.readers
            .iter()
            .find(|reader| reader.supports(extension))
            .cloned()
    }

    /// Check if any registered reader handles the extension.
    pub fn supports(&self, extension: &str) -> bool {
        self.readers.iter().any(|reader| reader.supports(extension))
    }

    /// All extensions claimed by registered readers.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.readers
            .iter()
            .flat_map(|reader| reader.extensions().iter().copied())
            .collect()
    }

    /// Number of registered readers.
    pub fn len(&self) -> usize {
        self.readers.len()
    }

    /// Check if the registry has no readers.
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
