//! finsight-extractors - Format-dispatching data extraction for financial documents.
//!
//! Turns an uploaded file (CSV, Excel, JSON, or PDF) into a normalized
//! in-memory result behind a single entry point. Each format is owned by
//! one reader implementing a common trait; a registry maps file extensions
//! to readers, so adding a format means registering one new implementation.
//!
//! # Features
//!
//! - `ocr` (default) - scanned-PDF extraction via pdftoppm + tesseract
//!
//! # Example
//!
//! ```ignore
//! use finsight_extractors::{DataExtractor, ExtractConfig};
//!
//! let extractor = DataExtractor::new();
//!
//! // Tabular upload: column-major table keyed by header names
//! let data = extractor.extract("report.csv".as_ref(), &ExtractConfig::default())?;
//!
//! // Scanned PDF upload: OCR text only, no tables
//! let data = extractor.extract("scan.pdf".as_ref(), &ExtractConfig::scanned())?;
//! ```
//!
//! Readers recover from content-level failures (malformed CSV, undecodable
//! JSON, corrupt PDF, OCR errors) by logging the cause and returning an
//! empty result. Only missing files, unknown extensions, and unexpected
//! reader errors surface as [`ExtractError`].

mod error;
mod extractor;
mod json;
mod pdf;
mod registry;
mod tabular;
mod types;

pub use error::{ExtractError, ExtractResult};
pub use extractor::DataExtractor;
pub use json::JsonReader;
pub use pdf::PdfReader;
pub use registry::ReaderRegistry;
pub use tabular::{CsvReader, ExcelReader};
pub use types::{Column, DocumentData, ExtractConfig, ExtractedData, Table};

use std::path::Path;

/// Core reader trait - each supported format implements this.
///
/// Readers are synchronous: one extraction processes one file start to
/// finish. Content-level failures must be recovered internally (log and
/// return an empty result); `Err` is reserved for unexpected IO faults.
pub trait FormatReader: Send + Sync {
    /// Extract data from the file at `path`.
    fn read(&self, path: &Path, config: &ExtractConfig) -> ExtractResult<ExtractedData>;

    /// Normalized extensions this reader handles (lower-case, no dot).
    fn extensions(&self) -> &[&str];

    /// Check if this reader handles the given extension.
    fn supports(&self, extension: &str) -> bool {
        self.extensions().contains(&extension)
    }

    /// Advisory configuration check; readers may log when a relevant
    /// option is missing. Always succeeds in the current behavior.
    fn validate_config(&self, _config: &ExtractConfig) {}

    /// Human-readable name for this reader.
    fn name(&self) -> &str;
}
