//! Extraction error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during data extraction.
///
/// Content-level problems (malformed CSV, undecodable JSON, corrupt PDF,
/// OCR failure) are *recovered* by the readers: they log the cause and
/// return an empty result instead of surfacing here. This enum covers the
/// failures that are fatal to a request.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The extraction target does not exist on disk.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// The file extension does not map to a registered reader.
    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    /// A reader failed while processing the file.
    #[error("Extraction failed for {format} input: {source}")]
    ExtractionFailed {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
