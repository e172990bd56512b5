//! Core types for data extraction.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-request extraction configuration.
///
/// `scan` is only meaningful for PDF input: `Some(true)` selects the OCR
/// path, `Some(false)` the structured text/table path. `None` models an
/// absent flag and behaves like `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Whether the document is a scanned image requiring OCR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan: Option<bool>,
}

impl ExtractConfig {
    /// Configuration requesting the OCR path for PDF input.
    pub fn scanned() -> Self {
        Self { scan: Some(true) }
    }

    /// True when the caller explicitly asked for OCR extraction.
    pub fn scan_requested(&self) -> bool {
        self.scan.unwrap_or(false)
    }
}

/// One column of a table: row index to cell value.
pub type Column = BTreeMap<usize, Value>;

/// Column-major table: column name to row-indexed cells.
///
/// Columns keep header order; rows are keyed by zero-based index so sparse
/// columns (missing cells) are representable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    columns: IndexMap<String, Column>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a header row and data rows.
    ///
    /// Cells beyond the header width are dropped; rows shorter than the
    /// header leave the trailing cells absent.
    pub fn from_rows(header: &[String], rows: &[Vec<Value>]) -> Self {
        let mut table = Self::new();
        for name in header {
            table.columns.entry(name.clone()).or_default();
        }
        for (row_idx, row) in rows.iter().enumerate() {
            for (name, cell) in header.iter().zip(row.iter()) {
                table
                    .columns
                    .entry(name.clone())
                    .or_default()
                    .insert(row_idx, cell.clone());
            }
        }
        table
    }

    /// Insert a single cell.
    pub fn insert(&mut self, column: impl Into<String>, row: usize, value: Value) {
        self.columns.entry(column.into()).or_default().insert(row, value);
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Column names in header order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Whether the table contains the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows, taken as the widest column.
    pub fn row_count(&self) -> usize {
        self.columns
            .values()
            .filter_map(|col| col.keys().next_back().map(|idx| idx + 1))
            .max()
            .unwrap_or(0)
    }
}

/// Parse a raw cell into a JSON scalar: integer, then float, then string.
pub(crate) fn parse_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(trimmed.to_string())
}

/// Result of extracting a PDF document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentData {
    /// Page index to extracted text; pages yielding nothing are omitted.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub texts: BTreeMap<usize, String>,

    /// Page index to detected table, structured path only. The OCR path
    /// never carries this key. A page with several tables keeps the last
    /// one processed.
    #[serde(skip_serializing_if = "tables_absent_or_empty", default)]
    pub tables: Option<BTreeMap<usize, Table>>,
}

fn tables_absent_or_empty(tables: &Option<BTreeMap<usize, Table>>) -> bool {
    tables.as_ref().map_or(true, BTreeMap::is_empty)
}

impl DocumentData {
    /// True when no page yielded text or tables.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.tables.as_ref().map_or(true, BTreeMap::is_empty)
    }
}

/// Normalized extraction result.
///
/// The variant depends only on the input format, so consumers can dispatch
/// display logic on the format they requested without inspecting the shape.
/// Serialize-only: the untagged encoding mirrors the wire shape consumers
/// see, but is ambiguous to decode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractedData {
    /// PDF: per-page texts and, for non-scanned documents, tables.
    Document(DocumentData),
    /// CSV/Excel: one column-major table, returned bare.
    Tabular(Table),
    /// JSON: the parsed document.
    Json(Value),
}

impl ExtractedData {
    /// Uniform "no data recoverable" signal across all formats.
    pub fn is_empty(&self) -> bool {
        match self {
            ExtractedData::Document(doc) => doc.is_empty(),
            ExtractedData::Tabular(table) => table.is_empty(),
            ExtractedData::Json(value) => match value {
                Value::Null => true,
                Value::Object(map) => map.is_empty(),
                Value::Array(items) => items.is_empty(),
                Value::String(s) => s.is_empty(),
                _ => false,
            },
        }
    }

    /// Borrow the tabular payload, if this is a CSV/Excel result.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ExtractedData::Tabular(table) => Some(table),
            _ => None,
        }
    }

    /// Borrow the document payload, if this is a PDF result.
    pub fn as_document(&self) -> Option<&DocumentData> {
        match self {
            ExtractedData::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Borrow the JSON payload, if this is a JSON result.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ExtractedData::Json(value) => Some(value),
            _ => None,
        }
    }
}
