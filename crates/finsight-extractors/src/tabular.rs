//! Tabular readers: delimited text (CSV) and spreadsheets (Excel family).
//!
//! Both load a header-plus-grid file into the column-major [`Table`] shape.
//! Parse failures are recovered: the reader logs the cause and returns an
//! empty table. An empty file and a structurally malformed file produce
//! distinct log messages so the two cases can be told apart downstream.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value;

use crate::error::ExtractResult;
use crate::types::{parse_scalar, ExtractConfig, ExtractedData, Table};
use crate::FormatReader;

/// Reader for comma-delimited text files.
#[derive(Debug, Clone, Default)]
pub struct CsvReader;

impl CsvReader {
    pub fn new() -> Self {
        Self
    }
}

impl FormatReader for CsvReader {
    fn read(&self, path: &Path, _config: &ExtractConfig) -> ExtractResult<ExtractedData> {
        let raw = std::fs::read(path)?;
        if raw.is_empty() {
            tracing::warn!(path = %path.display(), "empty tabular file, nothing to extract");
            return Ok(ExtractedData::Tabular(Table::new()));
        }

        // Strict column counts: a ragged row is a parse error, recovered
        // below as an empty result.
        let mut reader = csv::ReaderBuilder::new().from_reader(raw.as_slice());

        let header: Vec<String> = match reader.headers() {
            Ok(headers) => headers.iter().map(str::to_string).collect(),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to parse delimited file");
                return Ok(ExtractedData::Tabular(Table::new()));
            }
        };

        let mut rows: Vec<Vec<Value>> = Vec::new();
        for record in reader.records() {
            match record {
                Ok(record) => rows.push(record.iter().map(parse_scalar).collect()),
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "failed to parse delimited file");
                    return Ok(ExtractedData::Tabular(Table::new()));
                }
            }
        }

        Ok(ExtractedData::Tabular(Table::from_rows(&header, &rows)))
    }

    fn extensions(&self) -> &[&str] {
        &["csv"]
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Reader for Excel-family spreadsheets (xlsx, xls, xlsm, xlsb).
///
/// Loads the first worksheet; the first row names the columns.
#[derive(Debug, Clone, Default)]
pub struct ExcelReader;

impl ExcelReader {
    pub fn new() -> Self {
        Self
    }

    fn cell_to_value(cell: &Data) -> Value {
        match cell {
            Data::Int(i) => Value::from(*i),
            Data::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Data::String(s) => Value::String(s.clone()),
            Data::Bool(b) => Value::Bool(*b),
            Data::DateTime(dt) => Value::String(dt.to_string()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
            Data::Error(e) => Value::String(e.to_string()),
            Data::Empty => Value::Null,
        }
    }

    fn cell_to_name(cell: &Data) -> String {
        match cell {
            Data::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl FormatReader for ExcelReader {
    fn read(&self, path: &Path, _config: &ExtractConfig) -> ExtractResult<ExtractedData> {
        let mut workbook = match open_workbook_auto(path) {
            Ok(wb) => wb,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to parse spreadsheet");
                return Ok(ExtractedData::Tabular(Table::new()));
            }
        };

        let range = match workbook.worksheets().into_iter().next() {
            Some((_, range)) => range,
            None => {
                tracing::warn!(path = %path.display(), "empty tabular file, nothing to extract");
                return Ok(ExtractedData::Tabular(Table::new()));
            }
        };

        let mut rows_iter = range.rows();
        let header: Vec<String> = match rows_iter.next() {
            Some(row) => row.iter().map(Self::cell_to_name).collect(),
            None => {
                tracing::warn!(path = %path.display(), "empty tabular file, nothing to extract");
                return Ok(ExtractedData::Tabular(Table::new()));
            }
        };

        let rows: Vec<Vec<Value>> = rows_iter
            .map(|row| row.iter().map(Self::cell_to_value).collect())
            .collect();

        Ok(ExtractedData::Tabular(Table::from_rows(&header, &rows)))
    }

    fn extensions(&self) -> &[&str] {
        &["xlsx", "xls", "xlsm", "xlsb"]
    }

    fn name(&self) -> &str {
        "excel"
    }
}
