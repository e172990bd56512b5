//! Column helpers shared by the metric functions.

use std::cmp::Ordering;

use finsight_extractors::Table;
use serde_json::Value;

use crate::error::{MetricsError, MetricsResult};

/// Check that every named column exists, collecting all absent names.
pub(crate) fn require_columns(table: &Table, names: &[&str]) -> MetricsResult<()> {
    let missing: Vec<String> = names
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| name.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        tracing::error!(?missing, "missing columns in table");
        Err(MetricsError::MissingColumns(missing))
    }
}

/// Sum the numeric cells of a column, skipping missing and non-numeric
/// values.
pub(crate) fn column_sum(table: &Table, name: &str) -> f64 {
    table
        .column(name)
        .map(|column| column.values().filter_map(Value::as_f64).sum())
        .unwrap_or(0.0)
}

/// Numeric values of `value_col` ordered by the corresponding cells of
/// `date_col`, ascending. Rows missing a date or a numeric value are
/// skipped.
pub(crate) fn series_by_date(table: &Table, value_col: &str, date_col: &str) -> Vec<f64> {
    let (Some(dates), Some(values)) = (table.column(date_col), table.column(value_col)) else {
        return Vec::new();
    };

    let mut rows: Vec<(&Value, usize)> = dates.iter().map(|(idx, date)| (date, *idx)).collect();
    rows.sort_by(|a, b| compare_cells(a.0, b.0));

    rows.into_iter()
        .filter_map(|(_, idx)| values.get(&idx).and_then(Value::as_f64))
        .collect()
}

/// Order cells numerically when both sides are numbers, lexically otherwise.
fn compare_cells(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => cell_text(a).cmp(&cell_text(b)),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
