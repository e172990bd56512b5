//! Period-over-period growth indicators.

use finsight_extractors::Table;

use crate::error::MetricsResult;
use crate::table_ops::{require_columns, series_by_date};

/// Revenue Growth (%): `(Revenue[t] - Revenue[t-1]) / Revenue[t-1] * 100`,
/// computed over the last two rows after sorting by the date column
/// ascending.
pub fn revenue_growth(table: &Table, revenue_col: &str, date_col: &str) -> MetricsResult<f64> {
    require_columns(table, &[revenue_col, date_col])?;
    Ok(period_over_period(
        &series_by_date(table, revenue_col, date_col),
        "revenue growth",
    ))
}

/// Net Income Growth (%): same shape as [`revenue_growth`], over the net
/// income column.
pub fn net_income_growth(table: &Table, net_income_col: &str, date_col: &str) -> MetricsResult<f64> {
    require_columns(table, &[net_income_col, date_col])?;
    Ok(period_over_period(
        &series_by_date(table, net_income_col, date_col),
        "net income growth",
    ))
}

/// Growth between the last two values of a date-sorted series.
fn period_over_period(values: &[f64], metric: &str) -> f64 {
    if values.len() < 2 {
        tracing::warn!(metric, "not enough data points to compute growth, reporting zero");
        return 0.0;
    }
    let previous = values[values.len() - 2];
    let latest = values[values.len() - 1];
    if previous == 0.0 {
        tracing::warn!(metric, "previous period is zero, reporting zero growth");
        return 0.0;
    }
    (latest - previous) / previous * 100.0
}
