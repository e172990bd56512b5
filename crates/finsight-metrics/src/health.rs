//! Financial health indicators.

use finsight_extractors::Table;

use crate::error::MetricsResult;
use crate::table_ops::{column_sum, require_columns};

/// EBITDA (absolute amount): `Operating Income + Depreciation + Amortization`.
///
/// Sums only, no division, so there is no zero-denominator case.
pub fn ebitda(
    table: &Table,
    operating_income_col: &str,
    depreciation_col: &str,
    amortization_col: &str,
) -> MetricsResult<f64> {
    require_columns(
        table,
        &[operating_income_col, depreciation_col, amortization_col],
    )?;

    Ok(column_sum(table, operating_income_col)
        + column_sum(table, depreciation_col)
        + column_sum(table, amortization_col))
}

/// Debt Ratio (%): `Total Debt / Total Assets * 100`.
pub fn debt_ratio(table: &Table, debt_col: &str, assets_col: &str) -> MetricsResult<f64> {
    require_columns(table, &[debt_col, assets_col])?;

    let total_debt = column_sum(table, debt_col);
    let total_assets = column_sum(table, assets_col);

    if total_assets == 0.0 {
        tracing::warn!("total assets are zero, reporting a debt ratio of zero");
        return Ok(0.0);
    }
    Ok(total_debt / total_assets * 100.0)
}
