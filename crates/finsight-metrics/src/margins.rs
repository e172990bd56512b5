//! Margin and profitability metrics.

use finsight_extractors::Table;

use crate::error::MetricsResult;
use crate::table_ops::{column_sum, require_columns};

/// Gross Margin (%): `(Revenue - COGS) / Revenue * 100`.
///
/// The percentage of revenue that exceeds the cost of goods sold.
pub fn gross_margin(table: &Table, revenue_col: &str, cogs_col: &str) -> MetricsResult<f64> {
    require_columns(table, &[revenue_col, cogs_col])?;

    let total_revenue = column_sum(table, revenue_col);
    let total_cogs = column_sum(table, cogs_col);

    if total_revenue == 0.0 {
        tracing::warn!("total revenue is zero, reporting a gross margin of zero");
        return Ok(0.0);
    }
    Ok((total_revenue - total_cogs) / total_revenue * 100.0)
}

/// Operating Margin (%): `Operating Income / Revenue * 100`.
pub fn operating_margin(
    table: &Table,
    revenue_col: &str,
    operating_income_col: &str,
) -> MetricsResult<f64> {
    require_columns(table, &[revenue_col, operating_income_col])?;

    let total_revenue = column_sum(table, revenue_col);
    let total_operating_income = column_sum(table, operating_income_col);

    if total_revenue == 0.0 {
        tracing::warn!("total revenue is zero, reporting an operating margin of zero");
        return Ok(0.0);
    }
    Ok(total_operating_income / total_revenue * 100.0)
}

/// Net Margin (%): `Net Income / Revenue * 100`.
pub fn net_margin(table: &Table, net_income_col: &str, revenue_col: &str) -> MetricsResult<f64> {
    require_columns(table, &[net_income_col, revenue_col])?;

    let total_net_income = column_sum(table, net_income_col);
    let total_revenue = column_sum(table, revenue_col);

    if total_revenue == 0.0 {
        tracing::warn!("total revenue is zero, reporting a net margin of zero");
        return Ok(0.0);
    }
    Ok(total_net_income / total_revenue * 100.0)
}
