//! Return-on-investment metrics.

use finsight_extractors::Table;

use crate::error::MetricsResult;
use crate::table_ops::{column_sum, require_columns};

/// Return on Investment (%): `(Net Income - Initial Investment) / Initial Investment * 100`.
pub fn roi(table: &Table, net_income_col: &str, init_investment_col: &str) -> MetricsResult<f64> {
    require_columns(table, &[net_income_col, init_investment_col])?;

    let total_net_income = column_sum(table, net_income_col);
    let total_init_investment = column_sum(table, init_investment_col);

    if total_init_investment == 0.0 {
        tracing::warn!("total initial investment is zero, reporting an ROI of zero");
        return Ok(0.0);
    }
    Ok((total_net_income - total_init_investment) / total_init_investment * 100.0)
}

/// Return on Equity (%): `Net Income / Equity * 100`.
pub fn roe(table: &Table, net_income_col: &str, equity_col: &str) -> MetricsResult<f64> {
    require_columns(table, &[net_income_col, equity_col])?;

    let total_net_income = column_sum(table, net_income_col);
    let total_equity = column_sum(table, equity_col);

    if total_equity == 0.0 {
        tracing::warn!("total equity is zero, reporting an ROE of zero");
        return Ok(0.0);
    }
    Ok(total_net_income / total_equity * 100.0)
}

/// Return on Assets (%): `Net Income / Total Assets * 100`.
pub fn roa(table: &Table, net_income_col: &str, assets_col: &str) -> MetricsResult<f64> {
    require_columns(table, &[net_income_col, assets_col])?;

    let total_net_income = column_sum(table, net_income_col);
    let total_assets = column_sum(table, assets_col);

    if total_assets == 0.0 {
        tracing::warn!("total assets are zero, reporting an ROA of zero");
        return Ok(0.0);
    }
    Ok(total_net_income / total_assets * 100.0)
}
