//! finsight-metrics - Financial ratio calculations over column-major tables.
//!
//! Every function takes a [`Table`] plus explicit column-name arguments,
//! sums the relevant columns (skipping missing and non-numeric cells), and
//! returns one ratio as a percentage. EBITDA is the exception: it returns
//! an absolute amount.
//!
//! Shared conventions:
//! - a required column absent from the table raises
//!   [`MetricsError::MissingColumns`] listing *every* absent name;
//! - a zero denominator is a logged warning, not an error: the metric
//!   reports `0.0` instead of propagating a division failure.
//!
//! # Example
//!
//! ```ignore
//! use finsight_metrics::gross_margin;
//!
//! let margin = gross_margin(&table, "Revenue", "COGS")?;
//! ```

mod error;
mod growth;
mod health;
mod margins;
mod returns;
mod table_ops;

pub use error::{MetricsError, MetricsResult};
pub use growth::{net_income_growth, revenue_growth};
pub use health::{debt_ratio, ebitda};
pub use margins::{gross_margin, net_margin, operating_margin};
pub use returns::{roa, roe, roi};

pub use finsight_extractors::Table;
