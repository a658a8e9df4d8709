//! Yearly output rows

use serde::{Deserialize, Serialize};

/// One year of a projection. Index in the series equals `year`.
///
/// Serialized in camelCase to match the chart and breakdown consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyDataPoint {
    pub year: u32,

    /// Starting balance plus contributions to date, independent of growth
    pub total_investment: f64,

    /// Balance after growth and fees, before tax adjustment
    pub pre_tax_value: f64,

    /// Balance after tax adjustment (nominal dollars)
    pub projected_value: f64,

    /// `projected_value - total_investment`
    pub total_returns: f64,

    /// Principal added this year. Year 0 reports the starting balance.
    pub annual_contributions: f64,

    /// Growth attributable to compounding this year, may be negative
    pub annual_returns: f64,

    /// Cumulative fees removed to date
    pub lost_to_fees: f64,

    /// Tax assessed against growth this year (not cumulative)
    pub lost_to_taxes: f64,

    /// Projected value in today's dollars when inflation adjustment is on
    pub inflation_adjusted_value: f64,
}

impl YearlyDataPoint {
    /// The year-0 row: everything is the starting balance, nothing has accrued
    pub fn opening(starting_balance: f64) -> Self {
        Self {
            year: 0,
            total_investment: starting_balance,
            pre_tax_value: starting_balance,
            projected_value: starting_balance,
            total_returns: 0.0,
            annual_contributions: starting_balance,
            annual_returns: 0.0,
            lost_to_fees: 0.0,
            lost_to_taxes: 0.0,
            inflation_adjusted_value: starting_balance,
        }
    }
}
