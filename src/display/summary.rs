//! Selected-year headline figures and the annual breakdown table

use super::{MarketShock, ShockedView};
use crate::plan::ProjectionInput;
use crate::projection::YearlyDataPoint;
use serde::{Deserialize, Serialize};

/// Headline figures for the year selected on the slider
///
/// When the plan adjusts for inflation every currency figure is expressed in
/// today's dollars; otherwise nominal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySummary {
    pub year: u32,
    pub projected_value: f64,
    pub total_investment: f64,
    /// Market growth: `projected_value - total_investment`
    pub total_returns: f64,
    pub lost_to_taxes: f64,
    pub lost_to_fees: f64,
    pub inflation_adjusted: bool,
    /// Present when a market shock is being simulated
    pub shock: Option<ShockedView>,
}

impl DisplaySummary {
    /// Build the summary for `year`, or `None` if the series does not reach it
    pub fn for_year(
        points: &[YearlyDataPoint],
        input: &ProjectionInput,
        year: u32,
        shock: Option<MarketShock>,
    ) -> Option<Self> {
        let point = points.get(year as usize)?;

        let (projected_value, total_investment, lost_to_taxes, lost_to_fees) =
            if input.adjust_for_inflation {
                let divisor = input.inflation_divisor(point.year);
                (
                    point.inflation_adjusted_value,
                    point.total_investment / divisor,
                    point.lost_to_taxes / divisor,
                    point.lost_to_fees / divisor,
                )
            } else {
                (
                    point.projected_value,
                    point.total_investment,
                    point.lost_to_taxes,
                    point.lost_to_fees,
                )
            };

        Some(Self {
            year: point.year,
            projected_value,
            total_investment,
            total_returns: projected_value - total_investment,
            lost_to_taxes,
            lost_to_fees,
            inflation_adjusted: input.adjust_for_inflation,
            shock: shock.map(|s| s.apply(projected_value, total_investment)),
        })
    }

    /// Value to show as the headline: shocked if a shock is active
    pub fn headline_value(&self) -> f64 {
        self.shock.map_or(self.projected_value, |s| s.display_value)
    }

    /// Returns to show next to the headline
    pub fn headline_returns(&self) -> f64 {
        self.shock.map_or(self.total_returns, |s| s.display_returns)
    }
}

/// One row of the year-by-year table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRow {
    pub year: u32,
    pub contributions: f64,
    pub returns: f64,
    pub end_value: f64,
}

impl BreakdownRow {
    pub fn is_gain(&self) -> bool {
        self.returns >= 0.0
    }
}

/// Rows for years 1..=N. Year 0 is omitted since its contribution figure is
/// the starting balance rather than a real period contribution.
pub fn annual_breakdown(points: &[YearlyDataPoint], adjust_for_inflation: bool) -> Vec<BreakdownRow> {
    points
        .iter()
        .filter(|p| p.year > 0)
        .map(|p| BreakdownRow {
            year: p.year,
            contributions: p.annual_contributions,
            returns: p.annual_returns,
            end_value: if adjust_for_inflation {
                p.inflation_adjusted_value
            } else {
                p.projected_value
            },
        })
        .collect()
}
