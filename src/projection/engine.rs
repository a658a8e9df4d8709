//! Year-by-year projection of a single plan

use super::{ProjectionState, YearlyDataPoint, MONTHS_PER_YEAR, ROUNDING_EPSILON};
use crate::plan::{AccountType, ProjectionInput};

/// Project a plan over its horizon.
///
/// Returns `years + 1` points, year 0 first. Each year runs twelve months of
/// contribute, grow, then charge fees; tax and inflation adjustments are
/// applied to the year-end balance only and never feed back into the
/// balance that keeps compounding.
///
/// The input is assumed to be validated. A horizon of 0 years returns only
/// the opening point.
pub fn project(input: &ProjectionInput) -> Vec<YearlyDataPoint> {
    let mut points = Vec::with_capacity(input.years as usize + 1);
    points.push(YearlyDataPoint::opening(input.starting_balance));

    let mut state = ProjectionState::new(input);
    let mut previous_value = input.starting_balance;

    for year in 1..=input.years {
        let totals = state.advance_year(MONTHS_PER_YEAR);

        let pre_tax_value = state.balance;
        let lost_to_taxes = taxes_on_growth(input, pre_tax_value, state.principal);
        let projected_value = pre_tax_value - lost_to_taxes;

        let inflation_adjusted_value = if input.adjust_for_inflation {
            projected_value / input.inflation_divisor(year)
        } else {
            projected_value
        };

        let raw_returns = projected_value - previous_value - totals.contributions;
        let annual_returns = if !raw_returns.is_finite() {
            log::warn!("Non-finite annual return in year {}, reporting 0", year);
            0.0
        } else if state.is_flat()
            && raw_returns.abs() <= ROUNDING_EPSILON * projected_value.abs().max(1.0)
        {
            // Summation order differs between balance and principal
            0.0
        } else {
            raw_returns
        };

        points.push(YearlyDataPoint {
            year,
            total_investment: state.principal,
            pre_tax_value,
            projected_value,
            total_returns: projected_value - state.principal,
            annual_contributions: totals.contributions,
            annual_returns,
            lost_to_fees: state.cumulative_fees,
            lost_to_taxes,
            inflation_adjusted_value,
        });

        previous_value = projected_value;
    }

    if let Some(last) = points.last() {
        log::debug!(
            "Projected {} years: invested={:.2}, value={:.2}, fees={:.2}",
            input.years, last.total_investment, last.projected_value, last.lost_to_fees
        );
    }

    points
}

/// Tax on growth above principal, assessed fresh each year.
/// Never negative; always 0 for Roth accounts.
fn taxes_on_growth(input: &ProjectionInput, pre_tax_value: f64, principal: f64) -> f64 {
    match input.account_type {
        AccountType::Roth => 0.0,
        AccountType::Traditional => {
            ((pre_tax_value - principal) * input.marginal_tax_rate / 100.0).max(0.0)
        }
    }
}
