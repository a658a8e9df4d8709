//! Closed-form future value estimate
//!
//! A quick headline figure that does not run the monthly engine:
//! - Starting balance compounds annually
//! - Contributions form an ordinary annuity compounded monthly
//! - No fees, taxes or inflation

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureValueEstimate {
    pub future_value: f64,
    /// Growth of the starting balance alone
    pub future_value_starting_only: f64,
    /// Growth of the monthly contributions alone
    pub future_value_contributions_only: f64,
}

/// Estimate the future value of a starting balance plus monthly contributions
///
/// # Arguments
/// * `starting_balance` - Balance at time zero
/// * `monthly_contribution` - Amount added each month
/// * `annual_return_percent` - Annual return in percent (7.0 = 7%)
/// * `years` - Horizon in years
pub fn estimate_future_value(
    starting_balance: f64,
    monthly_contribution: f64,
    annual_return_percent: f64,
    years: u32,
) -> FutureValueEstimate {
    let annual_rate = annual_return_percent / 100.0;
    let years = i32::try_from(years).unwrap_or(i32::MAX);
    let months = years.saturating_mul(12);

    let starting_only = starting_balance * (1.0 + annual_rate).powi(years);

    let contributions_only = if annual_rate > 0.0 {
        let monthly_rate = annual_rate / 12.0;
        monthly_contribution * (((1.0 + monthly_rate).powi(months) - 1.0) / monthly_rate)
    } else {
        monthly_contribution * months as f64
    };

    FutureValueEstimate {
        future_value: starting_only + contributions_only,
        future_value_starting_only: starting_only,
        future_value_contributions_only: contributions_only,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_plan_estimate() {
        let estimate = estimate_future_value(10_000.0, 500.0, 7.0, 30);

        assert_relative_eq!(estimate.future_value_starting_only, 76_122.550_426_620_42, max_relative = 1e-9);
        assert_relative_eq!(estimate.future_value_contributions_only, 609_985.497_887_972_3, max_relative = 1e-9);
        assert_relative_eq!(estimate.future_value, 686_108.048_314_592_7, max_relative = 1e-9);
    }

    #[test]
    fn test_components_sum() {
        let estimate = estimate_future_value(1_000.0, 200.0, 5.0, 10);

        assert_relative_eq!(estimate.future_value_starting_only, 1_628.894_626_777_442, max_relative = 1e-9);
        assert_relative_eq!(estimate.future_value_contributions_only, 31_056.455_889_133_44, max_relative = 1e-9);
        assert_eq!(
            estimate.future_value,
            estimate.future_value_starting_only + estimate.future_value_contributions_only
        );
    }

    #[test]
    fn test_zero_rate() {
        let estimate = estimate_future_value(5_000.0, 250.0, 0.0, 4);

        assert_eq!(estimate.future_value_starting_only, 5_000.0);
        assert_eq!(estimate.future_value_contributions_only, 12_000.0);
        assert_eq!(estimate.future_value, 17_000.0);
    }

    #[test]
    fn test_huge_horizon_saturates() {
        let estimate = estimate_future_value(100.0, 1.0, 0.0, u32::MAX);

        assert_eq!(estimate.future_value_starting_only, 100.0);
        assert_eq!(estimate.future_value_contributions_only, i32::MAX as f64);
    }
}
