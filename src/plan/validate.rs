//! Range checks applied by callers before a projection is run
//!
//! The engine assumes valid input; these bounds mirror the calculator form.

use super::ProjectionInput;
use thiserror::Error;

pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 100;
pub const MAX_RETURN_PERCENT: f64 = 100.0;
pub const MAX_FEE_PERCENT: f64 = 10.0;
pub const MAX_TAX_RATE: f64 = 100.0;
pub const MAX_INFLATION_RATE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("years must be between 1 and 100, got {0}")]
    Years(u32),
}

fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value < min || value > max {
        return Err(InputError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

impl ProjectionInput {
    /// Reject inputs outside the documented ranges
    pub fn validate(&self) -> Result<(), InputError> {
        check("startingBalance", self.starting_balance, 0.0, f64::MAX)?;
        check("contributionAmount", self.contribution_amount, 0.0, f64::MAX)?;
        check("annualReturnPercent", self.annual_return_percent, 0.0, MAX_RETURN_PERCENT)?;
        check("annualFeePercent", self.annual_fee_percent, 0.0, MAX_FEE_PERCENT)?;
        if !(MIN_YEARS..=MAX_YEARS).contains(&self.years) {
            return Err(InputError::Years(self.years));
        }
        check("marginalTaxRate", self.marginal_tax_rate, 0.0, MAX_TAX_RATE)?;
        check("inflationRate", self.inflation_rate, 0.0, MAX_INFLATION_RATE)?;
        Ok(())
    }
}
