//! Running account state carried between projection months

use crate::plan::ProjectionInput;

/// Balance, principal and fee totals as the projection advances
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Account balance after growth and fees, before any tax adjustment
    pub balance: f64,
    /// Starting balance plus all contributions to date
    pub principal: f64,
    /// Fees removed since year 0
    pub cumulative_fees: f64,

    monthly_contribution: f64,
    monthly_return_rate: f64,
    monthly_fee_rate: f64,
}

/// Contributions and fees accrued over one projection year
#[derive(Debug, Clone, Copy, Default)]
pub struct YearTotals {
    pub contributions: f64,
    pub fees: f64,
}

impl ProjectionState {
    pub fn new(input: &ProjectionInput) -> Self {
        Self {
            balance: input.starting_balance,
            principal: input.starting_balance,
            cumulative_fees: 0.0,
            monthly_contribution: input.monthly_contribution(),
            monthly_return_rate: input.monthly_return_rate(),
            monthly_fee_rate: input.monthly_fee_rate(),
        }
    }

    /// Advance one month: contribute, grow, then charge fees on the grown balance.
    /// Returns the fee charged this month.
    pub fn advance_month(&mut self) -> f64 {
        self.balance += self.monthly_contribution;
        self.balance *= 1.0 + self.monthly_return_rate;
        let fee = self.balance * self.monthly_fee_rate;
        self.balance -= fee;
        fee
    }

    /// Run the months of one year and fold the totals into principal and fees
    pub fn advance_year(&mut self, months: u32) -> YearTotals {
        let mut totals = YearTotals::default();
        for _ in 0..months {
            totals.fees += self.advance_month();
            totals.contributions += self.monthly_contribution;
        }
        self.principal += totals.contributions;
        self.cumulative_fees += totals.fees;
        totals
    }

    /// Whether this plan can produce any growth or drag at all
    pub fn is_flat(&self) -> bool {
        self.monthly_return_rate == 0.0 && self.monthly_fee_rate == 0.0
    }
}
