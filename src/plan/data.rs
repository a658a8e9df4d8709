//! Projection input data structures

use serde::{Deserialize, Serialize};

/// How often the investor contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContributionFrequency {
    Weekly,
    #[serde(alias = "biweekly")]
    BiWeekly,
    Monthly,
    Quarterly,
    Annually,
}

impl ContributionFrequency {
    /// Number of contributions made in an average month.
    /// Weekly is fixed at 4.33, not 52/12.
    pub fn per_month(self) -> f64 {
        match self {
            ContributionFrequency::Weekly => 4.33,
            ContributionFrequency::BiWeekly => 2.165,
            ContributionFrequency::Monthly => 1.0,
            ContributionFrequency::Quarterly => 1.0 / 3.0,
            ContributionFrequency::Annually => 1.0 / 12.0,
        }
    }
}

/// Tax treatment of the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Contributions already taxed; projected values are not reduced
    Roth,
    /// Growth above principal taxed each year at the marginal rate
    Traditional,
}

impl AccountType {
    pub fn display_name(self) -> &'static str {
        match self {
            AccountType::Roth => "Roth IRA",
            AccountType::Traditional => "Traditional IRA",
        }
    }
}

/// Parameters for a single projection
///
/// Field names serialize in camelCase so saved plans stay compatible with
/// the calculator's stored form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Balance at time zero
    #[serde(default = "default_starting_balance", alias = "initialInvestment")]
    pub starting_balance: f64,

    /// Amount added each contribution period
    #[serde(default = "default_contribution_amount")]
    pub contribution_amount: f64,

    #[serde(default = "default_frequency")]
    pub contribution_frequency: ContributionFrequency,

    /// Nominal annual growth rate in percent (7.0 = 7%)
    #[serde(default = "default_annual_return", alias = "interestRate")]
    pub annual_return_percent: f64,

    /// Expense ratio in percent, charged monthly
    #[serde(default = "default_annual_fee", alias = "annualFees")]
    pub annual_fee_percent: f64,

    /// Projection horizon in years
    #[serde(default = "default_years")]
    pub years: u32,

    #[serde(default = "default_account_type")]
    pub account_type: AccountType,

    /// Flat marginal tax rate in percent, only used for traditional accounts
    #[serde(default = "default_marginal_tax_rate")]
    pub marginal_tax_rate: f64,

    #[serde(default)]
    pub adjust_for_inflation: bool,

    /// Assumed annual inflation in percent, only used when adjusting
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,
}

fn default_starting_balance() -> f64 { 10_000.0 }
fn default_contribution_amount() -> f64 { 500.0 }
fn default_frequency() -> ContributionFrequency { ContributionFrequency::Monthly }
fn default_annual_return() -> f64 { 7.0 }
fn default_annual_fee() -> f64 { 0.25 }
fn default_years() -> u32 { 30 }
fn default_account_type() -> AccountType { AccountType::Roth }
fn default_marginal_tax_rate() -> f64 { 25.0 }
fn default_inflation_rate() -> f64 { 3.0 }

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            starting_balance: 10_000.0,
            contribution_amount: 500.0,
            contribution_frequency: ContributionFrequency::Monthly,
            annual_return_percent: 7.0,
            annual_fee_percent: 0.25,
            years: 30,
            account_type: AccountType::Roth,
            marginal_tax_rate: 25.0,
            adjust_for_inflation: false,
            inflation_rate: 3.0,
        }
    }
}

impl ProjectionInput {
    /// Contribution converted to an equivalent monthly amount
    pub fn monthly_contribution(&self) -> f64 {
        self.contribution_amount * self.contribution_frequency.per_month()
    }

    /// Monthly growth rate (simple division of the annual rate)
    pub fn monthly_return_rate(&self) -> f64 {
        self.annual_return_percent / 100.0 / 12.0
    }

    /// Monthly fee drag as a fraction of balance
    pub fn monthly_fee_rate(&self) -> f64 {
        self.annual_fee_percent / 100.0 / 12.0
    }

    /// Compound discount factor `(1 + inflation)^year`
    pub fn inflation_divisor(&self, year: u32) -> f64 {
        (1.0 + self.inflation_rate / 100.0).powi(year as i32)
    }
}
