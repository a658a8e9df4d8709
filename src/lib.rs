//! Wealth Projection - deterministic projection engine for recurring investment plans
//!
//! This library provides:
//! - Year-by-year projections with monthly compounding and fee drag
//! - Roth and traditional (growth-taxed) account treatment
//! - Inflation normalization to today's dollars
//! - Display helpers: selected-year summaries, market-drop what-ifs, annual breakdowns
//! - A closed-form future value estimate

pub mod plan;
pub mod projection;
pub mod display;

// Re-export commonly used types
pub use plan::{ProjectionInput, ContributionFrequency, AccountType, InputError};
pub use projection::{project, project_batch, YearlyDataPoint};
pub use display::{DisplaySummary, MarketShock};
