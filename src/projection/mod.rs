//! Projection engine for recurring investment plans

mod state;
mod engine;
mod point;
mod estimate;
mod batch;

pub use state::{ProjectionState, YearTotals};
pub use engine::project;
pub use point::YearlyDataPoint;
pub use estimate::{estimate_future_value, FutureValueEstimate};
pub use batch::project_batch;

// ============================================================================
// Engine constants
// ============================================================================
// Compounding, contributions and fees are all applied monthly.
// Results are reported once per year at year end.

/// Months simulated per projection year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Relative tolerance used to snap zero-growth annual returns to exactly 0
pub const ROUNDING_EPSILON: f64 = 1e-9;
