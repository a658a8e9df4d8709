//! Read-only views over a computed projection for presentation
//!
//! Nothing here mutates or recomputes the series; every view is derived from
//! the selected points and discarded when the selection changes.

mod shock;
mod summary;
mod export;

pub use shock::{MarketShock, ShockedView, DEFAULT_SHOCK_FRACTION};
pub use summary::{annual_breakdown, BreakdownRow, DisplaySummary};
pub use export::write_breakdown_csv;
