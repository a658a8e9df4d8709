//! What-if market drop applied to a displayed value

use serde::{Deserialize, Serialize};

/// Drop applied by the "simulate a crash" toggle
pub const DEFAULT_SHOCK_FRACTION: f64 = 0.2;

/// A scalar shock: the displayed value falls by `fraction`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketShock {
    pub fraction: f64,
}

impl Default for MarketShock {
    fn default() -> Self {
        Self { fraction: DEFAULT_SHOCK_FRACTION }
    }
}

/// Transient shocked figures for one displayed point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShockedView {
    pub display_value: f64,
    pub display_returns: f64,
}

impl MarketShock {
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    /// Shock a displayed value against the displayed total investment
    pub fn apply(&self, displayed_value: f64, displayed_total_investment: f64) -> ShockedView {
        let display_value = displayed_value * (1.0 - self.fraction);
        ShockedView {
            display_value,
            display_returns: display_value - displayed_total_investment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_drop() {
        let view = MarketShock::default().apply(100_000.0, 60_000.0);

        assert_relative_eq!(view.display_value, 80_000.0, max_relative = 1e-12);
        assert_relative_eq!(view.display_returns, 20_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_shock_can_push_returns_negative() {
        let view = MarketShock::new(0.5).apply(100_000.0, 60_000.0);

        assert_relative_eq!(view.display_value, 50_000.0);
        assert_relative_eq!(view.display_returns, -10_000.0);
    }

    #[test]
    fn test_zero_shock_is_identity() {
        let view = MarketShock::new(0.0).apply(1234.5, 1000.0);

        assert_eq!(view.display_value, 1234.5);
        assert_eq!(view.display_returns, 234.5);
    }
}
