// Equity Accumulator
// Folds an ordered sequence of trade outcomes into an equity curve.
// Position sizing is fixed-fractional: each trade risks a constant
// percentage of current capital.

use common::{EquityPoint, TradeOutcome};

/// Accumulates capital across one run.
///
/// The curve always starts with the initial capital and gains one point
/// per applied outcome, so its final length is `outcomes + 1`. Neutral
/// and unknown outcomes carry a zero R-multiple and therefore leave
/// capital unchanged while still appending a point. Drawdown is derived
/// from the finished curve by the metrics aggregator, not tracked here.
#[derive(Debug, Clone)]
pub struct EquityAccumulator {
    capital: f64,
    risk_fraction: f64,
    curve: Vec<EquityPoint>,
}

impl EquityAccumulator {
    /// `initial_capital` and `max_risk_percent` must already be validated
    /// at the boundary (positive capital, risk in `(0, 100]`).
    pub fn new(initial_capital: f64, max_risk_percent: f64) -> Self {
        Self {
            capital: initial_capital,
            risk_fraction: max_risk_percent / 100.0,
            curve: vec![EquityPoint {
                capital: initial_capital,
            }],
        }
    }

    /// Apply one outcome in sequence.
    pub fn apply(&mut self, outcome: &TradeOutcome) {
        let risk_amount = self.capital * self.risk_fraction;
        self.capital += risk_amount * outcome.r_multiple;
        self.curve.push(EquityPoint {
            capital: self.capital,
        });
    }

    pub fn curve(&self) -> &[EquityPoint] {
        &self.curve
    }

    pub fn into_curve(self) -> Vec<EquityPoint> {
        self.curve
    }
}
