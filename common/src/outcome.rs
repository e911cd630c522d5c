// Trade outcome types
// The simulated result of acting on (or avoiding) a single signal.

use serde::{Deserialize, Serialize};

/// How a simulated trade resolved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TradeResult {
    Win,
    Loss,
    /// An avoided trade (rejected signal) - not a loss.
    Neutral,
    /// Price data was missing or degenerate; recorded but excluded from
    /// profit and drawdown statistics.
    Unknown,
}

impl TradeResult {
    /// True for outcomes that actually moved capital (win or loss).
    pub fn is_decided(&self) -> bool {
        matches!(self, TradeResult::Win | TradeResult::Loss)
    }
}

/// Monetary outcome of one simulated signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeOutcome {
    pub result: TradeResult,
    /// Profit or loss as a multiple of the amount risked.
    pub r_multiple: f64,
    /// Profit or loss relative to the entry price, in percent.
    pub profit_percent: f64,
}

impl TradeOutcome {
    /// An avoided trade: zero risk, zero profit.
    pub fn neutral() -> Self {
        Self {
            result: TradeResult::Neutral,
            r_multiple: 0.0,
            profit_percent: 0.0,
        }
    }

    /// A signal that could not be simulated for lack of price data.
    pub fn unknown() -> Self {
        Self {
            result: TradeResult::Unknown,
            r_multiple: 0.0,
            profit_percent: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decided_results() {
        assert!(TradeResult::Win.is_decided());
        assert!(TradeResult::Loss.is_decided());
        assert!(!TradeResult::Neutral.is_decided());
        assert!(!TradeResult::Unknown.is_decided());
    }

    #[test]
    fn test_zero_impact_constructors() {
        assert_eq!(TradeOutcome::neutral().r_multiple, 0.0);
        assert_eq!(TradeOutcome::unknown().profit_percent, 0.0);
    }
}
