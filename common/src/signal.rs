// Signal types
// Raw signals arrive as untyped field maps; canonical signals are the
// normalized shape every downstream component consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An untyped signal record as fetched from an external source.
///
/// Sources disagree on field naming (`pair` vs `symbol`, `confidence_score`
/// vs `confidence`, ...) and scales, so no invariants hold here. The field
/// resolver maps this into a [`CanonicalSignal`].
pub type RawSignal = serde_json::Map<String, serde_json::Value>;

/// Trade direction of a signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    Long,
    Short,
    /// Direction could not be resolved; downstream components must
    /// tolerate this rather than fail.
    Unknown,
}

impl Side {
    /// Parse a raw direction string, case-insensitively.
    ///
    /// Accepts both alias vocabularies seen in the wild:
    /// `LONG`/`SHORT` and `BUY`/`SELL`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LONG" | "BUY" => Side::Long,
            "SHORT" | "SELL" => Side::Short,
            _ => Side::Unknown,
        }
    }
}

/// Lifecycle status of a signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SignalStatus {
    Pending,
    Approved,
    Rejected,
}

impl SignalStatus {
    /// Parse a raw status string, case-insensitively.
    ///
    /// Unrecognized values fall back to `Pending` so that a signal with a
    /// garbled status is still evaluated rather than dropped.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "APPROVED" => SignalStatus::Approved,
            "REJECTED" => SignalStatus::Rejected,
            _ => SignalStatus::Pending,
        }
    }
}

/// A signal normalized into the canonical shape.
///
/// Invariant: `confidence` is an integer in `0..=100` regardless of the
/// source scale. Price levels are optional; risk is only computable when
/// `entry_price != stop_loss`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalSignal {
    pub id: String,
    pub instrument: String,
    pub side: Side,
    pub confidence: u8,
    pub status: SignalStatus,
    pub entry_price: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
}

impl CanonicalSignal {
    /// True when all three price levels are present.
    pub fn has_price_levels(&self) -> bool {
        self.entry_price.is_some() && self.stop_loss.is_some() && self.take_profit.is_some()
    }

    /// Return a copy of this signal with the given status.
    pub fn with_status(&self, status: SignalStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parse_is_case_insensitive() {
        assert_eq!(Side::parse("LONG"), Side::Long);
        assert_eq!(Side::parse("long"), Side::Long);
        assert_eq!(Side::parse("Long"), Side::Long);
        assert_eq!(Side::parse("short"), Side::Short);
    }

    #[test]
    fn test_side_parse_accepts_buy_sell_vocabulary() {
        assert_eq!(Side::parse("BUY"), Side::Long);
        assert_eq!(Side::parse("sell"), Side::Short);
    }

    #[test]
    fn test_side_parse_unknown() {
        assert_eq!(Side::parse("sideways"), Side::Unknown);
        assert_eq!(Side::parse(""), Side::Unknown);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(SignalStatus::parse("APPROVED"), SignalStatus::Approved);
        assert_eq!(SignalStatus::parse("rejected"), SignalStatus::Rejected);
        assert_eq!(SignalStatus::parse("Pending"), SignalStatus::Pending);
        assert_eq!(SignalStatus::parse("???"), SignalStatus::Pending);
    }
}
