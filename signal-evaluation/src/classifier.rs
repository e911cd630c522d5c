// Decision Classifier
// Pure classification of a canonical signal into approve/reject/hold.

use common::{CanonicalSignal, Decision, DecisionOutcome};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

// Confidence-only thresholds.
const APPROVE_CONFIDENCE: u8 = 75;
const REVIEW_CONFIDENCE: u8 = 60;

// Risk/reward mode thresholds.
const STRONG_RR: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
const MIN_RR: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
const MARGINAL_CONFIDENCE: u8 = 70;

/// Classify a signal into a decision.
///
/// Deterministic and side-effect free: calling this twice on the same
/// signal yields the same decision. When all three price levels are
/// present, the risk/reward mode takes priority; otherwise the decision
/// falls back to confidence alone.
pub fn classify(signal: &CanonicalSignal) -> Decision {
    match (signal.entry_price, signal.stop_loss, signal.take_profit) {
        (Some(entry), Some(stop), Some(target)) => {
            classify_risk_reward(signal.confidence, entry, stop, target)
        }
        _ => classify_confidence(signal.confidence),
    }
}

fn classify_risk_reward(confidence: u8, entry: Decimal, stop: Decimal, target: Decimal) -> Decision {
    let risk = (entry - stop).abs();
    let reward = (target - entry).abs();
    // Undefined risk is treated as a zero ratio, never a division error.
    let rr = if risk.is_zero() {
        Decimal::ZERO
    } else {
        reward / risk
    };

    let ratio = rr.to_f64().unwrap_or(0.0);
    if rr >= STRONG_RR && confidence >= APPROVE_CONFIDENCE {
        Decision::new(
            DecisionOutcome::Approved,
            format!("Strong R:R {:.2}, high confidence: {}%", ratio, confidence),
        )
    } else if rr < MIN_RR {
        // A poor ratio rejects the signal regardless of confidence.
        Decision::new(
            DecisionOutcome::Rejected,
            format!("Poor risk/reward ratio: {:.2}", ratio),
        )
    } else if confidence < MARGINAL_CONFIDENCE {
        Decision::new(
            DecisionOutcome::Rejected,
            format!("Low confidence: {}% for R:R {:.2}", confidence, ratio),
        )
    } else {
        Decision::new(
            DecisionOutcome::Pending,
            format!("Marginal signal: R:R {:.2}, confidence {}% - needs review", ratio, confidence),
        )
    }
}

fn classify_confidence(confidence: u8) -> Decision {
    if confidence >= APPROVE_CONFIDENCE {
        Decision::new(
            DecisionOutcome::Approved,
            format!("High confidence: {}%", confidence),
        )
    } else if confidence >= REVIEW_CONFIDENCE {
        Decision::new(
            DecisionOutcome::Pending,
            format!("Medium confidence: {}% - needs review", confidence),
        )
    } else {
        Decision::new(
            DecisionOutcome::Rejected,
            format!("Low confidence: {}%", confidence),
        )
    }
}
