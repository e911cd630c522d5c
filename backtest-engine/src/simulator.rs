// Outcome Simulator
// Derives the monetary result of acting on a signal from its price levels
// and a stable hash of its identity. No wall-clock randomness: the same
// signal id always resolves the same way, which keeps backtests
// reproducible.

use common::{CanonicalSignal, SignalStatus, TradeOutcome, TradeResult};
use rust_decimal::prelude::*;

/// Fraction of simulated trades that hit take-profit, in aggregate.
pub const WIN_PROBABILITY: f64 = 0.60;

/// Map a signal identity to a stable value in `[0, 1)`.
///
/// FNV-1a over the id bytes. The low 53 bits become the mantissa: for the
/// short sequential ids signal feeds produce, FNV mixes the low half of
/// the hash far better than the high half, and the aggregate win-rate
/// calibration depends on that uniformity.
pub fn identity_unit(id: &str) -> f64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in id.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    (hash & ((1u64 << 53) - 1)) as f64 / (1u64 << 53) as f64
}

/// Simulate the outcome of a single signal.
///
/// Rejected signals are avoided trades (neutral); signals without full
/// price data, or with undefined risk, cannot be simulated and come back
/// unknown rather than being dropped.
pub fn simulate(signal: &CanonicalSignal) -> TradeOutcome {
    if signal.status == SignalStatus::Rejected {
        return TradeOutcome::neutral();
    }

    let (entry, stop, target) = match (signal.entry_price, signal.stop_loss, signal.take_profit) {
        (Some(entry), Some(stop), Some(target)) => (entry, stop, target),
        _ => return TradeOutcome::unknown(),
    };

    let risk = (entry - stop).abs();
    let reward = (target - entry).abs();
    if risk.is_zero() || entry.is_zero() {
        return TradeOutcome::unknown();
    }

    if identity_unit(&signal.id) < WIN_PROBABILITY {
        TradeOutcome {
            result: TradeResult::Win,
            r_multiple: (reward / risk).to_f64().unwrap_or(0.0),
            profit_percent: (reward / entry).to_f64().unwrap_or(0.0) * 100.0,
        }
    } else {
        TradeOutcome {
            result: TradeResult::Loss,
            r_multiple: -1.0,
            profit_percent: -(risk / entry).to_f64().unwrap_or(0.0) * 100.0,
        }
    }
}
