// Metrics Aggregator
// Reduces a completed run's outcomes and equity curve into the summary
// statistics record. Pure derivation; nothing here mutates run state.

use common::{EquityPoint, Metrics, TradeOutcome, TradeResult};

/// Aggregate run-level statistics.
///
/// Degenerate inputs resolve to sentinel values, never errors: an empty
/// run yields all-zero counts, and a run with no decided trades reports a
/// zero winrate instead of dividing by zero.
pub fn aggregate(
    outcomes: &[TradeOutcome],
    equity_curve: &[EquityPoint],
    initial_capital: f64,
) -> Metrics {
    let mut metrics = Metrics::empty(initial_capital);
    metrics.total_trades = outcomes.len();

    for outcome in outcomes {
        match outcome.result {
            TradeResult::Win => metrics.wins += 1,
            TradeResult::Loss => metrics.losses += 1,
            TradeResult::Neutral => metrics.neutral += 1,
            TradeResult::Unknown => metrics.unknown += 1,
        }
    }

    let decided = metrics.wins + metrics.losses;
    if decided > 0 {
        metrics.winrate = metrics.wins as f64 / decided as f64;
        metrics.avg_r_multiple = outcomes
            .iter()
            .filter(|o| o.result.is_decided())
            .map(|o| o.r_multiple)
            .sum::<f64>()
            / decided as f64;
    }

    metrics.final_capital = equity_curve
        .last()
        .map(|point| point.capital)
        .unwrap_or(initial_capital);
    metrics.total_profit = metrics.final_capital - initial_capital;
    if initial_capital > 0.0 {
        metrics.total_profit_percent = metrics.total_profit / initial_capital * 100.0;
    }
    metrics.max_drawdown_percent = max_drawdown_percent(equity_curve);

    metrics
}

/// Maximum peak-to-trough decline over the curve, in percent.
fn max_drawdown_percent(equity_curve: &[EquityPoint]) -> f64 {
    let mut peak = f64::MIN;
    let mut max_drawdown = 0.0;
    for point in equity_curve {
        if point.capital > peak {
            peak = point.capital;
        }
        if peak > 0.0 {
            let drawdown = (peak - point.capital) / peak * 100.0;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }
    }
    max_drawdown
}
