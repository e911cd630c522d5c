//! Backtest engine.
//!
//! Replays canonical signals through the classifier and a deterministic
//! outcome simulator, accumulating a fixed-fractional equity curve and
//! summary metrics for each run.

pub mod compare;
pub mod equity;
pub mod metrics;
pub mod simulator;
pub mod store;

pub use compare::{compare, RankedRun, RunComparison};
pub use equity::EquityAccumulator;
pub use metrics::aggregate;
pub use simulator::{simulate, WIN_PROBABILITY};
pub use store::{InMemoryRunStore, RunStore};

use anyhow::Result;
use chrono::Utc;
use common::{BacktestParameters, BacktestRun, CanonicalSignal, SignalStatus};
use signal_evaluation::classify;
use tracing::{debug, info};
use uuid::Uuid;

/// Executes backtest runs over canonical signals.
pub struct BacktestEngine {
    parameters: BacktestParameters,
}

impl BacktestEngine {
    /// Create an engine for the given parameters. Fails if the
    /// parameters do not validate.
    pub fn new(parameters: BacktestParameters) -> Result<Self> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    pub fn parameters(&self) -> &BacktestParameters {
        &self.parameters
    }

    /// Replay the given signals and produce a finalized run.
    ///
    /// Signals below the configured confidence floor are treated as
    /// avoided trades. Signals without a stored verdict adopt the
    /// classifier's decision before simulation.
    pub fn run(&self, signals: &[CanonicalSignal]) -> BacktestRun {
        let mut accumulator = EquityAccumulator::new(
            self.parameters.initial_capital,
            self.parameters.max_risk_percent,
        );
        let mut outcomes = Vec::with_capacity(signals.len());

        for signal in signals {
            let effective = self.effective_signal(signal);
            let outcome = simulate(&effective);
            debug!(
                signal_id = %effective.id,
                result = ?outcome.result,
                r_multiple = outcome.r_multiple,
                "simulated trade"
            );
            accumulator.apply(&outcome);
            outcomes.push(outcome);
        }

        let equity_curve = accumulator.into_curve();
        let metrics = aggregate(&outcomes, &equity_curve, self.parameters.initial_capital);

        info!(
            strategy = %self.parameters.strategy_name,
            trades = metrics.total_trades,
            winrate = metrics.winrate,
            final_capital = metrics.final_capital,
            "backtest run complete"
        );

        BacktestRun {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            parameters: self.parameters.clone(),
            outcomes,
            equity_curve,
            metrics,
        }
    }

    /// Resolve the status a signal trades under for this run.
    fn effective_signal(&self, signal: &CanonicalSignal) -> CanonicalSignal {
        if signal.confidence < self.parameters.min_confidence {
            return signal.with_status(SignalStatus::Rejected);
        }
        match signal.status {
            SignalStatus::Pending => {
                let decision = classify(signal);
                signal.with_status(decision.outcome.into())
            }
            _ => signal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::{Side, TradeResult};
    use rust_decimal::Decimal;

    fn parameters(min_confidence: u8) -> BacktestParameters {
        BacktestParameters {
            strategy_name: "test-strategy".to_string(),
            min_confidence,
            max_risk_percent: 1.0,
            start_date: Utc::now(),
            end_date: Utc::now(),
            initial_capital: 10_000.0,
        }
    }

    fn priced_signal(id: &str, confidence: u8) -> CanonicalSignal {
        CanonicalSignal {
            id: id.to_string(),
            instrument: "BTCUSD".to_string(),
            side: Side::Long,
            confidence,
            status: SignalStatus::Pending,
            entry_price: Some(Decimal::new(100, 0)),
            stop_loss: Some(Decimal::new(98, 0)),
            take_profit: Some(Decimal::new(104, 0)),
        }
    }

    #[test]
    fn test_run_is_reproducible() {
        let signals: Vec<CanonicalSignal> = (0..100)
            .map(|i| priced_signal(&format!("sig-{i}"), 80))
            .collect();

        let engine = BacktestEngine::new(parameters(75)).unwrap();
        let first = engine.run(&signals);
        let second = engine.run(&signals);

        // The exact figure is fixed by the identity hash: stored runs and
        // re-runs must agree byte for byte, not just with each other.
        assert_eq!(first.metrics.final_capital, 16284.270878242953);
        assert_eq!(first.metrics.final_capital, second.metrics.final_capital);
        assert_eq!(first.metrics.winrate, second.metrics.winrate);
        assert_eq!(first.equity_curve.len(), 101);
        assert_eq!(
            first.metrics.wins + first.metrics.losses,
            first.metrics.total_trades
        );
        assert_eq!(first.metrics.total_trades, 100);
    }

    #[test]
    fn test_confidence_floor_avoids_trades() {
        let signals: Vec<CanonicalSignal> = (0..10)
            .map(|i| priced_signal(&format!("sig-{i}"), 80))
            .collect();

        let engine = BacktestEngine::new(parameters(90)).unwrap();
        let run = engine.run(&signals);

        assert_eq!(run.metrics.final_capital, 10_000.0);
        assert_eq!(run.metrics.neutral, 10);
        assert_eq!(run.metrics.wins, 0);
        assert_eq!(run.metrics.losses, 0);
    }

    #[test]
    fn test_stored_verdict_is_respected() {
        // Rejected on ingest, high confidence: must still sit out.
        let signal = priced_signal("sig-rejected", 95).with_status(SignalStatus::Rejected);
        let engine = BacktestEngine::new(parameters(50)).unwrap();
        let run = engine.run(&[signal]);

        assert_eq!(run.outcomes[0].result, TradeResult::Neutral);
        assert_eq!(run.metrics.final_capital, 10_000.0);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut params = parameters(75);
        params.max_risk_percent = 0.0;
        assert!(BacktestEngine::new(params).is_err());
    }
}
