// Backtest run records
// Parameters, equity points, aggregated metrics and the finalized run.

use anyhow::{ensure, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::outcome::TradeOutcome;

/// One simulated capital value on the equity curve.
///
/// A run's curve starts with the initial capital and appends one point per
/// processed signal, including zero-impact ones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EquityPoint {
    pub capital: f64,
}

/// Validated configuration for one backtest invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestParameters {
    pub strategy_name: String,
    /// Signals below this confidence are treated as avoided trades.
    pub min_confidence: u8,
    /// Fraction of current capital risked per trade, in percent.
    pub max_risk_percent: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub initial_capital: f64,
}

impl BacktestParameters {
    /// Range-check the parameters.
    ///
    /// Malformed configuration fails fast here, at the boundary, before
    /// any signal enters the engine.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_risk_percent > 0.0 && self.max_risk_percent <= 100.0,
            "max_risk_percent must be in (0, 100], got {}",
            self.max_risk_percent
        );
        ensure!(
            self.initial_capital > 0.0 && self.initial_capital.is_finite(),
            "initial_capital must be positive, got {}",
            self.initial_capital
        );
        ensure!(
            self.start_date <= self.end_date,
            "start_date {} is after end_date {}",
            self.start_date,
            self.end_date
        );
        Ok(())
    }
}

/// Aggregated statistics for a completed run. Derived once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    /// Avoided trades (rejected signals).
    pub neutral: usize,
    /// Signals that could not be simulated for lack of price data.
    pub unknown: usize,
    /// Fraction of decided trades that were wins, in `0..=1`.
    pub winrate: f64,
    pub avg_r_multiple: f64,
    pub final_capital: f64,
    pub total_profit: f64,
    pub total_profit_percent: f64,
    pub max_drawdown_percent: f64,
}

impl Metrics {
    /// Sentinel "no data" metrics for an empty run.
    pub fn empty(initial_capital: f64) -> Self {
        Self {
            total_trades: 0,
            wins: 0,
            losses: 0,
            neutral: 0,
            unknown: 0,
            winrate: 0.0,
            avg_r_multiple: 0.0,
            final_capital: initial_capital,
            total_profit: 0.0,
            total_profit_percent: 0.0,
            max_drawdown_percent: 0.0,
        }
    }

    /// Advisory qualitative grade for the strategy. Not part of the
    /// metrics contract itself.
    pub fn grade(&self) -> StrategyGrade {
        if self.winrate >= 0.60 && self.avg_r_multiple >= 1.5 {
            StrategyGrade::Excellent
        } else if self.winrate >= 0.55 && self.avg_r_multiple >= 1.3 {
            StrategyGrade::Good
        } else if self.winrate >= 0.50 {
            StrategyGrade::Ok
        } else {
            StrategyGrade::NeedsImprovement
        }
    }
}

/// Qualitative strategy grade derived from winrate and average R.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StrategyGrade {
    Excellent,
    Good,
    Ok,
    NeedsImprovement,
}

/// A finalized backtest run.
///
/// Owns its outcomes and equity curve exclusively; immutable once the
/// metrics are computed. Identified by its parameter set and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestRun {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub parameters: BacktestParameters,
    pub outcomes: Vec<TradeOutcome>,
    pub equity_curve: Vec<EquityPoint>,
    pub metrics: Metrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn params() -> BacktestParameters {
        BacktestParameters {
            strategy_name: "conservative".to_string(),
            min_confidence: 75,
            max_risk_percent: 1.0,
            start_date: Utc::now() - Duration::days(30),
            end_date: Utc::now(),
            initial_capital: 10_000.0,
        }
    }

    #[test]
    fn test_valid_parameters() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn test_risk_percent_bounds() {
        let mut p = params();
        p.max_risk_percent = 0.0;
        assert!(p.validate().is_err());

        p.max_risk_percent = 150.0;
        assert!(p.validate().is_err());

        p.max_risk_percent = 100.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_capital_must_be_positive() {
        let mut p = params();
        p.initial_capital = 0.0;
        assert!(p.validate().is_err());

        p.initial_capital = -500.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_date_range_ordering() {
        let mut p = params();
        p.start_date = p.end_date + Duration::days(1);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_grade_thresholds() {
        let mut m = Metrics::empty(10_000.0);
        m.winrate = 0.62;
        m.avg_r_multiple = 1.8;
        assert_eq!(m.grade(), StrategyGrade::Excellent);

        m.winrate = 0.56;
        m.avg_r_multiple = 1.4;
        assert_eq!(m.grade(), StrategyGrade::Good);

        m.winrate = 0.51;
        m.avg_r_multiple = 0.9;
        assert_eq!(m.grade(), StrategyGrade::Ok);

        m.winrate = 0.40;
        assert_eq!(m.grade(), StrategyGrade::NeedsImprovement);
    }

    #[test]
    fn test_empty_metrics_sentinel() {
        let m = Metrics::empty(5_000.0);
        assert_eq!(m.total_trades, 0);
        assert_eq!(m.winrate, 0.0);
        assert_eq!(m.final_capital, 5_000.0);
    }
}
