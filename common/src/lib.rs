//! Shared types for the signal evaluation and backtest engine.
//!
//! Everything here is a plain value type: raw and canonical signals,
//! decisions, simulated trade outcomes, equity points and finalized
//! backtest runs. Ownership is strict - a `BacktestRun` owns its outcome
//! list and equity curve exclusively, and run records are never mutated
//! after their metrics are computed.

pub mod decision;
pub mod outcome;
pub mod run;
pub mod signal;

pub use decision::{Decision, DecisionOutcome};
pub use outcome::{TradeOutcome, TradeResult};
pub use run::{
    BacktestParameters, BacktestRun, EquityPoint, Metrics, StrategyGrade,
};
pub use signal::{CanonicalSignal, RawSignal, Side, SignalStatus};
