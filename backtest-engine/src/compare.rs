// Run Comparator
// Ranks finalized backtest runs and derives superlative labels. Consumes
// already-computed metrics only; no recomputation, no mutation.

use common::BacktestRun;
use serde::{Deserialize, Serialize};

/// One ranked strategy with the figures the ranking was based on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedRun {
    pub strategy_name: String,
    pub total_profit_percent: f64,
    pub winrate: f64,
    pub avg_r_multiple: f64,
    pub max_drawdown_percent: f64,
}

/// Cross-run comparison result.
///
/// The three superlatives are selected independently and may name
/// different runs: the most profitable strategy is not necessarily the
/// one with the highest winrate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunComparison {
    /// Strategies ordered by total profit percent, descending.
    pub ranking: Vec<RankedRun>,
    pub best_overall: Option<String>,
    /// Highest winrate.
    pub safest: Option<String>,
    /// Highest average R-multiple.
    pub most_aggressive: Option<String>,
}

/// Compare a set of completed runs.
pub fn compare(runs: &[BacktestRun]) -> RunComparison {
    let mut ranking: Vec<RankedRun> = runs
        .iter()
        .map(|run| RankedRun {
            strategy_name: run.parameters.strategy_name.clone(),
            total_profit_percent: run.metrics.total_profit_percent,
            winrate: run.metrics.winrate,
            avg_r_multiple: run.metrics.avg_r_multiple,
            max_drawdown_percent: run.metrics.max_drawdown_percent,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.total_profit_percent
            .partial_cmp(&a.total_profit_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let best_overall = ranking.first().map(|r| r.strategy_name.clone());

    let safest = runs
        .iter()
        .max_by(|a, b| {
            a.metrics
                .winrate
                .partial_cmp(&b.metrics.winrate)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|run| run.parameters.strategy_name.clone());

    let most_aggressive = runs
        .iter()
        .max_by(|a, b| {
            a.metrics
                .avg_r_multiple
                .partial_cmp(&b.metrics.avg_r_multiple)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|run| run.parameters.strategy_name.clone());

    RunComparison {
        ranking,
        best_overall,
        safest,
        most_aggressive,
    }
}
