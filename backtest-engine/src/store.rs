// Run Store
// Persistence seam for completed backtest runs. The in-memory
// implementation backs tests and single-process usage.

use anyhow::Result;
use common::BacktestRun;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Storage abstraction for completed runs.
#[async_trait::async_trait]
pub trait RunStore: Send + Sync {
    /// Persist a completed run.
    async fn store(&self, run: &BacktestRun) -> Result<()>;

    /// Fetch a run by id, if present.
    async fn get(&self, id: Uuid) -> Result<Option<BacktestRun>>;

    /// Fetch all stored runs.
    async fn get_all(&self) -> Result<Vec<BacktestRun>>;
}

/// In-memory run store.
pub struct InMemoryRunStore {
    runs: RwLock<HashMap<Uuid, BacktestRun>>,
}

impl InMemoryRunStore {
    pub fn new() -> Self {
        Self {
            runs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRunStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RunStore for InMemoryRunStore {
    async fn store(&self, run: &BacktestRun) -> Result<()> {
        let mut runs = self.runs.write().await;
        runs.insert(run.id, run.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<BacktestRun>> {
        let runs = self.runs.read().await;
        Ok(runs.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<BacktestRun>> {
        let runs = self.runs.read().await;
        Ok(runs.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::{BacktestParameters, Metrics};

    fn sample_run() -> BacktestRun {
        BacktestRun {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            parameters: BacktestParameters {
                strategy_name: "sample".to_string(),
                min_confidence: 75,
                max_risk_percent: 1.0,
                start_date: Utc::now(),
                end_date: Utc::now(),
                initial_capital: 10_000.0,
            },
            outcomes: Vec::new(),
            equity_curve: Vec::new(),
            metrics: Metrics::empty(10_000.0),
        }
    }

    #[tokio::test]
    async fn test_store_and_get() {
        let store = InMemoryRunStore::new();
        let run = sample_run();

        store.store(&run).await.unwrap();
        let fetched = store.get(run.id).await.unwrap();
        assert_eq!(fetched.map(|r| r.id), Some(run.id));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = InMemoryRunStore::new();
        let fetched = store.get(Uuid::new_v4()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_get_all() {
        let store = InMemoryRunStore::new();
        store.store(&sample_run()).await.unwrap();
        store.store(&sample_run()).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
