// Signal Source & Decision Sink Interfaces
// External collaborators that feed raw signals in and persist decisions
// out. The evaluation core itself never performs I/O.

use anyhow::Result;
use common::{Decision, RawSignal};
use serde::{Deserialize, Serialize};

/// Supplies an ordered sequence of raw signal records.
///
/// Any caller-imposed limits (page size, date range) are applied by the
/// source before records reach the evaluation core.
#[async_trait::async_trait]
pub trait SignalSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawSignal>>;
}

/// A decision ready to be written back, keyed by signal identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionRecord {
    pub signal_id: String,
    /// Decision outcome rendered in the source schema's case style.
    pub status: String,
    pub reasoning: String,
}

impl DecisionRecord {
    pub fn new(signal_id: impl Into<String>, status: impl Into<String>, decision: &Decision) -> Self {
        Self {
            signal_id: signal_id.into(),
            status: status.into(),
            reasoning: decision.reasoning.clone(),
        }
    }
}

/// Receives decision records for persistence.
#[async_trait::async_trait]
pub trait DecisionSink: Send + Sync {
    async fn record(&self, record: &DecisionRecord) -> Result<()>;
}

/// A fixed, pre-fetched batch of raw signals (for testing and development).
pub struct StaticSignalSource {
    signals: Vec<RawSignal>,
}

impl StaticSignalSource {
    pub fn new(signals: Vec<RawSignal>) -> Self {
        Self { signals }
    }
}

#[async_trait::async_trait]
impl SignalSource for StaticSignalSource {
    async fn fetch(&self) -> Result<Vec<RawSignal>> {
        Ok(self.signals.clone())
    }
}

/// In-memory decision sink (for testing and development).
pub struct InMemoryDecisionSink {
    records: tokio::sync::RwLock<Vec<DecisionRecord>>,
}

impl InMemoryDecisionSink {
    pub fn new() -> Self {
        Self {
            records: tokio::sync::RwLock::new(Vec::new()),
        }
    }

    pub async fn records(&self) -> Vec<DecisionRecord> {
        self.records.read().await.clone()
    }
}

impl Default for InMemoryDecisionSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DecisionSink for InMemoryDecisionSink {
    async fn record(&self, record: &DecisionRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_source_returns_signals_in_order() {
        let first = json!({ "id": 1 }).as_object().unwrap().clone();
        let second = json!({ "id": 2 }).as_object().unwrap().clone();
        let source = StaticSignalSource::new(vec![first.clone(), second.clone()]);

        let fetched = source.fetch().await.unwrap();
        assert_eq!(fetched, vec![first, second]);
    }

    #[tokio::test]
    async fn test_in_memory_sink_accumulates_records() {
        let sink = InMemoryDecisionSink::new();
        let decision = Decision::new(common::DecisionOutcome::Approved, "test");

        sink.record(&DecisionRecord::new("sig-1", "APPROVED", &decision))
            .await
            .unwrap();
        sink.record(&DecisionRecord::new("sig-2", "approved", &decision))
            .await
            .unwrap();

        let records = sink.records().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].signal_id, "sig-1");
        assert_eq!(records[1].status, "approved");
    }
}
