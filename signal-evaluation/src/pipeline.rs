// Signal Evaluation Pipeline
// Orchestrates fetching raw signals, resolving them to the canonical
// shape, classifying them, and recording decisions back to a sink.

use anyhow::Result;
use common::{CanonicalSignal, Decision, DecisionOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::classifier::classify;
use crate::resolver::FieldResolver;
use crate::storage::{DecisionRecord, DecisionSink, SignalSource};

/// One signal together with its classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatedSignal {
    pub signal: CanonicalSignal,
    pub decision: Decision,
}

/// Counts over one evaluation batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationSummary {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Kept pending for human review.
    pub held: usize,
}

/// Result of processing one batch of raw signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub evaluated: Vec<EvaluatedSignal>,
    pub summary: EvaluationSummary,
}

/// Signal evaluation pipeline.
///
/// Resolution and classification never fail; only the source fetch can
/// error. Sink failures are logged and tolerated so that one bad write
/// does not abort the batch.
pub struct EvaluationPipeline {
    resolver: FieldResolver,
    sink: Option<Box<dyn DecisionSink>>,
}

impl EvaluationPipeline {
    pub fn new() -> Self {
        Self {
            resolver: FieldResolver::new(),
            sink: None,
        }
    }

    /// Use a custom field resolver (e.g. with an extended alias table).
    pub fn with_resolver(mut self, resolver: FieldResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Record non-pending decisions to the given sink.
    pub fn with_sink(mut self, sink: Box<dyn DecisionSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Fetch, resolve and classify one batch of signals.
    pub async fn process(&mut self, source: &dyn SignalSource) -> Result<EvaluationReport> {
        let raw_signals = source.fetch().await?;
        info!(count = raw_signals.len(), "Fetched raw signals");

        let mut evaluated = Vec::with_capacity(raw_signals.len());
        let mut summary = EvaluationSummary::default();

        for raw in &raw_signals {
            let signal = self.resolver.resolve(raw);
            let decision = classify(&signal);
            debug!(
                signal_id = %signal.id,
                instrument = %signal.instrument,
                confidence = signal.confidence,
                outcome = ?decision.outcome,
                reasoning = %decision.reasoning,
                "Signal classified"
            );

            summary.total += 1;
            match decision.outcome {
                DecisionOutcome::Approved => summary.approved += 1,
                DecisionOutcome::Rejected => summary.rejected += 1,
                DecisionOutcome::Pending => summary.held += 1,
            }

            // Pending decisions stay in the source untouched; only final
            // verdicts are written back, in the source's case style.
            if decision.outcome != DecisionOutcome::Pending {
                if let Some(sink) = &self.sink {
                    let status = self.resolver.status_style().apply(decision.outcome.as_str());
                    let record = DecisionRecord::new(signal.id.clone(), status, &decision);
                    if let Err(e) = sink.record(&record).await {
                        warn!(signal_id = %signal.id, error = %e, "Failed to record decision");
                    }
                }
            }

            evaluated.push(EvaluatedSignal { signal, decision });
        }

        info!(
            total = summary.total,
            approved = summary.approved,
            rejected = summary.rejected,
            held = summary.held,
            "Signal evaluation complete"
        );

        Ok(EvaluationReport { evaluated, summary })
    }
}

impl Default for EvaluationPipeline {
    fn default() -> Self {
        Self::new()
    }
}
