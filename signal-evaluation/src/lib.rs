// Signal Evaluation
// Normalizes heterogeneous raw signal records and classifies them into
// approve/reject/hold decisions.

pub mod classifier;
pub mod pipeline;
pub mod resolver;
pub mod storage;

pub use classifier::classify;
pub use pipeline::{EvaluatedSignal, EvaluationPipeline, EvaluationReport, EvaluationSummary};
pub use resolver::{resolve_confidence, CaseStyle, FieldAliases, FieldResolver};
pub use storage::{
    DecisionRecord, DecisionSink, InMemoryDecisionSink, SignalSource, StaticSignalSource,
};
