// Decision types
// A decision is produced exactly once per canonical signal and is immutable
// after creation; an external sink may record it against the signal's id.

use serde::{Deserialize, Serialize};

use crate::signal::SignalStatus;

/// The verdict of the decision classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DecisionOutcome {
    Approved,
    Rejected,
    /// Needs human review; not written back to the source.
    Pending,
}

impl DecisionOutcome {
    /// Canonical upper-case wire name for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionOutcome::Approved => "APPROVED",
            DecisionOutcome::Rejected => "REJECTED",
            DecisionOutcome::Pending => "PENDING",
        }
    }
}

impl From<DecisionOutcome> for SignalStatus {
    fn from(outcome: DecisionOutcome) -> Self {
        match outcome {
            DecisionOutcome::Approved => SignalStatus::Approved,
            DecisionOutcome::Rejected => SignalStatus::Rejected,
            DecisionOutcome::Pending => SignalStatus::Pending,
        }
    }
}

/// A classification verdict with its human-readable justification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    pub outcome: DecisionOutcome,
    pub reasoning: String,
}

impl Decision {
    pub fn new(outcome: DecisionOutcome, reasoning: impl Into<String>) -> Self {
        Self {
            outcome,
            reasoning: reasoning.into(),
        }
    }
}
