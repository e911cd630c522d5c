// Field Resolver
// Maps heterogeneous raw signal records to the canonical shape via a
// declarative alias table instead of scattered per-field conditionals.

use common::{CanonicalSignal, RawSignal, Side, SignalStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// Confidence assumed when no source field resolves.
pub const DEFAULT_CONFIDENCE: u8 = 50;

/// Placeholder for unresolvable instruments and sides.
pub const UNKNOWN_FIELD: &str = "UNKNOWN";

/// Ordered list of accepted source keys per canonical field.
///
/// The default table covers every schema variant the signal sources have
/// shipped: the modern `pair`/`signal_type`/`confidence_score` naming and
/// the legacy `symbol`/`direction`/`confidence` naming, plus short price
/// field spellings.
#[derive(Debug, Clone)]
pub struct FieldAliases {
    pub id: Vec<&'static str>,
    pub instrument: Vec<&'static str>,
    pub side: Vec<&'static str>,
    pub confidence: Vec<&'static str>,
    pub status: Vec<&'static str>,
    pub entry_price: Vec<&'static str>,
    pub stop_loss: Vec<&'static str>,
    pub take_profit: Vec<&'static str>,
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self {
            id: vec!["id", "signal_id"],
            instrument: vec!["pair", "symbol"],
            side: vec!["signal_type", "direction"],
            confidence: vec!["confidence_score", "confidence"],
            status: vec!["status"],
            entry_price: vec!["entry_price", "entry"],
            stop_loss: vec!["stop_loss", "sl"],
            take_profit: vec!["take_profit", "tp"],
        }
    }
}

/// Case pattern of the source's status strings.
///
/// Sources disagree on `PENDING` vs `pending` vs `Pending`; decisions
/// written back must match whichever convention the source uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseStyle {
    Upper,
    Lower,
    Title,
}

impl CaseStyle {
    /// Detect the style from an example status string.
    pub fn detect(example: &str) -> Self {
        if example == example.to_uppercase() {
            CaseStyle::Upper
        } else if example == example.to_lowercase() {
            CaseStyle::Lower
        } else {
            CaseStyle::Title
        }
    }

    /// Render a canonical upper-case word in this style.
    pub fn apply(&self, canonical: &str) -> String {
        match self {
            CaseStyle::Upper => canonical.to_uppercase(),
            CaseStyle::Lower => canonical.to_lowercase(),
            CaseStyle::Title => {
                let lower = canonical.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => lower,
                }
            }
        }
    }
}

/// Normalize a raw confidence value to the integer `0..=100` scale.
///
/// Values below 1.5 are interpreted as 0-1 fractions and scaled by 100;
/// anything else is assumed to already be on the percent scale. The result
/// is clamped to `[0, 100]`.
pub fn resolve_confidence(raw: f64) -> u8 {
    let scaled = if raw < 1.5 {
        (raw * 100.0).round()
    } else {
        raw.trunc()
    };
    scaled.clamp(0.0, 100.0) as u8
}

/// Resolves raw signal records into [`CanonicalSignal`]s.
///
/// Resolution never fails: missing required fields degrade to `UNKNOWN`
/// placeholders, and downstream components treat those as valid
/// low-confidence input.
#[derive(Debug, Clone)]
pub struct FieldResolver {
    aliases: FieldAliases,
    status_style: Option<CaseStyle>,
}

impl FieldResolver {
    pub fn new() -> Self {
        Self::with_aliases(FieldAliases::default())
    }

    pub fn with_aliases(aliases: FieldAliases) -> Self {
        Self {
            aliases,
            status_style: None,
        }
    }

    /// Case style of the first raw status string observed, defaulting to
    /// upper-case when no status has been seen yet.
    pub fn status_style(&self) -> CaseStyle {
        self.status_style.unwrap_or(CaseStyle::Upper)
    }

    /// Map one raw record into the canonical shape.
    pub fn resolve(&mut self, raw: &RawSignal) -> CanonicalSignal {
        let id = first_present(raw, &self.aliases.id)
            .and_then(as_string)
            .unwrap_or_else(|| {
                let generated = Uuid::new_v4().to_string();
                debug!(id = %generated, "Raw signal has no id field, generated one");
                generated
            });

        let instrument = first_present(raw, &self.aliases.instrument)
            .and_then(as_string)
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string());

        let side = first_present(raw, &self.aliases.side)
            .and_then(as_string)
            .map(|s| Side::parse(&s))
            .unwrap_or(Side::Unknown);

        let confidence = first_present(raw, &self.aliases.confidence)
            .and_then(as_f64)
            .map(resolve_confidence)
            .unwrap_or(DEFAULT_CONFIDENCE);

        let status_raw = first_present(raw, &self.aliases.status).and_then(as_string);
        if let Some(example) = &status_raw {
            if self.status_style.is_none() {
                self.status_style = Some(CaseStyle::detect(example));
            }
        }
        let status = status_raw
            .map(|s| SignalStatus::parse(&s))
            .unwrap_or(SignalStatus::Pending);

        let entry_price = first_present(raw, &self.aliases.entry_price).and_then(as_decimal);
        let stop_loss = first_present(raw, &self.aliases.stop_loss).and_then(as_decimal);
        let take_profit = first_present(raw, &self.aliases.take_profit).and_then(as_decimal);

        CanonicalSignal {
            id,
            instrument,
            side,
            confidence,
            status,
            entry_price,
            stop_loss,
            take_profit,
        }
    }
}

impl Default for FieldResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// First non-null value among the given alias keys.
fn first_present<'a>(raw: &'a RawSignal, aliases: &[&str]) -> Option<&'a Value> {
    for key in aliases {
        if let Some(value) = raw.get(*key) {
            if !value.is_null() {
                return Some(value);
            }
        }
    }
    None
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
