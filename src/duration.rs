//! Transition duration normalization.
//!
//! A duration is configured as a plain number of milliseconds, a numeric
//! string, or a `{ show, hide }` pair. Anything that cannot be read as a
//! non-negative number of milliseconds resolves to [`DEFAULT_DURATION_MS`].

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::transition::TransitionPhase;

/// Duration used when none is given or the configured one is malformed.
pub const DEFAULT_DURATION_MS: u64 = 500;

/// Caller-supplied duration of a transition.
///
/// Deserialization never fails: a value of the wrong shape becomes the
/// default, and an unusable `show`/`hide` side is left unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransitionDuration {
    /// Same duration for both phases.
    Millis(u64),
    /// Numeric string, e.g. `"300"`.
    Text(String),
    /// Separate durations for the show and hide phases.
    Split {
        show: Option<u64>,
        hide: Option<u64>,
    },
}

impl<'de> Deserialize<'de> for TransitionDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self::Millis(DEFAULT_DURATION_MS)
    }
}

impl From<u64> for TransitionDuration {
    fn from(ms: u64) -> Self {
        Self::Millis(ms)
    }
}

impl From<&str> for TransitionDuration {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl TransitionDuration {
    pub fn split(show: u64, hide: u64) -> Self {
        Self::Split {
            show: Some(show),
            hide: Some(hide),
        }
    }

    /// Milliseconds the given phase lasts.
    pub fn resolve_ms(&self, phase: TransitionPhase) -> u64 {
        match self {
            Self::Millis(ms) => *ms,
            Self::Text(text) => parse_millis(text).unwrap_or(DEFAULT_DURATION_MS),
            Self::Split { show, hide } => {
                let side = match phase {
                    TransitionPhase::Show => show,
                    TransitionPhase::Hide => hide,
                };
                side.unwrap_or(DEFAULT_DURATION_MS)
            }
        }
    }

    pub fn resolve(&self, phase: TransitionPhase) -> Duration {
        Duration::from_millis(self.resolve_ms(phase))
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text.clone()),
            Value::Object(sides) => Self::Split {
                show: sides.get("show").and_then(value_millis),
                hide: sides.get("hide").and_then(value_millis),
            },
            other => match value_millis(other) {
                Some(ms) => Self::Millis(ms),
                None => {
                    tracing::warn!(value = %other, "Invalid transition duration, using default");
                    Self::default()
                }
            },
        }
    }
}

fn value_millis(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(round_millis)),
        Value::String(text) => parse_millis(text),
        _ => None,
    }
}

fn parse_millis(text: &str) -> Option<u64> {
    round_millis(text.trim().parse().ok()?)
}

fn round_millis(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_applies_to_both_phases() {
        let duration = TransitionDuration::from(300);
        assert_eq!(duration.resolve_ms(TransitionPhase::Show), 300);
        assert_eq!(duration.resolve_ms(TransitionPhase::Hide), 300);
    }

    #[test]
    fn numeric_string_is_parsed() {
        assert_eq!(TransitionDuration::from("250").resolve_ms(TransitionPhase::Show), 250);
        assert_eq!(TransitionDuration::from(" 99.6 ").resolve_ms(TransitionPhase::Hide), 100);
    }

    #[test]
    fn malformed_string_falls_back_to_default() {
        for text in ["", "fast", "-20", "NaN", "inf"] {
            assert_eq!(
                TransitionDuration::from(text).resolve_ms(TransitionPhase::Show),
                DEFAULT_DURATION_MS,
                "input {text:?}"
            );
        }
    }

    #[test]
    fn split_picks_the_phase_side() {
        let duration = TransitionDuration::split(300, 150);
        assert_eq!(duration.resolve(TransitionPhase::Show), Duration::from_millis(300));
        assert_eq!(duration.resolve(TransitionPhase::Hide), Duration::from_millis(150));
    }

    #[test]
    fn split_missing_side_falls_back_to_default() {
        let duration = TransitionDuration::Split {
            show: Some(200),
            hide: None,
        };
        assert_eq!(duration.resolve_ms(TransitionPhase::Hide), DEFAULT_DURATION_MS);
    }

    #[test]
    fn deserializes_all_shapes() {
        let n: TransitionDuration = serde_json::from_str("400").unwrap();
        assert_eq!(n, TransitionDuration::Millis(400));

        let s: TransitionDuration = serde_json::from_str("\"400\"").unwrap();
        assert_eq!(s, TransitionDuration::Text("400".into()));

        let pair: TransitionDuration = serde_json::from_str(r#"{"show": 1, "hide": 2}"#).unwrap();
        assert_eq!(pair, TransitionDuration::split(1, 2));
    }

    #[test]
    fn unusable_shapes_deserialize_to_default() {
        for raw in ["-5", "true", "null", "[1, 2]", "-0.5"] {
            let duration: TransitionDuration = serde_json::from_str(raw).unwrap();
            assert_eq!(duration, TransitionDuration::default(), "input {raw}");
        }

        let fractional: TransitionDuration = serde_json::from_str("250.4").unwrap();
        assert_eq!(fractional, TransitionDuration::Millis(250));

        let sides: TransitionDuration =
            serde_json::from_str(r#"{"show": "300", "hide": false}"#).unwrap();
        assert_eq!(
            sides,
            TransitionDuration::Split {
                show: Some(300),
                hide: None
            }
        );
        assert_eq!(sides.resolve_ms(TransitionPhase::Hide), DEFAULT_DURATION_MS);
    }

    #[test]
    fn zero_is_a_valid_duration() {
        assert_eq!(TransitionDuration::from(0).resolve(TransitionPhase::Show), Duration::ZERO);
    }
}
