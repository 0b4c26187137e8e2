//! Expected and detected PII span records.

use crate::Span;
use serde::{Deserialize, Serialize};

/// A ground-truth PII annotation: the correctness baseline.
///
/// Built by the fixture builder (or supplied pre-computed) and never
/// mutated afterwards. `entity_type` is an opaque label, e.g. `"PERSON"`
/// or `"US_SSN"`; matching on it is plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedPii {
    /// Surface text of the annotated value.
    pub value: String,
    /// Entity type label.
    pub entity_type: String,
    /// Where the value sits in the text buffer.
    #[serde(flatten)]
    pub span: Span,
}

impl ExpectedPii {
    /// Create a new ground-truth annotation.
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        entity_type: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            value: value.into(),
            entity_type: entity_type.into(),
            span: Span::new(start, end),
        }
    }
}

/// One detection emitted by the external analysis service.
///
/// Arrives as an element of a decoded JSON array shaped
/// `{"entity_type": ..., "score": ..., "start": ..., "end": ...}`.
/// Treated as opaque input: the score is whatever the analyzer reported,
/// never clamped or rescaled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerResult {
    /// Entity type label the detector assigned.
    pub entity_type: String,
    /// Detector confidence, expected in `[0, 1]`.
    pub score: f64,
    /// Where the detection sits in the text buffer.
    #[serde(flatten)]
    pub span: Span,
}

impl RecognizerResult {
    /// Create a new detection record.
    #[must_use]
    pub fn new(entity_type: impl Into<String>, score: f64, start: usize, end: usize) -> Self {
        Self {
            entity_type: entity_type.into(),
            score,
            span: Span::new(start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_pii_carries_offsets() {
        let e = ExpectedPii::new("Maine", "LOCATION", 30, 35);
        assert_eq!(e.span, Span::new(30, 35));
        assert_eq!(e.span.len(), 5);
    }

    #[test]
    fn recognizer_result_decodes_from_analyzer_json() {
        let raw = r#"[
            {"entity_type": "PERSON", "score": 0.85, "start": 10, "end": 18},
            {"entity_type": "EMAIL_ADDRESS", "score": 1.0, "start": 25, "end": 44}
        ]"#;
        let decoded: Vec<RecognizerResult> = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].entity_type, "PERSON");
        assert!((decoded[0].score - 0.85).abs() < f64::EPSILON);
        assert_eq!(decoded[0].span, Span::new(10, 18));
        assert_eq!(decoded[1].span, Span::new(25, 44));
    }

    #[test]
    fn recognizer_result_roundtrips_flat_shape() {
        let r = RecognizerResult::new("PHONE_NUMBER", 0.4, 3, 15);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["start"], 3);
        assert_eq!(json["end"], 15);
        assert!(json.get("span").is_none());
    }
}
