//! Fixture construction: derive ground-truth spans from templates.
//!
//! Writing character offsets by hand is the classic way to get a broken
//! gold standard. A template interleaves literal fragments with labeled
//! PII values and the builder computes every offset while concatenating,
//! so the annotations can never drift from the text they describe.

use crate::{ExpectedPii, Span};
use serde::{Deserialize, Serialize};

/// One entry in a fixture template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplatePart {
    /// Literal text copied through unchanged.
    Literal(String),
    /// A labeled PII value whose offsets are recorded.
    Pii {
        /// Surface text of the value.
        value: String,
        /// Entity type label, e.g. `"PERSON"`.
        entity_type: String,
    },
}

impl TemplatePart {
    /// A literal fragment.
    pub fn literal(text: impl Into<String>) -> Self {
        TemplatePart::Literal(text.into())
    }

    /// A labeled PII value.
    pub fn pii(value: impl Into<String>, entity_type: impl Into<String>) -> Self {
        TemplatePart::Pii {
            value: value.into(),
            entity_type: entity_type.into(),
        }
    }
}

/// A materialized test fixture: the full text plus its ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// The concatenated plain text, ready to send to the analyzer.
    pub text: String,
    /// Ground-truth annotations in left-to-right order.
    pub expected_pii: Vec<ExpectedPii>,
}

/// Build a fixture by concatenating template parts in order.
///
/// Offsets are recorded in characters (not bytes), matching the offset
/// space the analysis service reports against. Deterministic: the same
/// template always yields byte-identical text and identical offsets.
/// Well-formed input always succeeds; there are no error conditions.
///
/// # Example
///
/// ```
/// use pii_eval::{build_fixture, TemplatePart};
///
/// let fixture = build_fixture(&[
///     TemplatePart::literal("I live in "),
///     TemplatePart::pii("Maine", "LOCATION"),
///     TemplatePart::literal("."),
/// ]);
/// assert_eq!(fixture.text, "I live in Maine.");
/// assert_eq!(fixture.expected_pii[0].span.start, 10);
/// assert_eq!(fixture.expected_pii[0].span.end, 15);
/// ```
#[must_use]
pub fn build_fixture(parts: &[TemplatePart]) -> Fixture {
    let mut text = String::new();
    let mut offset = 0usize;
    let mut expected_pii = Vec::new();

    for part in parts {
        match part {
            TemplatePart::Literal(fragment) => {
                offset += fragment.chars().count();
                text.push_str(fragment);
            }
            TemplatePart::Pii { value, entity_type } => {
                let start = offset;
                offset += value.chars().count();
                text.push_str(value);
                expected_pii.push(ExpectedPii {
                    value: value.clone(),
                    entity_type: entity_type.clone(),
                    span: Span::new(start, offset),
                });
            }
        }
    }

    Fixture { text, expected_pii }
}
