//! Span classification: partition expected vs found spans into the six
//! disjoint outcome buckets a precision/recall evaluation is built on.
//!
//! The matching is deliberately asymmetric. Expected spans are the truth
//! being measured against: one expected span may accumulate several
//! nested/overlap diagnostics when the detector fragments it, while a
//! found span is attributed to at most one expected span. Collapsing this
//! into symmetric one-to-one matching would change the measured
//! false-positive count, so the asymmetry is part of the contract.

use crate::overlap::scan_overlaps;
use crate::{Error, ExpectedPii, RecognizerResult, Result, Span};
use serde::{Deserialize, Serialize};

/// A true positive: identical offsets and identical entity type.
///
/// Carries the ground-truth value and type together with the detector's
/// confidence for the matched span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExactMatch {
    /// Ground-truth surface text.
    pub value: String,
    /// The entity type both sides agree on.
    pub entity_type: String,
    /// Detector confidence for the matched span.
    pub score: f64,
}

/// Identical offsets but a different entity type label.
///
/// Keeps the found span's offsets, type and score; `value` is the
/// expected surface text, carried as a diagnostic aid so a reader can see
/// what the detector mislabeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MismatchedEntityType {
    /// Ground-truth surface text at these offsets.
    pub value: String,
    /// The (wrong) entity type the detector assigned.
    pub entity_type: String,
    /// Detector confidence.
    pub score: f64,
    /// The shared offsets.
    #[serde(flatten)]
    pub span: Span,
}

/// A nested or partial overlap between an expected and a found span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapDiagnostic {
    /// The ground-truth annotation involved.
    pub expected: ExpectedPii,
    /// The detection attributed to it.
    pub found: RecognizerResult,
    /// For nestings, the contained range; for partial overlaps, the
    /// intersection.
    pub overlap: Span,
}

/// The full partition produced by one call to [`classify`].
///
/// Every input span lands in exactly one bucket: expected spans in one of
/// {exact, mismatched (as counterpart), nested, overlapping, missed},
/// found spans in one of {exact, mismatched, nested, overlapping, extra}.
/// Each bucket preserves encounter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// True positives: same offsets, same entity type.
    pub exact_matches: Vec<ExactMatch>,
    /// False negatives: expected spans no detection touched.
    pub missed_pii: Vec<ExpectedPii>,
    /// False positives: same offsets, wrong entity type.
    pub mismatched_entity_type: Vec<MismatchedEntityType>,
    /// False positives: one span fully contains the other (the detector
    /// fragmented or over-extended relative to the truth).
    pub nested_pii: Vec<OverlapDiagnostic>,
    /// False positives: partial, non-containing overlap.
    pub overlapping_pii: Vec<OverlapDiagnostic>,
    /// False positives: detections no expected span overlaps.
    pub extra_found_pii: Vec<RecognizerResult>,
}

impl ClassificationResult {
    /// Total number of classification records across all six buckets.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.exact_matches.len()
            + self.missed_pii.len()
            + self.mismatched_entity_type.len()
            + self.nested_pii.len()
            + self.overlapping_pii.len()
            + self.extra_found_pii.len()
    }

    /// True when every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}

/// Classify every expected/found pairing into the six outcome buckets.
///
/// Preconditions, checked before any matching:
/// - every span in both collections satisfies `start <= end`;
/// - the expected spans are pairwise non-overlapping. Overlapping ground
///   truth would make one-to-one consumption ambiguous, so it fails with
///   [`Error::OverlappingExpected`] naming the offending indices.
///
/// Matching walks expected spans in input order against the not yet
/// consumed found spans in input order:
/// 1. same range: consume both; entity types equal goes to
///    `exact_matches`, otherwise `mismatched_entity_type`;
/// 2. overlap without same range: consume only the found span; a full
///    containment goes to `nested_pii`, a partial overlap to
///    `overlapping_pii`;
/// 3. disjoint: both stay available.
///
/// Afterwards, expected spans that never produced a record become
/// `missed_pii` and unconsumed found spans become `extra_found_pii`.
pub fn classify(
    expected: &[ExpectedPii],
    found: &[RecognizerResult],
) -> Result<ClassificationResult> {
    validate_spans("expected", expected.iter().map(|e| e.span))?;
    validate_spans("found", found.iter().map(|f| f.span))?;

    let expected_spans: Vec<Span> = expected.iter().map(|e| e.span).collect();
    if let Some(pair) = scan_overlaps(&expected_spans).first() {
        return Err(Error::OverlappingExpected {
            first: pair.first,
            second: pair.second,
            intersection: pair.intersection,
        });
    }

    let mut result = ClassificationResult::default();

    // Index-tracked consumption instead of null-sentinel slots: a found
    // span is consumed by its first attribution; an expected span is
    // consumed only by a same-range match but remembers whether any
    // record mentioned it, which is what keeps it out of missed_pii.
    let mut expected_consumed = vec![false; expected.len()];
    let mut expected_attributed = vec![false; expected.len()];
    let mut found_consumed = vec![false; found.len()];

    for (ei, e) in expected.iter().enumerate() {
        for (fi, f) in found.iter().enumerate() {
            if expected_consumed[ei] {
                break;
            }
            if found_consumed[fi] {
                continue;
            }

            if e.span.same_range(&f.span) {
                expected_consumed[ei] = true;
                expected_attributed[ei] = true;
                found_consumed[fi] = true;
                if e.entity_type == f.entity_type {
                    result.exact_matches.push(ExactMatch {
                        value: e.value.clone(),
                        entity_type: e.entity_type.clone(),
                        score: f.score,
                    });
                } else {
                    result.mismatched_entity_type.push(MismatchedEntityType {
                        value: e.value.clone(),
                        entity_type: f.entity_type.clone(),
                        score: f.score,
                        span: f.span,
                    });
                }
            } else if e.span.overlaps(&f.span) {
                expected_attributed[ei] = true;
                found_consumed[fi] = true;
                match e.span.nested_range(&f.span) {
                    Some(overlap) => result.nested_pii.push(OverlapDiagnostic {
                        expected: e.clone(),
                        found: f.clone(),
                        overlap,
                    }),
                    None => {
                        // Overlap guarantees a non-empty intersection for
                        // closed intervals; reaching the error arm means
                        // the predicates themselves are broken.
                        let overlap = e.span.intersection(&f.span).ok_or_else(|| {
                            Error::Internal(format!(
                                "spans {} and {} overlap but have no intersection",
                                e.span, f.span
                            ))
                        })?;
                        result.overlapping_pii.push(OverlapDiagnostic {
                            expected: e.clone(),
                            found: f.clone(),
                            overlap,
                        });
                    }
                }
            }
        }
    }

    for (ei, e) in expected.iter().enumerate() {
        if !expected_attributed[ei] {
            result.missed_pii.push(e.clone());
        }
    }
    for (fi, f) in found.iter().enumerate() {
        if !found_consumed[fi] {
            result.extra_found_pii.push(f.clone());
        }
    }

    log::debug!(
        "classified {} expected vs {} found: {} exact, {} mismatched, {} nested, \
         {} overlapping, {} missed, {} extra",
        expected.len(),
        found.len(),
        result.exact_matches.len(),
        result.mismatched_entity_type.len(),
        result.nested_pii.len(),
        result.overlapping_pii.len(),
        result.missed_pii.len(),
        result.extra_found_pii.len(),
    );

    Ok(result)
}

fn validate_spans(collection: &'static str, spans: impl Iterator<Item = Span>) -> Result<()> {
    for (index, span) in spans.enumerate() {
        if span.start > span.end {
            return Err(Error::DegenerateSpan {
                collection,
                index,
                start: span.start,
                end: span.end,
            });
        }
    }
    Ok(())
}
