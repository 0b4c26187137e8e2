//! Precision/recall accounting over classification results.
//!
//! A [`ClassificationResult`](crate::ClassificationResult) is the per-call
//! partition; [`EvalCounts`] collapses it into the tallies a correctness
//! report is built from and can be merged across fixtures.

use crate::ClassificationResult;
use serde::{Deserialize, Serialize};

/// Outcome tallies for one or more evaluation calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalCounts {
    /// Same offsets, same entity type (true positives).
    pub exact: usize,
    /// Same offsets, wrong entity type.
    pub mismatched: usize,
    /// Fully contained / containing detections.
    pub nested: usize,
    /// Partial, non-containing overlaps.
    pub overlapping: usize,
    /// Expected spans no detection touched (false negatives).
    pub missed: usize,
    /// Detections no expected span overlaps.
    pub extra: usize,
}

impl EvalCounts {
    /// True positives: exact matches only.
    #[must_use]
    pub fn true_positives(&self) -> usize {
        self.exact
    }

    /// False positives: every non-exact detection outcome.
    #[must_use]
    pub fn false_positives(&self) -> usize {
        self.mismatched + self.nested + self.overlapping + self.extra
    }

    /// False negatives: missed ground truth.
    #[must_use]
    pub fn false_negatives(&self) -> usize {
        self.missed
    }

    /// Precision, or 0.0 when there were no detections at all.
    #[must_use]
    pub fn precision(&self) -> f64 {
        let denominator = self.true_positives() + self.false_positives();
        if denominator == 0 {
            return 0.0;
        }
        self.true_positives() as f64 / denominator as f64
    }

    /// Recall, or 0.0 when there was no ground truth at all.
    #[must_use]
    pub fn recall(&self) -> f64 {
        let denominator = self.true_positives() + self.false_negatives();
        if denominator == 0 {
            return 0.0;
        }
        self.true_positives() as f64 / denominator as f64
    }

    /// Harmonic mean of precision and recall.
    #[must_use]
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }

    /// Fold another call's tallies into this one.
    pub fn merge(&mut self, other: &EvalCounts) {
        self.exact += other.exact;
        self.mismatched += other.mismatched;
        self.nested += other.nested;
        self.overlapping += other.overlapping;
        self.missed += other.missed;
        self.extra += other.extra;
    }
}

impl ClassificationResult {
    /// Collapse the partition into outcome tallies.
    #[must_use]
    pub fn counts(&self) -> EvalCounts {
        EvalCounts {
            exact: self.exact_matches.len(),
            mismatched: self.mismatched_entity_type.len(),
            nested: self.nested_pii.len(),
            overlapping: self.overlapping_pii.len(),
            missed: self.missed_pii.len(),
            extra: self.extra_found_pii.len(),
        }
    }
}

impl From<&ClassificationResult> for EvalCounts {
    fn from(result: &ClassificationResult) -> Self {
        result.counts()
    }
}
