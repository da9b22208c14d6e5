//! Turns alignment pairs into typed change records.

use super::Change;
use crate::matching::{AlignmentPair, RawAlignmentPair};

/// Default similarity above which a matched pair counts as unchanged.
pub const DEFAULT_UNCHANGED_THRESHOLD: f64 = 0.95;

/// Classifies each alignment pair as zero or one change.
#[derive(Debug, Clone, Copy)]
pub struct ChangeClassifier {
    unchanged_threshold: f64,
}

impl Default for ChangeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_UNCHANGED_THRESHOLD)
    }
}

impl ChangeClassifier {
    #[must_use]
    pub const fn new(unchanged_threshold: f64) -> Self {
        Self {
            unchanged_threshold,
        }
    }

    #[must_use]
    pub const fn unchanged_threshold(&self) -> f64 {
        self.unchanged_threshold
    }

    /// Classify a single pair. Matched pairs above the unchanged threshold
    /// yield nothing.
    #[must_use]
    pub fn classify_pair(&self, pair: &AlignmentPair) -> Option<Change> {
        match pair {
            AlignmentPair::Matched {
                old,
                new,
                similarity,
            } => (*similarity <= self.unchanged_threshold).then(|| {
                Change::modified(new.section_label(), &old.text, &new.text, *similarity)
            }),
            AlignmentPair::Unmatched { old } => Some(Change::removed(old.section_label(), &old.text)),
            AlignmentPair::Inserted { new } => Some(Change::added(new.section_label(), &new.text)),
        }
    }

    /// Classify pairs in order.
    #[must_use]
    pub fn classify(&self, pairs: &[AlignmentPair]) -> Vec<Change> {
        pairs.iter().filter_map(|p| self.classify_pair(p)).collect()
    }

    /// Classify pairs received from an external producer.
    ///
    /// A pair with neither side is an internal-consistency violation; it is
    /// logged and skipped.
    #[must_use]
    pub fn classify_raw(&self, pairs: Vec<RawAlignmentPair>) -> Vec<Change> {
        pairs
            .into_iter()
            .enumerate()
            .filter_map(|(position, raw)| match raw.into_pair() {
                Some(pair) => self.classify_pair(&pair),
                None => {
                    tracing::error!(position, "alignment pair has neither side, skipping");
                    None
                }
            })
            .collect()
    }
}
