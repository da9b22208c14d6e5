//! Comparison engine.

use super::{ChangeClassifier, ChangeCounts, ComparisonResult, DEFAULT_UNCHANGED_THRESHOLD};
use crate::analysis::{RiskAssessor, RiskKeywords, SummaryBuilder};
use crate::matching::{
    AlignmentPair, AlignmentStrategy, ParagraphAligner, SimilarityMetric, DEFAULT_MATCH_THRESHOLD,
};
use crate::model::{DocumentVersion, Paragraph};

/// Compares two paragraph sequences: align, classify, then rate and summarize.
///
/// The engine holds configuration only. Every call to [`DiffEngine::compare`]
/// is independent, so one engine can serve concurrent comparisons.
pub struct DiffEngine {
    threshold: f64,
    metric: SimilarityMetric,
    strategy: AlignmentStrategy,
    classifier: ChangeClassifier,
    assessor: RiskAssessor,
    summary: SummaryBuilder,
    custom_aligner: Option<Box<dyn ParagraphAligner>>,
}

impl DiffEngine {
    /// Create a new engine with default settings
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            metric: SimilarityMetric::default(),
            strategy: AlignmentStrategy::default(),
            classifier: ChangeClassifier::new(DEFAULT_UNCHANGED_THRESHOLD),
            assessor: RiskAssessor::default(),
            summary: SummaryBuilder::default(),
            custom_aligner: None,
        }
    }

    /// Set the minimum similarity for two paragraphs to be paired
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the similarity above which a matched pair is unchanged
    #[must_use]
    pub fn with_unchanged_threshold(mut self, threshold: f64) -> Self {
        self.classifier = ChangeClassifier::new(threshold);
        self
    }

    /// Set the similarity metric
    #[must_use]
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the alignment strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: AlignmentStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the risk keyword sets
    #[must_use]
    pub fn with_keywords(mut self, keywords: &RiskKeywords) -> Self {
        self.assessor = RiskAssessor::new(keywords);
        self
    }

    /// Set the summary builder
    #[must_use]
    pub fn with_summary(mut self, summary: SummaryBuilder) -> Self {
        self.summary = summary;
        self
    }

    /// Use a custom aligner instead of the configured strategy.
    #[must_use]
    pub fn with_aligner(mut self, aligner: Box<dyn ParagraphAligner>) -> Self {
        self.custom_aligner = Some(aligner);
        self
    }

    /// Check if a custom aligner is configured
    pub fn has_custom_aligner(&self) -> bool {
        self.custom_aligner.is_some()
    }

    /// Align two paragraph sequences with the configured aligner.
    pub fn align(&self, old: &[Paragraph], new: &[Paragraph]) -> Vec<AlignmentPair> {
        let default_aligner;
        let aligner: &dyn ParagraphAligner = match &self.custom_aligner {
            Some(a) => a.as_ref(),
            None => {
                default_aligner = self.strategy.aligner(self.threshold, self.metric);
                default_aligner.as_ref()
            }
        };
        aligner.align(old, new)
    }

    /// Compare two loaded document versions.
    pub fn compare(&self, old: &DocumentVersion, new: &DocumentVersion) -> ComparisonResult {
        if self.can_skip_identical(old, new) {
            tracing::debug!(
                old = %old.label,
                new = %new.label,
                "paragraph texts identical, skipping alignment"
            );
            return self.finish(Vec::new());
        }
        self.compare_paragraphs(&old.paragraphs, &new.paragraphs)
    }

    /// Identical texts pair up at similarity 1.0, which only counts as
    /// unchanged below a unit threshold. A custom aligner may pair them
    /// differently, so it always runs.
    fn can_skip_identical(&self, old: &DocumentVersion, new: &DocumentVersion) -> bool {
        self.custom_aligner.is_none()
            && self.classifier.unchanged_threshold() < 1.0
            && old.same_text_as(new)
    }

    /// Compare two paragraph sequences.
    pub fn compare_paragraphs(&self, old: &[Paragraph], new: &[Paragraph]) -> ComparisonResult {
        let pairs = self.align(old, new);
        tracing::debug!(
            old = old.len(),
            new = new.len(),
            pairs = pairs.len(),
            "aligned paragraphs"
        );

        let changes = self.classifier.classify(&pairs);
        self.finish(changes)
    }

    fn finish(&self, changes: Vec<super::Change>) -> ComparisonResult {
        let risk = self.assessor.assess(&changes);
        let summary_text = self.summary.build(&changes);
        let counts = ChangeCounts::from_changes(&changes);

        ComparisonResult {
            risk_level: risk.level,
            changes,
            summary_text,
            risk,
            counts,
        }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RiskLevel;
    use crate::diff::ChangeKind;

    #[test]
    fn test_added_paragraph() {
        let new = vec![Paragraph::new(1, 0, "New clause.")];
        let result = DiffEngine::new().compare_paragraphs(&[], &new);

        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].kind, ChangeKind::Added);
        assert_eq!(result.changes[0].section_label, "page 1");
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result
            .summary_text
            .contains("1 total (added 1, removed 0, modified 0)"));
    }

    #[test]
    fn test_removed_paragraph() {
        let old = vec![Paragraph::new(1, 0, "Fee is $100.")];
        let result = DiffEngine::new().compare_paragraphs(&old, &[]);

        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].kind, ChangeKind::Removed);
        assert_eq!(result.changes[0].section_label, "page 1");
    }

    #[test]
    fn test_extended_clause_is_high_risk_modification() {
        let old = vec![Paragraph::new(
            2,
            0,
            "Contract may be terminated for cause and includes liability for damages.",
        )];
        let new = vec![Paragraph::new(
            2,
            0,
            "Contract may be terminated for cause and includes liability for damages and a penalty clause.",
        )];
        let result = DiffEngine::new().compare_paragraphs(&old, &new);

        assert_eq!(result.changes.len(), 1);
        let change = &result.changes[0];
        assert_eq!(change.kind, ChangeKind::Modified);
        let similarity = change.similarity.unwrap();
        assert!(similarity > 0.6 && similarity < 0.95);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_identical_versions_short_circuit() {
        let paras = vec![
            Paragraph::new(1, 0, "Terms and conditions."),
            Paragraph::new(2, 0, "Penalty for late delivery and liability."),
        ];
        let old = DocumentVersion::new("v1", 2, paras.clone());
        let new = DocumentVersion::new("v2", 2, paras.clone());

        let engine = DiffEngine::new();
        let fast = engine.compare(&old, &new);
        let full = engine.compare_paragraphs(&paras, &paras);

        assert!(!fast.has_changes());
        assert_eq!(fast.changes, full.changes);
        assert_eq!(fast.summary_text, full.summary_text);
        assert_eq!(fast.risk_level, RiskLevel::Low);
        assert_eq!(
            fast.summary_text,
            "No material content changes between the two versions."
        );
    }

    #[test]
    fn test_custom_keywords_flow_through() {
        let keywords = RiskKeywords {
            high: vec!["warranty".into(), "indemnity".into()],
            medium: vec![],
        };
        let new = vec![Paragraph::new(1, 0, "Warranty and indemnity apply.")];
        let result = DiffEngine::new()
            .with_keywords(&keywords)
            .compare_paragraphs(&[], &new);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_lower_unchanged_threshold_hides_small_edits() {
        let old = vec![Paragraph::new(1, 0, "The fee is 100.")];
        let new = vec![Paragraph::new(1, 0, "The fee is 200.")];
        assert_eq!(DiffEngine::new().compare_paragraphs(&old, &new).changes.len(), 1);

        let lenient = DiffEngine::new().with_unchanged_threshold(0.9);
        assert!(lenient.compare_paragraphs(&old, &new).changes.is_empty());
    }

    #[test]
    fn test_custom_aligner_used() {
        struct NothingMatches;
        impl ParagraphAligner for NothingMatches {
            fn align(&self, old: &[Paragraph], new: &[Paragraph]) -> Vec<AlignmentPair> {
                old.iter()
                    .map(|p| AlignmentPair::Unmatched { old: p.clone() })
                    .chain(new.iter().map(|p| AlignmentPair::Inserted { new: p.clone() }))
                    .collect()
            }
            fn threshold(&self) -> f64 {
                1.0
            }
            fn name(&self) -> &'static str {
                "nothing"
            }
        }

        let paras = vec![Paragraph::new(1, 0, "same")];
        let engine = DiffEngine::new().with_aligner(Box::new(NothingMatches));
        assert!(engine.has_custom_aligner());
        assert_eq!(engine.compare_paragraphs(&paras, &paras).changes.len(), 2);

        let version = DocumentVersion::new("v1", 1, paras);
        assert_eq!(engine.compare(&version, &version).changes.len(), 2);
    }

    #[test]
    fn test_unit_unchanged_threshold_reports_identical_text() {
        let paras = vec![Paragraph::new(1, 0, "Same clause.")];
        let old = DocumentVersion::new("v1", 1, paras.clone());
        let new = DocumentVersion::new("v2", 1, paras.clone());

        let engine = DiffEngine::new().with_unchanged_threshold(1.0);
        let via_versions = engine.compare(&old, &new);
        let via_paragraphs = engine.compare_paragraphs(&paras, &paras);

        assert_eq!(via_versions.changes.len(), 1);
        assert_eq!(via_versions.changes[0].kind, ChangeKind::Modified);
        assert_eq!(via_versions.changes, via_paragraphs.changes);
    }
}
