//! Greedy old-driven paragraph alignment.

use super::{AlignmentPair, ParagraphAligner, SimilarityMetric};
use crate::model::Paragraph;

/// Default minimum similarity for two paragraphs to be paired.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Pairs each old paragraph, in order, with its best unconsumed new paragraph.
///
/// The candidate with the strictly highest score wins, so ties go to the
/// first-seen new paragraph. Leftover new paragraphs follow in new order.
/// Crossing alignments are possible when sections are reordered.
#[derive(Debug, Clone)]
pub struct GreedyAligner {
    threshold: f64,
    metric: SimilarityMetric,
}

impl GreedyAligner {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            metric: SimilarityMetric::default(),
        }
    }

    #[must_use]
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }
}

impl Default for GreedyAligner {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl ParagraphAligner for GreedyAligner {
    fn align(&self, old: &[Paragraph], new: &[Paragraph]) -> Vec<AlignmentPair> {
        let mut pairs = Vec::with_capacity(old.len().max(new.len()));
        let mut consumed = vec![false; new.len()];

        for old_para in old {
            let mut best_score = 0.0;
            let mut best_idx: Option<usize> = None;

            for (idx, new_para) in new.iter().enumerate() {
                if consumed[idx] {
                    continue;
                }
                let score = self.metric.score(&old_para.text, &new_para.text);
                if score > best_score {
                    best_score = score;
                    best_idx = Some(idx);
                }
            }

            match best_idx {
                Some(idx) if best_score >= self.threshold => {
                    consumed[idx] = true;
                    pairs.push(AlignmentPair::Matched {
                        old: old_para.clone(),
                        new: new[idx].clone(),
                        similarity: best_score,
                    });
                }
                _ => pairs.push(AlignmentPair::Unmatched {
                    old: old_para.clone(),
                }),
            }
        }

        pairs.extend(
            new.iter()
                .zip(&consumed)
                .filter(|(_, used)| !**used)
                .map(|(p, _)| AlignmentPair::Inserted { new: p.clone() }),
        );

        pairs
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}
