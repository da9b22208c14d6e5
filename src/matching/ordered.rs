//! Order-preserving paragraph alignment.
//!
//! Finds the cheapest monotone path through the edit grid of the two
//! sequences with Dijkstra's algorithm. A node `(i, j)` means the first `i`
//! old and `j` new paragraphs are aligned. Moving right or down skips a
//! paragraph at a fixed cost; moving diagonally pairs two paragraphs at a
//! cost that shrinks as their similarity grows. Pairs below the threshold
//! have no diagonal edge.

use super::{AlignmentPair, ParagraphAligner, SimilarityMetric, DEFAULT_MATCH_THRESHOLD};
use crate::model::Paragraph;
use pathfinding::prelude::dijkstra;

/// Cost scale for converting similarity into integer edge weights.
const SCALE: f64 = 1_000.0;

/// Cost of leaving one paragraph unpaired.
const SKIP_COST: u64 = 1_000;

/// Monotone alignment: pairs never cross.
#[derive(Debug, Clone)]
pub struct OrderedAligner {
    threshold: f64,
    metric: SimilarityMetric,
}

impl OrderedAligner {
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

    /// Similarity matrix with `None` for pairs below the threshold.
    fn score_matrix(&self, old: &[Paragraph], new: &[Paragraph]) -> Vec<Vec<Option<f64>>> {
        old.iter()
            .map(|o| {
                new.iter()
                    .map(|n| {
                        let score = self.metric.score(&o.text, &n.text);
                        (score > 0.0 && score >= self.threshold).then_some(score)
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for OrderedAligner {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

fn match_cost(similarity: f64) -> u64 {
    ((1.0 - similarity).clamp(0.0, 1.0) * SCALE).round() as u64
}

impl ParagraphAligner for OrderedAligner {
    fn align(&self, old: &[Paragraph], new: &[Paragraph]) -> Vec<AlignmentPair> {
        let (n, m) = (old.len(), new.len());
        let scores = self.score_matrix(old, new);

        let successors = |&(i, j): &(usize, usize)| {
            let mut next = Vec::with_capacity(3);
            if i < n && j < m {
                if let Some(score) = scores[i][j] {
                    next.push(((i + 1, j + 1), match_cost(score)));
                }
            }
            if i < n {
                next.push(((i + 1, j), SKIP_COST));
            }
            if j < m {
                next.push(((i, j + 1), SKIP_COST));
            }
            next
        };

        // Skip edges always reach the goal, so a path exists.
        let path = dijkstra(&(0, 0), successors, |&node| node == (n, m))
            .map(|(path, _)| path)
            .unwrap_or_default();

        let mut pairs = Vec::with_capacity(n.max(m));
        for step in path.windows(2) {
            let ((i, j), (ni, nj)) = (step[0], step[1]);
            let pair = match (ni - i, nj - j) {
                (1, 1) => AlignmentPair::Matched {
                    old: old[i].clone(),
                    new: new[j].clone(),
                    similarity: scores[i][j].unwrap_or_default(),
                },
                (1, 0) => AlignmentPair::Unmatched {
                    old: old[i].clone(),
                },
                _ => AlignmentPair::Inserted {
                    new: new[j].clone(),
                },
            };
            pairs.push(pair);
        }

        if pairs.is_empty() && n + m > 0 {
            tracing::error!(old = n, new = m, "no alignment path found");
            pairs.extend(old.iter().map(|p| AlignmentPair::Unmatched { old: p.clone() }));
            pairs.extend(new.iter().map(|p| AlignmentPair::Inserted { new: p.clone() }));
        }

        pairs
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn name(&self) -> &'static str {
        "ordered"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(index: usize, text: &str) -> Paragraph {
        Paragraph::new(1, index, text)
    }

    #[test]
    fn test_empty_inputs() {
        assert!(OrderedAligner::default().align(&[], &[]).is_empty());

        let pairs = OrderedAligner::default().align(&[], &[para(0, "x")]);
        assert!(matches!(pairs[0], AlignmentPair::Inserted { .. }));
    }

    #[test]
    fn test_reordered_sections_do_not_cross() {
        let old = vec![
            para(0, "Payment is due within thirty days."),
            para(1, "This agreement is governed by local law."),
        ];
        let new = vec![
            para(0, "This agreement is governed by local law."),
            para(1, "Payment is due within thirty days."),
        ];
        let pairs = OrderedAligner::default().align(&old, &new);

        let matched: Vec<(usize, usize)> = pairs
            .iter()
            .filter_map(|p| match p {
                AlignmentPair::Matched { old, new, .. } => Some((old.index, new.index)),
                _ => None,
            })
            .collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_insertion_in_the_middle() {
        let old = vec![para(0, "First clause stays."), para(1, "Last clause stays.")];
        let new = vec![
            para(0, "First clause stays."),
            para(1, "A brand new obligation appears here."),
            para(2, "Last clause stays."),
        ];
        let pairs = OrderedAligner::default().align(&old, &new);

        assert_eq!(pairs.len(), 3);
        assert!(matches!(pairs[0], AlignmentPair::Matched { .. }));
        assert!(matches!(pairs[1], AlignmentPair::Inserted { .. }));
        assert!(matches!(pairs[2], AlignmentPair::Matched { .. }));
    }

    #[test]
    fn test_match_cost_scaling() {
        assert_eq!(match_cost(1.0), 0);
        assert_eq!(match_cost(0.6), 400);
        assert!(match_cost(0.6) < 2 * SKIP_COST);
    }
}
