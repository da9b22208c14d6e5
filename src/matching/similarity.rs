//! Text similarity metrics for paragraph alignment.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use similar::TextDiff;

/// Normalized similarity metric used to score a paragraph pair.
///
/// Every metric returns a score in `[0, 1]`, with 1.0 for identical text
/// (including two empty strings).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMetric {
    /// Matching-blocks ratio `2·M / (|a|+|b|)` over characters
    #[default]
    MatchingBlocks,
    /// Normalized Levenshtein distance
    Levenshtein,
    /// Jaro-Winkler similarity
    JaroWinkler,
}

impl SimilarityMetric {
    /// Score two texts.
    #[must_use]
    pub fn score(self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        match self {
            Self::MatchingBlocks => matching_blocks_ratio(a, b),
            Self::Levenshtein => strsim::normalized_levenshtein(a, b),
            Self::JaroWinkler => strsim::jaro_winkler(a, b),
        }
    }
}

impl std::fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MatchingBlocks => write!(f, "matching-blocks"),
            Self::Levenshtein => write!(f, "levenshtein"),
            Self::JaroWinkler => write!(f, "jaro-winkler"),
        }
    }
}

/// Character-level matching-blocks ratio.
///
/// Counts characters shared by the longest common subsequence found by the
/// diff, doubled, over the combined length. Two empty strings score 1.0.
#[must_use]
pub fn matching_blocks_ratio(a: &str, b: &str) -> f64 {
    let ratio = TextDiff::from_chars(a, b).ratio();
    f64::from(ratio).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_scores_one() {
        for metric in SimilarityMetric::value_variants() {
            assert!((metric.score("same text", "same text") - 1.0).abs() < f64::EPSILON);
            assert!((metric.score("", "") - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_disjoint_scores_low() {
        let score = SimilarityMetric::MatchingBlocks.score("aaaa", "zzzz");
        assert!(score < 0.01, "score was {score}");
    }

    #[test]
    fn test_empty_against_text_scores_zero() {
        assert!(matching_blocks_ratio("", "abc") < f64::EPSILON);
    }

    #[test]
    fn test_extension_ratio() {
        let old = "Contract may be terminated for cause and includes liability for damages.";
        let new = "Contract may be terminated for cause and includes liability for damages and a penalty clause.";
        let score = matching_blocks_ratio(old, new);
        // old is a subsequence of new: 2·72 / (72 + 93)
        assert!(score > 0.6 && score < 0.95, "score was {score}");
        assert!((score - 144.0 / 165.0).abs() < 0.01);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // Thai characters are three bytes each in UTF-8
        let score = matching_blocks_ratio("ค่าปรับ", "ค่าปรับ!");
        let expected = 2.0 * 7.0 / 15.0;
        assert!((score - expected).abs() < 0.01, "score was {score}");
    }

    #[test]
    fn test_metric_serde_names() {
        let json = serde_json::to_string(&SimilarityMetric::JaroWinkler).unwrap();
        assert_eq!(json, "\"jaro-winkler\"");
    }
}
