//! Paragraph alignment.
//!
//! Pairs the paragraphs of an old document version with those of a new one
//! by text similarity. Two strategies ship:
//!
//! - [`GreedyAligner`] (default): each old paragraph, in order, takes its best
//!   unconsumed new paragraph. Leftover new paragraphs are appended.
//! - [`OrderedAligner`]: a monotone alignment that never produces crossing
//!   pairs, computed as a shortest path over the edit grid.
//!
//! Both produce a complete alignment: every input paragraph appears in
//! exactly one [`AlignmentPair`].

mod alignment;
mod greedy;
mod ordered;
mod similarity;
mod traits;

pub use alignment::{AlignmentPair, RawAlignmentPair};
pub use greedy::{GreedyAligner, DEFAULT_MATCH_THRESHOLD};
pub use ordered::OrderedAligner;
pub use similarity::{matching_blocks_ratio, SimilarityMetric};
pub use traits::ParagraphAligner;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Alignment strategy selector.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentStrategy {
    /// Old-driven best match; crossing pairs possible
    #[default]
    Greedy,
    /// Order-preserving shortest-path alignment
    Ordered,
}

impl AlignmentStrategy {
    /// Build the aligner for this strategy.
    #[must_use]
    pub fn aligner(self, threshold: f64, metric: SimilarityMetric) -> Box<dyn ParagraphAligner> {
        match self {
            Self::Greedy => Box::new(GreedyAligner::new(threshold).with_metric(metric)),
            Self::Ordered => Box::new(OrderedAligner::new(threshold).with_metric(metric)),
        }
    }
}

impl std::fmt::Display for AlignmentStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greedy => write!(f, "greedy"),
            Self::Ordered => write!(f, "ordered"),
        }
    }
}
