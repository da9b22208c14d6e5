//! Trait definitions for paragraph alignment strategies.
//!
//! The classifier and risk assessor only consume [`AlignmentPair`]s, so any
//! strategy that keeps the coverage guarantees can be swapped in here.

use super::AlignmentPair;
use crate::model::Paragraph;

/// Aligns an old paragraph sequence against a new one.
///
/// Implementations must emit every old and every new paragraph in exactly one
/// pair, and never pair a new paragraph twice.
///
/// # Example
///
/// ```ignore
/// use docdiff::matching::{GreedyAligner, ParagraphAligner};
///
/// let aligner = GreedyAligner::new(0.6);
/// let pairs = aligner.align(&old_paragraphs, &new_paragraphs);
/// ```
pub trait ParagraphAligner: Send + Sync {
    /// Produce the complete alignment of `old` against `new`.
    fn align(&self, old: &[Paragraph], new: &[Paragraph]) -> Vec<AlignmentPair>;

    /// Minimum similarity for two paragraphs to be paired.
    fn threshold(&self) -> f64;

    /// Strategy name for logs and reports.
    fn name(&self) -> &'static str;
}
