//! Change classification and the comparison engine.
//!
//! Data flows strictly forward: paragraphs are aligned, alignment pairs are
//! classified into [`Change`] records, and the change list is rated and
//! summarized into a [`ComparisonResult`].

mod classifier;
mod engine;
mod result;

pub use classifier::{ChangeClassifier, DEFAULT_UNCHANGED_THRESHOLD};
pub use engine::DiffEngine;
pub use result::{Change, ChangeCounts, ChangeKind, ComparisonResult};
