//! Core data model shared by every stage of a comparison.
//!
//! Everything here is created fresh per comparison and treated as read-only
//! afterward.

mod document;
mod paragraph;

pub use document::{text_fingerprint, DocumentVersion};
pub use paragraph::{PageText, Paragraph};
