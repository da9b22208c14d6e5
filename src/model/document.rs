//! A loaded document version.

use super::Paragraph;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use xxhash_rust::xxh3::xxh3_64;

/// One version of a document, segmented into paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentVersion {
    /// Version label such as "v1"
    pub label: String,
    /// File the text was loaded from, if any
    pub source: Option<PathBuf>,
    /// Number of pages in the source text
    pub page_count: usize,
    /// Paragraphs in reading order
    pub paragraphs: Vec<Paragraph>,
    /// Hash over the paragraph texts (page attribution excluded)
    pub fingerprint: u64,
}

impl DocumentVersion {
    pub fn new(label: impl Into<String>, page_count: usize, paragraphs: Vec<Paragraph>) -> Self {
        let fingerprint = text_fingerprint(&paragraphs);
        Self {
            label: label.into(),
            source: None,
            page_count,
            paragraphs,
            fingerprint,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// True when both versions carry the same paragraph texts in the same order.
    #[must_use]
    pub fn same_text_as(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
            && self.paragraphs.len() == other.paragraphs.len()
            && self
                .paragraphs
                .iter()
                .zip(&other.paragraphs)
                .all(|(a, b)| a.text == b.text)
    }
}

/// Hash paragraph texts in order. 0xFF never occurs in UTF-8, so it
/// separates paragraphs unambiguously.
#[must_use]
pub fn text_fingerprint(paragraphs: &[Paragraph]) -> u64 {
    let mut hasher_input = Vec::new();
    for p in paragraphs {
        hasher_input.extend(p.text.as_bytes());
        hasher_input.push(0xFF);
    }
    xxh3_64(&hasher_input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_ignores_page_numbers() {
        let a = DocumentVersion::new("v1", 1, vec![Paragraph::new(1, 0, "Same text.")]);
        let b = DocumentVersion::new("v2", 2, vec![Paragraph::new(2, 0, "Same text.")]);
        assert!(a.same_text_as(&b));
    }

    #[test]
    fn test_fingerprint_separates_paragraphs() {
        let joined = DocumentVersion::new("v1", 1, vec![Paragraph::new(1, 0, "ab")]);
        let split = DocumentVersion::new(
            "v2",
            1,
            vec![Paragraph::new(1, 0, "a"), Paragraph::new(1, 1, "b")],
        );
        assert!(!joined.same_text_as(&split));
    }

    #[test]
    fn test_matching_fingerprint_alone_is_not_enough() {
        let a = DocumentVersion::new("v1", 1, vec![Paragraph::new(1, 0, "Fee is $100.")]);
        let mut b = DocumentVersion::new("v2", 1, vec![Paragraph::new(1, 0, "Fee is $120.")]);
        b.fingerprint = a.fingerprint;
        assert!(!a.same_text_as(&b));
    }
}
