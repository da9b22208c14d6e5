//! Paragraph segmentation of page text.

use crate::model::{PageText, Paragraph};
use regex::Regex;
use std::sync::LazyLock;

/// A newline, optional horizontal whitespace, then another newline.
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("static regex"));

/// Splits page text into paragraphs on blank lines.
///
/// Each block is trimmed and empty blocks are dropped. Indices count the
/// surviving blocks within a page, starting from 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphSplitter;

impl ParagraphSplitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Split one page into paragraphs.
    #[must_use]
    pub fn split_page(&self, page: &PageText) -> Vec<Paragraph> {
        BLANK_LINE
            .split(&page.text)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .enumerate()
            .map(|(index, block)| Paragraph::new(page.page, index, block))
            .collect()
    }

    /// Split every page, preserving page order.
    #[must_use]
    pub fn split_pages(&self, pages: &[PageText]) -> Vec<Paragraph> {
        pages.iter().flat_map(|p| self.split_page(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_blank_lines() {
        let page = PageText::new(1, "First line\ncontinued.\n\n  Second.  \n \t\nThird.");
        let paragraphs = ParagraphSplitter::new().split_page(&page);

        let texts: Vec<&str> = paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["First line\ncontinued.", "Second.", "Third."]);
        assert_eq!(paragraphs[2].index, 2);
    }

    #[test]
    fn test_empty_blocks_do_not_consume_indices() {
        let page = PageText::new(4, "\n\n\n\nOnly.\n\n\n\n");
        let paragraphs = ParagraphSplitter::new().split_page(&page);
        assert_eq!(paragraphs, vec![Paragraph::new(4, 0, "Only.")]);
    }

    #[test]
    fn test_crlf_blank_lines() {
        let page = PageText::new(1, "One.\r\n\r\nTwo.");
        assert_eq!(ParagraphSplitter::new().split_page(&page).len(), 2);
    }

    #[test]
    fn test_indices_restart_per_page() {
        let pages = vec![PageText::new(1, "a\n\nb"), PageText::new(2, "c")];
        let paragraphs = ParagraphSplitter::new().split_pages(&pages);
        assert_eq!(paragraphs[2], Paragraph::new(2, 0, "c"));
    }

    #[test]
    fn test_blank_page_yields_nothing() {
        let page = PageText::new(1, "   \n\n  ");
        assert!(ParagraphSplitter::new().split_page(&page).is_empty());
    }
}
