//! Paragraph and page text records.

use serde::{Deserialize, Serialize};

/// Raw text of one page as delivered by the extraction collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 1-based page number
    pub page: u32,
    /// Extracted text, possibly containing blank-line paragraph breaks
    #[serde(default)]
    pub text: String,
}

impl PageText {
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// A contiguous block of text attributed to a page, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paragraph {
    /// 1-based page the paragraph was found on
    pub page_number: u32,
    /// 0-based position within the page
    pub index: usize,
    /// Paragraph text; absent text deserializes as empty
    #[serde(default)]
    pub text: String,
}

impl Paragraph {
    pub fn new(page_number: u32, index: usize, text: impl Into<String>) -> Self {
        Self {
            page_number,
            index,
            text: text.into(),
        }
    }

    /// Label used to attribute a change to this paragraph's location.
    #[must_use]
    pub fn section_label(&self) -> String {
        format!("page {}", self.page_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_label() {
        assert_eq!(Paragraph::new(3, 0, "x").section_label(), "page 3");
    }

    #[test]
    fn test_missing_text_defaults_to_empty() {
        let p: Paragraph = serde_json::from_str(r#"{"page_number":1,"index":2}"#).unwrap();
        assert_eq!(p.text, "");
        assert_eq!(p.index, 2);
    }
}
