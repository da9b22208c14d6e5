//! Page sources.

use crate::error::{DocDiffError, ErrorContext, IngestErrorKind, Result};
use crate::model::PageText;
use std::path::Path;

/// Form feed, the page separator emitted by common text extractors.
pub const PAGE_BREAK: char = '\x0c';

/// Maximum accepted input file size (64 MB).
pub const MAX_TEXT_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// A collaborator that turns a file into ordered page text.
///
/// Implementors only need `pages_from_bytes`; the default `load_pages`
/// handles file access and size limits.
pub trait PageSource: Send + Sync {
    /// Read pages from a file path
    fn load_pages(&self, path: &Path) -> Result<Vec<PageText>> {
        let bytes = read_input(path)?;
        self.pages_from_bytes(&bytes)
            .with_context(|| format!("at {}", path.display()))
    }

    /// Decode raw file content into pages
    fn pages_from_bytes(&self, bytes: &[u8]) -> Result<Vec<PageText>>;

    /// Source name used in logs and error context
    fn name(&self) -> &str;
}

/// Read an input file after checking that it exists and is within the size
/// limit.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(DocDiffError::file_not_found(path));
    }
    let metadata = std::fs::metadata(path).map_err(|e| DocDiffError::io(path, e))?;
    if metadata.len() > MAX_TEXT_FILE_SIZE {
        return Err(DocDiffError::validation(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_TEXT_FILE_SIZE / (1024 * 1024),
        )));
    }
    std::fs::read(path).map_err(|e| DocDiffError::io(path, e))
}

/// Plain-text page dumps with form-feed page breaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPageLoader;

impl TextPageLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Split already-decoded text into pages
    #[must_use]
    pub fn pages_from_str(&self, content: &str) -> Vec<PageText> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut raw: Vec<&str> = content.split(PAGE_BREAK).collect();
        // Extractors usually terminate the last page with a form feed too.
        if raw.len() > 1 && raw.last().is_some_and(|p| p.trim().is_empty()) {
            raw.pop();
        }

        raw.into_iter()
            .enumerate()
            .map(|(i, text)| PageText::new(i as u32 + 1, text))
            .collect()
    }
}

impl PageSource for TextPageLoader {
    fn pages_from_bytes(&self, bytes: &[u8]) -> Result<Vec<PageText>> {
        let content = std::str::from_utf8(bytes)
            .map_err(|e| DocDiffError::ingest("", IngestErrorKind::NotText(e.to_string())))?;
        Ok(self.pages_from_str(content))
    }

    fn name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_without_form_feed() {
        let pages = TextPageLoader::new().pages_from_str("Hello.\n\nWorld.");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page, 1);
    }

    #[test]
    fn test_pages_numbered_from_one() {
        let pages = TextPageLoader::new().pages_from_str("a\x0cb\x0cc");
        let numbers: Vec<u32> = pages.iter().map(|p| p.page).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(pages[1].text, "b");
    }

    #[test]
    fn test_trailing_form_feed_dropped() {
        let pages = TextPageLoader::new().pages_from_str("a\x0cb\x0c\n");
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_empty_content_is_one_empty_page() {
        let pages = TextPageLoader::new().pages_from_str("");
        assert_eq!(pages, vec![PageText::new(1, "")]);
    }

    #[test]
    fn test_bom_stripped() {
        let pages = TextPageLoader::new().pages_from_str("\u{feff}Title");
        assert_eq!(pages[0].text, "Title");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, &[0x66, 0xff, 0xfe]).unwrap();

        let err = TextPageLoader::new().load_pages(file.path()).unwrap_err();
        match err {
            DocDiffError::Ingest {
                context,
                source: IngestErrorKind::NotText(_),
            } => assert_eq!(context, format!("at {}", file.path().display())),
            other => panic!("Expected NotText, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_checked_before_decoding() {
        let err = read_input(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(
            err,
            DocDiffError::Ingest {
                source: IngestErrorKind::FileNotFound(_),
                ..
            }
        ));
    }
}
