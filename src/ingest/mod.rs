//! Document ingestion.
//!
//! Input is either a PDF, whose text layer is extracted page by page, or a
//! plain-text page dump with form-feed page breaks. This module turns the
//! input into pages, then into paragraphs, then into a [`DocumentVersion`]
//! ready for comparison.
//!
//! ## Usage
//!
//! ```no_run
//! use docdiff::ingest::load_document;
//! use std::path::Path;
//!
//! let version = load_document(Path::new("contract_v1.pdf"), "v1").unwrap();
//! println!("{} paragraphs on {} pages", version.paragraph_count(), version.page_count);
//! ```

mod loader;
mod pdf;
mod splitter;

pub use loader::{PageSource, TextPageLoader, MAX_TEXT_FILE_SIZE, PAGE_BREAK};
pub use pdf::PdfPageLoader;
pub use splitter::ParagraphSplitter;

use crate::error::{ErrorContext, Result};
use crate::model::DocumentVersion;
use std::path::Path;

/// Pick the page source for a file by its extension. `.pdf` (any case)
/// selects the PDF loader; everything else is read as a text dump.
#[must_use]
pub fn page_source_for(path: &Path) -> Box<dyn PageSource> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        Box::new(PdfPageLoader::new())
    } else {
        Box::new(TextPageLoader::new())
    }
}

/// Load a PDF or plain-text page dump and segment it into a document version.
pub fn load_document(path: &Path, label: &str) -> Result<DocumentVersion> {
    let source = page_source_for(path);
    load_document_with(source.as_ref(), &ParagraphSplitter::new(), path, label)
}

/// Load a document version through an explicit page source and splitter.
pub fn load_document_with(
    source: &dyn PageSource,
    splitter: &ParagraphSplitter,
    path: &Path,
    label: &str,
) -> Result<DocumentVersion> {
    let pages = source
        .load_pages(path)
        .with_context(|| format!("loading {label} via {}", source.name()))?;
    let paragraphs = splitter.split_pages(&pages);

    tracing::debug!(
        label,
        pages = pages.len(),
        paragraphs = paragraphs.len(),
        "segmented document version"
    );

    Ok(DocumentVersion::new(label, pages.len(), paragraphs).with_source(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DocDiffError, IngestErrorKind};
    use std::io::Write;

    #[test]
    fn test_load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Intro.\n\nSecond.\x0cPage two.").unwrap();

        let doc = load_document(file.path(), "v1").unwrap();
        assert_eq!(doc.label, "v1");
        assert_eq!(doc.page_count, 2);
        assert_eq!(doc.paragraph_count(), 3);
        assert_eq!(doc.paragraphs[2].page_number, 2);
        assert_eq!(doc.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_page_source_by_extension() {
        assert_eq!(page_source_for(Path::new("contract.pdf")).name(), "pdf");
        assert_eq!(page_source_for(Path::new("CONTRACT.PDF")).name(), "pdf");
        assert_eq!(page_source_for(Path::new("contract.txt")).name(), "text");
        assert_eq!(page_source_for(Path::new("contract")).name(), "text");
    }

    #[test]
    fn test_load_document_from_pdf() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lease_v1.pdf");
        std::fs::write(
            &path,
            pdf::pdf_with_pages(&[&["Rent is 500 per month."], &["Tenant pays a penalty."]]),
        )
        .unwrap();

        let doc = load_document(&path, "v1").unwrap();
        assert_eq!(doc.page_count, 2);
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.paragraphs[0].page_number, 1);
        assert_eq!(doc.paragraphs[1].page_number, 2);
        assert!(doc.paragraphs[1].text.contains("penalty"));
    }

    #[test]
    fn test_corrupt_pdf_reports_label_and_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, "not a pdf").unwrap();

        match load_document(&path, "v2").unwrap_err() {
            DocDiffError::Ingest {
                context,
                source: IngestErrorKind::Pdf(_),
            } => {
                assert!(context.starts_with("loading v2 via pdf"));
                assert!(context.contains("broken.pdf"));
            }
            other => panic!("Expected Pdf error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_reports_label() {
        let err = load_document(Path::new("/definitely/not/here.txt"), "v2").unwrap_err();
        match err {
            DocDiffError::Ingest {
                context,
                source: IngestErrorKind::FileNotFound(_),
            } => assert!(context.starts_with("loading v2")),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }
}
