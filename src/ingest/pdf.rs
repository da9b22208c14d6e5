//! PDF page source.

use super::loader::PageSource;
use crate::error::{DocDiffError, IngestErrorKind, Result};
use crate::model::PageText;
use lopdf::Document;

/// Extracts the text layer of a PDF, one [`PageText`] per page.
///
/// Pages without a text layer come back empty. Scanned documents need OCR
/// before they reach this loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfPageLoader;

impl PdfPageLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn pdf_error(message: impl Into<String>) -> DocDiffError {
    DocDiffError::ingest("", IngestErrorKind::Pdf(message.into()))
}

impl PageSource for PdfPageLoader {
    fn pages_from_bytes(&self, bytes: &[u8]) -> Result<Vec<PageText>> {
        let doc = Document::load_mem(bytes).map_err(|e| pdf_error(e.to_string()))?;
        if doc.is_encrypted() {
            return Err(pdf_error("document is encrypted"));
        }

        let pages = doc
            .get_pages()
            .into_keys()
            .map(|number| {
                let text = doc
                    .extract_text(&[number])
                    .map_err(|e| pdf_error(format!("page {number}: {e}")))?;
                Ok(PageText::new(number, text.trim()))
            })
            .collect::<Result<Vec<_>>>()?;

        if !pages.is_empty() && pages.iter().all(|p| p.text.is_empty()) {
            tracing::warn!(
                pages = pages.len(),
                "PDF has no text layer; run OCR before comparing"
            );
        }
        Ok(pages)
    }

    fn name(&self) -> &str {
        "pdf"
    }
}

/// Build an uncompressed PDF with one line of Helvetica text per page.
#[cfg(test)]
pub(crate) fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    use lopdf::{Dictionary, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.new_object_id();
    let catalog_id = doc.new_object_id();

    let mut font = Dictionary::new();
    font.set("Type", Object::Name(b"Font".to_vec()));
    font.set("Subtype", Object::Name(b"Type1".to_vec()));
    font.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    font.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    doc.objects.insert(font_id, Object::Dictionary(font));

    let mut fonts = Dictionary::new();
    fonts.set("F1", Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    let mut kids = Vec::new();
    for lines in pages {
        let content: String = lines
            .iter()
            .map(|line| format!("BT /F1 12 Tf 50 700 Td ({line}) Tj ET\n"))
            .collect();
        let content_id = doc.new_object_id();
        doc.objects.insert(
            content_id,
            Object::Stream(Stream::new(Dictionary::new(), content.into_bytes())),
        );

        let page_id = doc.new_object_id();
        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(pages_id));
        page.set("Contents", Object::Reference(content_id));
        page.set("Resources", Object::Dictionary(resources.clone()));
        page.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ]),
        );
        doc.objects.insert(page_id, Object::Dictionary(page));
        kids.push(Object::Reference(page_id));
    }

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(kids.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    doc.objects.insert(catalog_id, Object::Dictionary(catalog));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_page_text_per_pdf_page() {
        let bytes = pdf_with_pages(&[&["Fee is 100."], &["Penalty applies.", "Late fee."]]);
        let pages = PdfPageLoader::new().pages_from_bytes(&bytes).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page, 1);
        assert_eq!(pages[1].page, 2);
        assert!(pages[0].text.contains("Fee is 100."));
        assert!(pages[1].text.contains("Penalty applies."));
        assert!(pages[1].text.contains("Late fee."));
        assert!(!pages[1].text.contains("Fee is 100."));
    }

    #[test]
    fn test_page_text_trimmed() {
        let bytes = pdf_with_pages(&[&["Terms."]]);
        let pages = PdfPageLoader::new().pages_from_bytes(&bytes).unwrap();
        assert_eq!(pages[0].text, pages[0].text.trim());
    }

    #[test]
    fn test_not_a_pdf_rejected() {
        let err = PdfPageLoader::new()
            .pages_from_bytes(b"plain text, not a PDF")
            .unwrap_err();
        assert!(matches!(
            err,
            DocDiffError::Ingest {
                source: IngestErrorKind::Pdf(_),
                ..
            }
        ));
    }
}
