//! Report generation for comparison results.
//!
//! This module provides multiple output formats for document comparisons:
//! - Summary: Compact colored terminal output
//! - JSON: Structured data for programmatic integration
//! - HTML: Standalone stakeholder reports
//! - Markdown: Human-readable documentation
//!
//! [`ArtifactWriter`] saves the JSON and HTML reports under deterministic
//! file names so that every comparison leaves reviewable artifacts behind.
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! All document text is user-controlled and must be escaped before it is
//! embedded in HTML or Markdown reports.

mod artifacts;
pub mod escape;
mod html;
mod json;
mod markdown;
mod summary;
mod types;

pub use artifacts::{safe_name, ArtifactPaths, ArtifactWriter};
pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::ComparisonResult;
use crate::model::DocumentVersion;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a comparison result
    fn generate_compare_report(
        &self,
        result: &ComparisonResult,
        old: &DocumentVersion,
        new: &DocumentVersion,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_compare_report(
        &self,
        result: &ComparisonResult,
        old: &DocumentVersion,
        new: &DocumentVersion,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_compare_report(result, old, new, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::diff::{ComparisonResult, DiffEngine};
    use crate::model::{DocumentVersion, Paragraph};

    pub fn paragraph(page: u32, index: usize, text: &str) -> Paragraph {
        Paragraph {
            page_number: page,
            index,
            text: text.to_string(),
        }
    }

    /// A small comparison with one change of each kind.
    pub fn sample() -> (ComparisonResult, DocumentVersion, DocumentVersion) {
        let old = DocumentVersion::new(
            "v1",
            2,
            vec![
                paragraph(1, 0, "The supplier may terminate this agreement with notice."),
                paragraph(2, 0, "Invoices are sent <monthly> & paid by transfer."),
            ],
        );
        let new = DocumentVersion::new(
            "v2",
            2,
            vec![
                paragraph(1, 0, "The supplier may terminate this agreement with 30 days notice."),
                paragraph(2, 0, "A penalty applies to late payment."),
            ],
        );
        let result = DiffEngine::new().compare(&old, &new);
        (result, old, new)
    }
}
