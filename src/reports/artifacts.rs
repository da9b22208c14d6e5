//! Report artifacts saved next to every comparison.
//!
//! Each run leaves a JSON and an HTML report in the report directory, named
//! `{document}_{old}_vs_{new}.{ext}` after the sanitized document name and
//! version labels. A rerun with the same names overwrites the previous files.

use super::{HtmlReporter, JsonReporter, ReportConfig, ReportFormat, ReportGenerator};
use crate::diff::ComparisonResult;
use crate::error::{DocDiffError, ErrorContext, ReportErrorKind, Result};
use crate::model::DocumentVersion;
use std::path::{Path, PathBuf};

/// Replace every character that is not alphanumeric, `-` or `_` with `_`.
///
/// ```
/// use docdiff::reports::safe_name;
///
/// assert_eq!(safe_name("HR Policy/2024"), "HR_Policy_2024");
/// assert_eq!(safe_name("v1.2"), "v1_2");
/// ```
#[must_use]
pub fn safe_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Paths of the artifacts written for one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub json: PathBuf,
    pub html: PathBuf,
}

/// Writes the JSON and HTML artifacts of a comparison into a directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    report_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(report_dir: impl Into<PathBuf>) -> Self {
        Self {
            report_dir: report_dir.into(),
        }
    }

    /// Directory the artifacts are written to
    #[must_use]
    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    /// Artifact path for a given document, version pair and format.
    ///
    /// Only JSON and HTML are saved as artifacts.
    pub fn artifact_path(
        &self,
        document_name: &str,
        old_label: &str,
        new_label: &str,
        format: ReportFormat,
    ) -> Result<PathBuf> {
        if !matches!(format, ReportFormat::Json | ReportFormat::Html) {
            return Err(DocDiffError::report(
                "choosing artifact path",
                ReportErrorKind::UnsupportedFormat(format.to_string()),
            ));
        }
        let file_name = format!(
            "{}_{}_vs_{}.{}",
            safe_name(document_name),
            safe_name(old_label),
            safe_name(new_label),
            format.extension()
        );
        Ok(self.report_dir.join(file_name))
    }

    /// Render and save both artifacts, creating the directory if needed.
    pub fn write(
        &self,
        result: &ComparisonResult,
        old: &DocumentVersion,
        new: &DocumentVersion,
        config: &ReportConfig,
    ) -> Result<ArtifactPaths> {
        std::fs::create_dir_all(&self.report_dir)
            .map_err(|e| DocDiffError::io(&self.report_dir, e))?;

        let name = &config.metadata.document_name;
        let json_path = self.artifact_path(name, &old.label, &new.label, ReportFormat::Json)?;
        let html_path = self.artifact_path(name, &old.label, &new.label, ReportFormat::Html)?;

        let json = JsonReporter::new()
            .generate_compare_report(result, old, new, config)
            .context("rendering JSON artifact")?;
        std::fs::write(&json_path, json).map_err(|e| DocDiffError::io(&json_path, e))?;

        let html = HtmlReporter::new()
            .generate_compare_report(result, old, new, config)
            .context("rendering HTML artifact")?;
        std::fs::write(&html_path, html).map_err(|e| DocDiffError::io(&html_path, e))?;

        tracing::debug!(
            json = %json_path.display(),
            html = %html_path.display(),
            "wrote report artifacts"
        );

        Ok(ArtifactPaths {
            json: json_path,
            html: html_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample;
    use tempfile::TempDir;

    #[test]
    fn test_safe_name() {
        assert_eq!(safe_name("Contract A"), "Contract_A");
        assert_eq!(safe_name("a-b_c"), "a-b_c");
        assert_eq!(safe_name("../etc"), "___etc");
        assert_eq!(safe_name("สัญญา"), "สัญญา");
    }

    #[test]
    fn test_artifact_path_layout() {
        let writer = ArtifactWriter::new("out");
        let path = writer
            .artifact_path("HR Policy", "v1", "v2", ReportFormat::Json)
            .unwrap();
        assert_eq!(path, PathBuf::from("out/HR_Policy_v1_vs_v2.json"));
    }

    #[test]
    fn test_labels_sanitized() {
        let writer = ArtifactWriter::new("out");
        let path = writer
            .artifact_path("Doc", "2024/01", "../x", ReportFormat::Html)
            .unwrap();
        assert_eq!(path, PathBuf::from("out/Doc_2024_01_vs____x.html"));
    }

    #[test]
    fn test_non_file_format_rejected() {
        let writer = ArtifactWriter::new("out");
        let err = writer
            .artifact_path("Doc", "v1", "v2", ReportFormat::Summary)
            .unwrap_err();
        assert!(matches!(
            err,
            DocDiffError::Report {
                source: ReportErrorKind::UnsupportedFormat(_),
                ..
            }
        ));
    }

    #[test]
    fn test_write_creates_directory_and_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("outputs");
        let writer = ArtifactWriter::new(&dir);
        let (result, old, new) = sample();

        let paths = writer
            .write(&result, &old, &new, &ReportConfig::for_document("Supply Contract"))
            .unwrap();

        assert_eq!(paths.json, dir.join("Supply_Contract_v1_vs_v2.json"));
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&paths.json).unwrap()).unwrap();
        assert_eq!(json["document_name"], "Supply Contract");
        let html = std::fs::read_to_string(&paths.html).unwrap();
        assert!(html.contains("Document Versioning Compare"));
    }
}
