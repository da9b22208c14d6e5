//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::analysis::RiskLevel;
use crate::diff::{Change, ChangeCounts, ComparisonResult};
use crate::model::DocumentVersion;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to leave out the change list
    summary_only: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            summary_only: false,
            pretty: true,
        }
    }

    /// Create a summary-only reporter
    #[must_use]
    pub const fn summary_only() -> Self {
        Self {
            summary_only: true,
            pretty: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_compare_report(
        &self,
        result: &ComparisonResult,
        old: &DocumentVersion,
        new: &DocumentVersion,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonCompareReport {
            document_name: &config.metadata.document_name,
            version_old: &old.label,
            version_new: &new.label,
            overall_risk_level: result.risk_level,
            summary_text: &result.summary_text,
            changes: if self.summary_only {
                None
            } else {
                Some(&result.changes)
            },
            generated_at: config.generated_at(),
            tool: ToolInfo {
                name: "docdiff",
                version: env!("CARGO_PKG_VERSION"),
            },
            counts: result.counts,
            risk_keywords: RiskHits {
                high: &result.risk.high_hits,
                medium: &result.risk.medium_hits,
            },
            versions: VersionStats {
                old: VersionInfo::from_version(old, config.metadata.old_path.as_deref()),
                new: VersionInfo::from_version(new, config.metadata.new_path.as_deref()),
            },
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures

#[derive(Serialize)]
struct JsonCompareReport<'a> {
    document_name: &'a str,
    version_old: &'a str,
    version_new: &'a str,
    overall_risk_level: RiskLevel,
    summary_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    changes: Option<&'a Vec<Change>>,
    generated_at: String,
    tool: ToolInfo,
    counts: ChangeCounts,
    risk_keywords: RiskHits<'a>,
    versions: VersionStats<'a>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct RiskHits<'a> {
    high: &'a [String],
    medium: &'a [String],
}

#[derive(Serialize)]
struct VersionStats<'a> {
    old: VersionInfo<'a>,
    new: VersionInfo<'a>,
}

#[derive(Serialize)]
struct VersionInfo<'a> {
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_path: Option<&'a str>,
    pages: usize,
    paragraphs: usize,
}

impl<'a> VersionInfo<'a> {
    fn from_version(version: &'a DocumentVersion, file_path: Option<&'a str>) -> Self {
        Self {
            label: &version.label,
            file_path,
            pages: version.page_count,
            paragraphs: version.paragraph_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample;

    fn render(reporter: &JsonReporter) -> serde_json::Value {
        let (result, old, new) = sample();
        let mut config = ReportConfig::for_document("Supply Contract");
        config.metadata.generated_at = Some("2024-05-01T10:00:00+00:00".to_string());
        let json = reporter
            .generate_compare_report(&result, &old, &new, &config)
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_json_report_fields() {
        let value = render(&JsonReporter::new());
        assert_eq!(value["document_name"], "Supply Contract");
        assert_eq!(value["version_old"], "v1");
        assert_eq!(value["version_new"], "v2");
        assert_eq!(value["overall_risk_level"], "HIGH");
        assert_eq!(value["generated_at"], "2024-05-01T10:00:00+00:00");
        assert_eq!(value["tool"]["name"], "docdiff");
        assert_eq!(value["versions"]["old"]["pages"], 2);
    }

    #[test]
    fn test_json_report_changes() {
        let value = render(&JsonReporter::new());
        let changes = value["changes"].as_array().unwrap();
        assert_eq!(changes.len(), value["counts"]["total"].as_u64().unwrap() as usize);
        assert_eq!(changes[0]["change_type"], "MODIFIED");
        assert_eq!(changes[0]["section_label"], "page 1");
        assert!(changes
            .iter()
            .any(|c| c["change_type"] == "ADDED" && c["old_text"].is_null()));
    }

    #[test]
    fn test_summary_only_omits_changes() {
        let value = render(&JsonReporter::summary_only().pretty(false));
        assert!(value.get("changes").is_none());
        assert!(value["summary_text"].as_str().unwrap().contains("total"));
    }
}
