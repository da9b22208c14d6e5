//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Brief colored terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Standalone HTML report
    Html,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl ReportFormat {
    /// File extension used when the report is saved as an artifact.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Summary => "txt",
            Self::Json => "json",
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Maximum changes listed in terminal and Markdown output
    pub max_items: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Create a config for the named document
    pub fn for_document(document_name: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                document_name: document_name.into(),
                ..ReportMetadata::new()
            },
            ..Self::default()
        }
    }

    /// Report title, defaulting to one derived from the document name
    #[must_use]
    pub fn title_or_default(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            if self.metadata.document_name.is_empty() {
                "Document Comparison".to_string()
            } else {
                format!("Document Comparison: {}", self.metadata.document_name)
            }
        })
    }

    /// Generation timestamp, fixed by the metadata or taken now
    #[must_use]
    pub fn generated_at(&self) -> String {
        self.metadata
            .generated_at
            .clone()
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339())
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Name of the compared document
    pub document_name: String,
    /// Old version file path
    pub old_path: Option<String>,
    /// New version file path
    pub new_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_defaults_to_document_name() {
        let config = ReportConfig::for_document("HR Policy");
        assert_eq!(config.title_or_default(), "Document Comparison: HR Policy");
        assert_eq!(config.metadata.tool_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_fixed_timestamp() {
        let mut config = ReportConfig::default();
        config.metadata.generated_at = Some("2024-01-01T00:00:00+00:00".to_string());
        assert_eq!(config.generated_at(), "2024-01-01T00:00:00+00:00");
    }
}
