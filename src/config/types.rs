//! Configuration types for docdiff operations.
//!
//! Provides the file-backed [`AppConfig`] and the per-run [`CompareConfig`].

use crate::analysis::{RiskKeywords, RiskLevel, SummaryBuilder, SummaryLanguage};
use crate::diff::{DiffEngine, DEFAULT_UNCHANGED_THRESHOLD};
use crate::matching::{AlignmentStrategy, SimilarityMetric};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_EXCERPT_CHARS, DEFAULT_MATCHING_THRESHOLD, DEFAULT_MAX_EXAMPLES, DEFAULT_REPORT_DIR,
    DEFAULT_STORE_PATH,
};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override file settings, which override defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Paragraph matching configuration
    pub matching: MatchingConfig,
    /// Risk keyword sets
    pub risk: RiskKeywords,
    /// Summary text configuration
    pub summary: SummaryConfig,
    /// Output configuration (format, file, report directory, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Comparison history store
    pub store: StoreConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the matching threshold.
    pub const fn matching_threshold(mut self, threshold: f64) -> Self {
        self.config.matching.threshold = threshold;
        self
    }

    /// Set the unchanged threshold.
    pub const fn unchanged_threshold(mut self, threshold: f64) -> Self {
        self.config.matching.unchanged_threshold = threshold;
        self
    }

    /// Set the alignment strategy.
    pub const fn strategy(mut self, strategy: AlignmentStrategy) -> Self {
        self.config.matching.strategy = strategy;
        self
    }

    /// Set the risk keyword sets.
    pub fn risk_keywords(mut self, keywords: RiskKeywords) -> Self {
        self.config.risk = keywords;
        self
    }

    /// Set the summary language.
    pub const fn summary_language(mut self, language: SummaryLanguage) -> Self {
        self.config.summary.language = language;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Fail when the risk level reaches this level.
    pub const fn fail_on_risk(mut self, level: Option<RiskLevel>) -> Self {
        self.config.behavior.fail_on_risk = level;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Enable or disable the comparison store.
    pub const fn store_enabled(mut self, enabled: bool) -> Self {
        self.config.store.enabled = enabled;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for one compare run
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Document name used in reports and the store
    pub document_name: String,
    /// Versions to compare
    pub paths: ComparePaths,
    /// Matching configuration
    pub matching: MatchingConfig,
    /// Risk keyword sets
    pub risk: RiskKeywords,
    /// Summary configuration
    pub summary: SummaryConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Store configuration
    pub store: StoreConfig,
}

impl CompareConfig {
    /// Build the comparison engine for this run.
    #[must_use]
    pub fn engine(&self) -> DiffEngine {
        self.matching
            .engine()
            .with_keywords(&self.risk)
            .with_summary(self.summary.builder())
    }
}

/// Paths and labels of the two versions
#[derive(Debug, Clone)]
pub struct ComparePaths {
    /// Path to the old version's text
    pub old: PathBuf,
    /// Path to the new version's text
    pub new: PathBuf,
    /// Label of the old version
    pub old_label: String,
    /// Label of the new version
    pub new_label: String,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Paragraph matching and change classification configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum similarity for two paragraphs to be paired
    #[schemars(range(min = 0.0, max = 1.0))]
    pub threshold: f64,
    /// Similarity above which a matched pair is not reported
    #[schemars(range(min = 0.0, max = 1.0))]
    pub unchanged_threshold: f64,
    /// Similarity metric
    pub metric: SimilarityMetric,
    /// Alignment strategy
    pub strategy: AlignmentStrategy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCHING_THRESHOLD,
            unchanged_threshold: DEFAULT_UNCHANGED_THRESHOLD,
            metric: SimilarityMetric::default(),
            strategy: AlignmentStrategy::default(),
        }
    }
}

impl MatchingConfig {
    /// Engine with these matching settings and default keywords and summary.
    #[must_use]
    pub fn engine(&self) -> DiffEngine {
        DiffEngine::new()
            .with_threshold(self.threshold)
            .with_unchanged_threshold(self.unchanged_threshold)
            .with_metric(self.metric)
            .with_strategy(self.strategy)
    }
}

/// Summary text configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SummaryConfig {
    /// Maximum number of example entries
    pub max_examples: usize,
    /// Excerpt length in characters
    #[schemars(range(min = 1))]
    pub excerpt_chars: usize,
    /// Summary language
    pub language: SummaryLanguage,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_examples: DEFAULT_MAX_EXAMPLES,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            language: SummaryLanguage::default(),
        }
    }
}

impl SummaryConfig {
    #[must_use]
    pub fn builder(&self) -> SummaryBuilder {
        SummaryBuilder::new()
            .language(self.language)
            .max_examples(self.max_examples)
            .excerpt_chars(self.excerpt_chars)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for the primary report
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Directory receiving the JSON and HTML report artifacts
    pub report_dir: PathBuf,
    /// Write JSON and HTML artifacts to `report_dir`
    pub write_artifacts: bool,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            write_artifacts: true,
            no_color: false,
        }
    }
}

/// Behavior flags for compare operations
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes detected
    pub fail_on_change: bool,
    /// Exit with code 2 if the risk level is at or above this level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_risk: Option<RiskLevel>,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Comparison history store configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StoreConfig {
    /// Record every comparison run
    pub enabled: bool,
    /// Path of the SQLite database file
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

// ============================================================================
// Builder for CompareConfig
// ============================================================================

/// Builder for `CompareConfig`
#[derive(Debug, Default)]
pub struct CompareConfigBuilder {
    document_name: Option<String>,
    old: Option<PathBuf>,
    new: Option<PathBuf>,
    old_label: Option<String>,
    new_label: Option<String>,
    matching: MatchingConfig,
    risk: RiskKeywords,
    summary: SummaryConfig,
    output: OutputConfig,
    behavior: BehaviorConfig,
    store: StoreConfig,
}

impl CompareConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the settings of a loaded `AppConfig`.
    #[must_use]
    pub fn from_app_config(config: AppConfig) -> Self {
        Self {
            matching: config.matching,
            risk: config.risk,
            summary: config.summary,
            output: config.output,
            behavior: config.behavior,
            store: config.store,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn old_path(mut self, path: PathBuf) -> Self {
        self.old = Some(path);
        self
    }

    #[must_use]
    pub fn new_path(mut self, path: PathBuf) -> Self {
        self.new = Some(path);
        self
    }

    #[must_use]
    pub fn old_label(mut self, label: impl Into<String>) -> Self {
        self.old_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn new_label(mut self, label: impl Into<String>) -> Self {
        self.new_label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub fn report_dir(mut self, dir: PathBuf) -> Self {
        self.output.report_dir = dir;
        self
    }

    #[must_use]
    pub const fn write_artifacts(mut self, write: bool) -> Self {
        self.output.write_artifacts = write;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn matching_threshold(mut self, threshold: f64) -> Self {
        self.matching.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn unchanged_threshold(mut self, threshold: f64) -> Self {
        self.matching.unchanged_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn metric(mut self, metric: SimilarityMetric) -> Self {
        self.matching.metric = metric;
        self
    }

    #[must_use]
    pub const fn strategy(mut self, strategy: AlignmentStrategy) -> Self {
        self.matching.strategy = strategy;
        self
    }

    #[must_use]
    pub fn risk_keywords(mut self, keywords: RiskKeywords) -> Self {
        self.risk = keywords;
        self
    }

    #[must_use]
    pub const fn summary_language(mut self, language: SummaryLanguage) -> Self {
        self.summary.language = language;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn fail_on_risk(mut self, level: Option<RiskLevel>) -> Self {
        self.behavior.fail_on_risk = level;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn store_enabled(mut self, enabled: bool) -> Self {
        self.store.enabled = enabled;
        self
    }

    #[must_use]
    pub fn store_path(mut self, path: PathBuf) -> Self {
        self.store.path = path;
        self
    }

    pub fn build(self) -> anyhow::Result<CompareConfig> {
        let document_name = self
            .document_name
            .ok_or_else(|| anyhow::anyhow!("document name is required"))?;
        let old = self.old.ok_or_else(|| anyhow::anyhow!("old path is required"))?;
        let new = self.new.ok_or_else(|| anyhow::anyhow!("new path is required"))?;

        Ok(CompareConfig {
            document_name,
            paths: ComparePaths {
                old,
                new,
                old_label: self.old_label.unwrap_or_else(|| "v1".to_string()),
                new_label: self.new_label.unwrap_or_else(|| "v2".to_string()),
            },
            matching: self.matching,
            risk: self.risk,
            summary: self.summary,
            output: self.output,
            behavior: self.behavior,
            store: self.store,
        })
    }
}
