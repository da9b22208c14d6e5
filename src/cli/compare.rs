//! Compare command handler.
//!
//! Implements the `compare` subcommand for comparing two document versions.

use crate::analysis::RiskLevel;
use crate::config::{ensure_valid, CompareConfig};
use crate::diff::ComparisonResult;
use crate::model::DocumentVersion;
use crate::pipeline::{
    compute_comparison, exit_codes, load_versions, output_report, record_run, write_artifacts,
    PipelineError,
};
use crate::reports::ArtifactPaths;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Everything a caller needs to know about one comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct CompareOutcome {
    pub document_name: String,
    pub old_label: String,
    pub new_label: String,
    pub pages_old: usize,
    pub pages_new: usize,
    pub paragraphs_old: usize,
    pub paragraphs_new: usize,
    pub changes_count: usize,
    pub risk_level: RiskLevel,
    pub summary_text: String,
    pub json_report_path: Option<PathBuf>,
    pub html_report_path: Option<PathBuf>,
    /// Comparison id in the store, if the run was recorded
    pub run_id: Option<i64>,
    #[serde(skip)]
    pub result: ComparisonResult,
}

impl CompareOutcome {
    fn new(
        config: &CompareConfig,
        old: &DocumentVersion,
        new: &DocumentVersion,
        result: ComparisonResult,
        artifacts: Option<ArtifactPaths>,
        run_id: Option<i64>,
    ) -> Self {
        let (json_report_path, html_report_path) =
            artifacts.map_or((None, None), |paths| (Some(paths.json), Some(paths.html)));
        Self {
            document_name: config.document_name.clone(),
            old_label: old.label.clone(),
            new_label: new.label.clone(),
            pages_old: old.page_count,
            pages_new: new.page_count,
            paragraphs_old: old.paragraph_count(),
            paragraphs_new: new.paragraph_count(),
            changes_count: result.changes.len(),
            risk_level: result.risk_level,
            summary_text: result.summary_text.clone(),
            json_report_path,
            html_report_path,
            run_id,
            result,
        }
    }

    /// Multi-line run summary for the terminal.
    #[must_use]
    pub fn render(&self) -> String {
        let or_none = |path: &Option<PathBuf>| {
            path.as_ref()
                .map_or_else(|| "-".to_string(), |p| p.display().to_string())
        };
        let lines = [
            "===== SUMMARY =====".to_string(),
            format!("Document   : {}", self.document_name),
            format!("Compare    : {} → {}", self.old_label, self.new_label),
            format!("Pages      : {} / {}", self.pages_old, self.pages_new),
            format!("Paragraphs : {} / {}", self.paragraphs_old, self.paragraphs_new),
            format!("Changes    : {}", self.changes_count),
            format!("Risk Level : {}", self.risk_level),
            format!("JSON       : {}", or_none(&self.json_report_path)),
            format!("HTML       : {}", or_none(&self.html_report_path)),
            format!(
                "Run ID     : {}",
                self.run_id.map_or_else(|| "-".to_string(), |id| id.to_string())
            ),
        ];
        lines.join("\n")
    }
}

/// Run a comparison end to end: validate, load, compare, save artifacts, record.
///
/// The primary report is not printed; see [`run_compare`].
pub fn compare_documents(config: &CompareConfig) -> Result<CompareOutcome, PipelineError> {
    ensure_valid(config).map_err(|source| PipelineError::InvalidConfig { source })?;
    let (old, new) = load_versions(config)?;
    let result = compute_comparison(config, &old, &new);

    let artifacts = write_artifacts(config, &result, &old, &new)
        .map_err(|source| PipelineError::ReportFailed { source })?;
    let run_id = record_run(config, &result, &old, &new)
        .map_err(|source| PipelineError::StoreFailed { source })?;

    Ok(CompareOutcome::new(config, &old, &new, result, artifacts, run_id))
}

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    ensure_valid(&config).map_err(|source| PipelineError::InvalidConfig { source })?;

    let (old, new) = load_versions(&config)?;
    let result = compute_comparison(&config, &old, &new);

    output_report(&config, &result, &old, &new)
        .map_err(|source| PipelineError::ReportFailed { source })?;
    let artifacts = write_artifacts(&config, &result, &old, &new)
        .map_err(|source| PipelineError::ReportFailed { source })?;
    let run_id = record_run(&config, &result, &old, &new)
        .map_err(|source| PipelineError::StoreFailed { source })?;

    let exit_code = determine_exit_code(&config, &result);

    if !config.behavior.quiet {
        let outcome = CompareOutcome::new(&config, &old, &new, result, artifacts, run_id);
        // stderr keeps stdout clean for piped reports
        eprintln!("\n{}", outcome.render());
    }

    Ok(exit_code)
}

/// Determine the appropriate exit code based on the result and config flags.
fn determine_exit_code(config: &CompareConfig, result: &ComparisonResult) -> i32 {
    if let Some(level) = config.behavior.fail_on_risk {
        if result.risk_level >= level {
            return exit_codes::RISK_THRESHOLD;
        }
    }
    if config.behavior.fail_on_change && result.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
