//! Report stage.
//!
//! Renders the primary report to stdout or a file, and saves the JSON and
//! HTML artifacts into the report directory.

use super::{should_use_color, write_output, OutputTarget};
use crate::config::CompareConfig;
use crate::diff::ComparisonResult;
use crate::model::DocumentVersion;
use crate::reports::{
    create_reporter_with_options, ArtifactPaths, ArtifactWriter, ReportConfig, ReportMetadata,
};
use anyhow::{Context, Result};

/// Report settings derived from a compare configuration.
#[must_use]
pub fn build_report_config(config: &CompareConfig) -> ReportConfig {
    ReportConfig {
        metadata: ReportMetadata {
            document_name: config.document_name.clone(),
            old_path: Some(config.paths.old.to_string_lossy().to_string()),
            new_path: Some(config.paths.new.to_string_lossy().to_string()),
            ..ReportMetadata::new()
        },
        ..ReportConfig::default()
    }
}

/// Output the primary report to the configured destination.
pub fn output_report(
    config: &CompareConfig,
    result: &ComparisonResult,
    old: &DocumentVersion,
    new: &DocumentVersion,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter = create_reporter_with_options(config.output.format, use_color);

    let report = reporter
        .generate_compare_report(result, old, new, &build_report_config(config))
        .with_context(|| format!("Failed to generate {} report", config.output.format))?;

    write_output(&report, &output_target, config.behavior.quiet)
}

/// Save the JSON and HTML artifacts, if enabled.
pub fn write_artifacts(
    config: &CompareConfig,
    result: &ComparisonResult,
    old: &DocumentVersion,
    new: &DocumentVersion,
) -> Result<Option<ArtifactPaths>> {
    if !config.output.write_artifacts {
        return Ok(None);
    }

    let writer = ArtifactWriter::new(&config.output.report_dir);
    let paths = writer
        .write(result, old, new, &build_report_config(config))
        .with_context(|| {
            format!(
                "Failed to write report artifacts to {}",
                config.output.report_dir.display()
            )
        })?;

    if !config.behavior.quiet {
        tracing::info!("JSON report: {}", paths.json.display());
        tracing::info!("HTML report: {}", paths.html.display());
    }
    Ok(Some(paths))
}
