//! Ingest stage: read both versions from disk.

use super::PipelineError;
use crate::config::CompareConfig;
use crate::ingest::load_document;
use crate::model::DocumentVersion;
use anyhow::{Context, Result};
use std::path::Path;

/// Load one version with context for error messages
pub fn load_version_with_context(path: &Path, label: &str, quiet: bool) -> Result<DocumentVersion> {
    if !quiet {
        tracing::info!("Loading {}: {}", label, path.display());
    }

    let version = load_document(path, label)
        .with_context(|| format!("Failed to load document: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "- {}: pages={}, paragraphs={}",
            label,
            version.page_count,
            version.paragraph_count()
        );
    }
    Ok(version)
}

/// Load the old and new versions named by the config.
///
/// Both files are checked before either is read, so a missing new version
/// fails fast without touching the old one.
pub fn load_versions(
    config: &CompareConfig,
) -> std::result::Result<(DocumentVersion, DocumentVersion), PipelineError> {
    let quiet = config.behavior.quiet;
    let paths = &config.paths;

    for path in [&paths.old, &paths.new] {
        if !path.exists() {
            return Err(PipelineError::IngestFailed {
                path: path.display().to_string(),
                source: anyhow::anyhow!("File not found: {}", path.display()),
            });
        }
    }

    let load = |path: &Path, label: &str| {
        load_version_with_context(path, label, quiet).map_err(|source| {
            PipelineError::IngestFailed {
                path: path.display().to_string(),
                source,
            }
        })
    };

    let old = load(paths.old.as_path(), paths.old_label.as_str())?;
    let new = load(paths.new.as_path(), paths.new_label.as_str())?;
    Ok((old, new))
}
