//! Store stage: record the run in the comparison history.

use crate::config::CompareConfig;
use crate::diff::ComparisonResult;
use crate::model::DocumentVersion;
use crate::store::{ComparisonStore, NewRun, NewVersion, SqliteStore};
use anyhow::{Context, Result};

/// Record a comparison run and return its id, or `None` when the store is
/// disabled.
pub fn record_run(
    config: &CompareConfig,
    result: &ComparisonResult,
    old: &DocumentVersion,
    new: &DocumentVersion,
) -> Result<Option<i64>> {
    if !config.store.enabled {
        return Ok(None);
    }

    let mut store = SqliteStore::open(&config.store.path).with_context(|| {
        format!(
            "Failed to open comparison store {}",
            config.store.path.display()
        )
    })?;
    let run_id = record_in(&mut store, config, result, old, new)?;

    if !config.behavior.quiet {
        tracing::info!("Recorded run {} in {}", run_id, config.store.path.display());
    }
    Ok(Some(run_id))
}

/// Record a run into any store implementation, all or nothing.
pub(crate) fn record_in(
    store: &mut dyn ComparisonStore,
    config: &CompareConfig,
    result: &ComparisonResult,
    old: &DocumentVersion,
    new: &DocumentVersion,
) -> Result<i64> {
    let run_id = store
        .record_run(NewRun {
            document_name: &config.document_name,
            old: NewVersion {
                label: &old.label,
                file_path: &config.paths.old,
            },
            new: NewVersion {
                label: &new.label,
                file_path: &config.paths.new,
            },
            result,
        })
        .context("Failed to record comparison")?;
    Ok(run_id)
}
