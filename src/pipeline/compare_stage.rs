//! Compare stage: align, classify and assess.

use crate::config::CompareConfig;
use crate::diff::ComparisonResult;
use crate::model::DocumentVersion;

/// Run the comparison between two loaded versions.
pub fn compute_comparison(
    config: &CompareConfig,
    old: &DocumentVersion,
    new: &DocumentVersion,
) -> ComparisonResult {
    let quiet = config.behavior.quiet;

    if !quiet {
        tracing::info!(
            "Aligning paragraphs ({} strategy, {} metric, threshold {})",
            config.matching.strategy,
            config.matching.metric,
            config.matching.threshold
        );
    }

    let result = config.engine().compare(old, new);

    if !quiet {
        let counts = &result.counts;
        tracing::info!(
            "Changes: {} total ({} added, {} removed, {} modified)",
            counts.total,
            counts.added,
            counts.removed,
            counts.modified
        );
        tracing::info!("Risk level: {}", result.risk_level);
    }

    result
}
