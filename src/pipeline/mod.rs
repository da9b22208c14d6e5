//! Pipeline orchestration for document comparisons.
//!
//! This module provides the stages shared by CLI command handlers:
//! ingest → compare → report → store.

mod compare_stage;
mod ingest_stage;
mod output;
mod report_stage;
mod store_stage;

pub use compare_stage::compute_comparison;
pub use ingest_stage::{load_version_with_context, load_versions};
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::{build_report_config, output_report, write_artifacts};
pub use store_stage::record_run;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The comparison configuration failed validation
    #[error("{source}")]
    InvalidConfig {
        #[source]
        source: crate::error::DocDiffError,
    },

    /// Failed to read or segment an input file
    #[error("Ingest failed for {path}: {source}")]
    IngestFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Recording the run in the comparison store failed
    #[error("Store failed: {source}")]
    StoreFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or no failure flag set)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected with `--fail-on-change`
    pub const CHANGES_DETECTED: i32 = 1;
    /// Risk reached the `--fail-on-risk` level
    pub const RISK_THRESHOLD: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::RISK_THRESHOLD, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::IngestFailed {
            path: "old.txt".to_string(),
            source: anyhow::anyhow!("not UTF-8"),
        };
        assert_eq!(err.to_string(), "Ingest failed for old.txt: not UTF-8");

        let err = PipelineError::InvalidConfig {
            source: crate::error::DocDiffError::config("matching.threshold: out of range"),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: matching.threshold: out of range"
        );
    }
}
