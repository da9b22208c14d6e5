//! Configuration validation for docdiff.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{
    AppConfig, BehaviorConfig, CompareConfig, MatchingConfig, OutputConfig, StoreConfig,
    SummaryConfig,
};
use crate::analysis::RiskKeywords;
use crate::error::{DocDiffError, Result};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Validate a configuration, folding every problem into one config error.
pub fn ensure_valid(config: &impl Validatable) -> Result<()> {
    let problems = config.validate();
    if problems.is_empty() {
        return Ok(());
    }
    let joined: Vec<String> = problems.iter().map(ToString::to_string).collect();
    Err(DocDiffError::config(joined.join("; ")))
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.matching.validate());
        errors.extend(self.risk.validate());
        errors.extend(self.summary.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.store.validate());
        errors
    }
}

fn check_unit_range(errors: &mut Vec<ConfigError>, field: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(ConfigError {
            field: field.to_string(),
            message: format!("Threshold must be between 0.0 and 1.0, got {value}"),
        });
    }
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_unit_range(&mut errors, "matching.threshold", self.threshold);
        check_unit_range(
            &mut errors,
            "matching.unchanged_threshold",
            self.unchanged_threshold,
        );

        if self.unchanged_threshold <= self.threshold {
            errors.push(ConfigError {
                field: "matching.unchanged_threshold".to_string(),
                message: format!(
                    "Unchanged threshold ({}) must be greater than the match threshold ({})",
                    self.unchanged_threshold, self.threshold
                ),
            });
        }

        errors
    }
}

impl Validatable for RiskKeywords {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, list) in [("risk.high", &self.high), ("risk.medium", &self.medium)] {
            if list.is_empty() {
                errors.push(ConfigError {
                    field: field.to_string(),
                    message: "Keyword list must not be empty".to_string(),
                });
            }
            if list.iter().any(|kw| kw.trim().is_empty()) {
                errors.push(ConfigError {
                    field: field.to_string(),
                    message: "Keywords must not be blank".to_string(),
                });
            }
        }
        errors
    }
}

impl Validatable for SummaryConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.excerpt_chars == 0 {
            errors.push(ConfigError {
                field: "summary.excerpt_chars".to_string(),
                message: "Excerpt length must be at least 1".to_string(),
            });
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        if self.write_artifacts && self.report_dir.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "output.report_dir".to_string(),
                message: "Report directory must not be empty".to_string(),
            });
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Flags and an optional risk level; every combination is valid
        Vec::new()
    }
}

impl Validatable for StoreConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.enabled && self.path.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "store.path".to_string(),
                message: "Store path must not be empty when the store is enabled".to_string(),
            });
        }
        errors
    }
}

impl Validatable for CompareConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.document_name.trim().is_empty() {
            errors.push(ConfigError {
                field: "document_name".to_string(),
                message: "Document name must not be empty".to_string(),
            });
        }

        if !self.paths.old.exists() {
            errors.push(ConfigError {
                field: "paths.old".to_string(),
                message: format!("File not found: {}", self.paths.old.display()),
            });
        }
        if !self.paths.new.exists() {
            errors.push(ConfigError {
                field: "paths.new".to_string(),
                message: format!("File not found: {}", self.paths.new.display()),
            });
        }

        errors.extend(self.matching.validate());
        errors.extend(self.risk.validate());
        errors.extend(self.summary.validate());
        errors.extend(self.output.validate());
        errors.extend(self.store.validate());

        errors
    }
}
