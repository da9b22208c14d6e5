//! Configuration module for docdiff.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use docdiff::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Strict);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .matching_threshold(0.7)
//!     .fail_on_change(true)
//!     .build();
//!
//! // Load from file
//! use docdiff::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.docdiff.yaml` file in your project root or `~/.config/docdiff/`:
//!
//! ```yaml
//! matching:
//!   threshold: 0.7
//!   strategy: ordered
//! risk:
//!   high: [terminate, liability, penalty, indemnity]
//! behavior:
//!   fail_on_risk: HIGH
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_EXCERPT_CHARS, DEFAULT_MATCHING_THRESHOLD, DEFAULT_MAX_EXAMPLES,
    DEFAULT_REPORT_DIR, DEFAULT_STORE_PATH,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, CompareConfigBuilder,
    ComparePaths, MatchingConfig, OutputConfig, StoreConfig, SummaryConfig,
};
pub use validation::{ensure_valid, ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.docdiff.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
