//! Default configurations and presets for docdiff.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, MatchingConfig};
use crate::analysis::RiskLevel;
use crate::matching::{AlignmentStrategy, SimilarityMetric};

// ============================================================================
// Default Values
// ============================================================================

/// Default minimum similarity for pairing paragraphs
pub const DEFAULT_MATCHING_THRESHOLD: f64 = crate::matching::DEFAULT_MATCH_THRESHOLD;

/// Default number of summary examples
pub const DEFAULT_MAX_EXAMPLES: usize = crate::analysis::DEFAULT_MAX_EXAMPLES;

/// Default summary excerpt length in characters
pub const DEFAULT_EXCERPT_CHARS: usize = crate::analysis::DEFAULT_EXCERPT_CHARS;

/// Default directory for JSON and HTML artifacts
pub const DEFAULT_REPORT_DIR: &str = "data/outputs";

/// Default comparison store file
pub const DEFAULT_STORE_PATH: &str = "data/docdiff.db";

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Greedy matching with the standard thresholds
    Default,
    /// Order-preserving matching, every edit reported, CI failure on medium risk
    Strict,
    /// Loose matching that tolerates heavy rewording
    Lenient,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" | "exact" => Some(Self::Strict),
            "lenient" | "loose" | "permissive" => Some(Self::Lenient),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Balanced settings suitable for most document comparisons",
            Self::Strict => "Order-preserving alignment that reports even minor edits",
            Self::Lenient => "Loose matching for heavily reworded or reformatted versions",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Lenient]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Lenient => Self::lenient_preset(),
        }
    }

    /// Strict preset.
    ///
    /// - Order-preserving alignment, so reordered sections show up as edits
    /// - Only byte-identical paragraphs count as unchanged
    /// - Fail on medium risk or above
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            matching: MatchingConfig {
                threshold: 0.75,
                unchanged_threshold: 0.999,
                metric: SimilarityMetric::MatchingBlocks,
                strategy: AlignmentStrategy::Ordered,
            },
            behavior: BehaviorConfig {
                fail_on_change: false,
                fail_on_risk: Some(RiskLevel::Medium),
                quiet: false,
            },
            ..Self::default()
        }
    }

    /// Lenient preset.
    ///
    /// - Pairs paragraphs down to 40% similarity
    /// - Ignores edits above 90% similarity
    #[must_use]
    pub fn lenient_preset() -> Self {
        Self {
            matching: MatchingConfig {
                threshold: 0.4,
                unchanged_threshold: 0.9,
                metric: SimilarityMetric::MatchingBlocks,
                strategy: AlignmentStrategy::Greedy,
            },
            ..Self::default()
        }
    }
}
