//! Keyword-based risk rating of a change set.

use crate::diff::Change;
use clap::ValueEnum;
use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse heuristic severity of a change set.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Parse the uppercase form produced by [`RiskLevel::as_str`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// High- and medium-risk keyword sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RiskKeywords {
    /// Two distinct hits rate a change set HIGH, one hit MEDIUM
    pub high: Vec<String>,
    /// Two distinct hits rate a change set MEDIUM
    pub medium: Vec<String>,
}

const DEFAULT_HIGH: &[&str] = &[
    "terminate",
    "termination",
    "ยกเลิกสัญญา",
    "liability",
    "รับผิด",
    "ชดใช้",
    "penalty",
    "ค่าปรับ",
    "ความเสียหาย",
    "confidential",
    "ความลับ",
    "ไม่เปิดเผย",
];

const DEFAULT_MEDIUM: &[&str] = &[
    "payment",
    "จ่ายเงิน",
    "ค่าใช้จ่าย",
    "credit",
    "debit",
    "ดอกเบี้ย",
    "scope",
    "ขอบเขตงาน",
    "sla",
    "service level",
];

impl Default for RiskKeywords {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH.iter().map(|s| (*s).to_string()).collect(),
            medium: DEFAULT_MEDIUM.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Outcome of a risk assessment, with the keywords that drove it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Distinct high-risk keywords found, in keyword-list order
    pub high_hits: Vec<String>,
    /// Distinct medium-risk keywords found, in keyword-list order
    pub medium_hits: Vec<String>,
}

/// Rates a change set by keyword presence in its changed text.
#[derive(Debug, Clone)]
pub struct RiskAssessor {
    high: IndexSet<String>,
    medium: IndexSet<String>,
}

impl RiskAssessor {
    /// Build an assessor. Keywords are lowercased and deduplicated; empty
    /// keywords are ignored.
    #[must_use]
    pub fn new(keywords: &RiskKeywords) -> Self {
        Self {
            high: normalize_keywords(&keywords.high),
            medium: normalize_keywords(&keywords.medium),
        }
    }

    /// Rate a change set.
    ///
    /// New and old text of every change are joined into one lowercase blob
    /// and each keyword counts once if it occurs anywhere in it.
    #[must_use]
    pub fn assess(&self, changes: &[Change]) -> RiskAssessment {
        let blob = changed_text_blob(changes);

        let high_hits: Vec<String> = self
            .high
            .iter()
            .filter(|kw| blob.contains(kw.as_str()))
            .cloned()
            .collect();
        let medium_hits: Vec<String> = self
            .medium
            .iter()
            .filter(|kw| blob.contains(kw.as_str()))
            .cloned()
            .collect();

        let level = if high_hits.len() >= 2 {
            RiskLevel::High
        } else if high_hits.len() == 1 || medium_hits.len() >= 2 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        RiskAssessment {
            level,
            high_hits,
            medium_hits,
        }
    }
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::new(&RiskKeywords::default())
    }
}

fn normalize_keywords(keywords: &[String]) -> IndexSet<String> {
    keywords
        .iter()
        .map(|kw| kw.to_lowercase())
        .filter(|kw| !kw.is_empty())
        .collect()
}

fn changed_text_blob(changes: &[Change]) -> String {
    changes
        .iter()
        .map(|c| {
            format!(
                "{} {}",
                c.new_text.as_deref().unwrap_or_default(),
                c.old_text.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_levels_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_no_changes_is_low() {
        assert_eq!(RiskAssessor::default().assess(&[]).level, RiskLevel::Low);
    }

    #[test]
    fn test_two_high_keywords_is_high() {
        let changes = vec![Change::modified(
            "page 2",
            "Contract may be terminated for cause and includes liability for damages.",
            "Contract may be terminated for cause and includes liability for damages and a penalty clause.",
            0.87,
        )];
        let assessment = RiskAssessor::default().assess(&changes);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.high_hits, vec!["terminate", "liability", "penalty"]);
    }

    #[test]
    fn test_single_high_keyword_is_medium() {
        let changes = vec![Change::added("page 1", "All information is CONFIDENTIAL.")];
        let assessment = RiskAssessor::default().assess(&changes);
        assert_eq!(assessment.level, RiskLevel::Medium);
    }

    #[test]
    fn test_two_medium_keywords_is_medium() {
        let changes = vec![
            Change::added("page 1", "Payment within 30 days."),
            Change::removed("page 3", "Scope of work."),
        ];
        assert_eq!(RiskAssessor::default().assess(&changes).level, RiskLevel::Medium);
    }

    #[test]
    fn test_one_medium_keyword_is_low() {
        let changes = vec![Change::added("page 1", "Payment within 30 days.")];
        assert_eq!(RiskAssessor::default().assess(&changes).level, RiskLevel::Low);
    }

    #[test]
    fn test_thai_keywords() {
        let changes = vec![Change::added("page 1", "ผู้รับจ้างต้องชำระค่าปรับและชดใช้ความเสียหาย")];
        assert_eq!(RiskAssessor::default().assess(&changes).level, RiskLevel::High);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let changes = vec![Change::added("page 1", "penalty penalty penalty")];
        let assessment = RiskAssessor::default().assess(&changes);
        assert_eq!(assessment.high_hits.len(), 1);
        assert_eq!(assessment.level, RiskLevel::Medium);
    }

    #[test]
    fn test_custom_keywords_normalized() {
        let keywords = RiskKeywords {
            high: vec!["Indemnity".into(), "indemnity".into(), String::new()],
            medium: vec![],
        };
        let assessor = RiskAssessor::new(&keywords);
        let assessment = assessor.assess(&[Change::added("page 1", "indemnity applies")]);
        assert_eq!(assessment.high_hits, vec!["indemnity"]);
        assert_eq!(assessment.level, RiskLevel::Medium);
    }

    #[test]
    fn test_risk_level_wire_name() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"HIGH\"");
    }
}
