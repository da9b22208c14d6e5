//! Comparison result structures.

use crate::analysis::{RiskAssessment, RiskLevel};
use serde::{Deserialize, Serialize};

/// Kind of a paragraph-level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl ChangeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "ADDED",
            Self::Removed => "REMOVED",
            Self::Modified => "MODIFIED",
        }
    }

    /// Parse the uppercase form produced by [`ChangeKind::as_str`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ADDED" => Some(Self::Added),
            "REMOVED" => Some(Self::Removed),
            "MODIFIED" => Some(Self::Modified),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A classified unit of difference between two versions.
///
/// `Added` changes carry no old text, `Removed` changes carry no new text,
/// and `Modified` changes carry both plus the pair's similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "change_type")]
    pub kind: ChangeKind,
    pub section_label: String,
    pub old_text: Option<String>,
    pub new_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl Change {
    /// Create an addition
    pub fn added(section_label: impl Into<String>, new_text: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Added,
            section_label: section_label.into(),
            old_text: None,
            new_text: Some(new_text.into()),
            similarity: None,
        }
    }

    /// Create a removal
    pub fn removed(section_label: impl Into<String>, old_text: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Removed,
            section_label: section_label.into(),
            old_text: Some(old_text.into()),
            new_text: None,
            similarity: None,
        }
    }

    /// Create a modification
    pub fn modified(
        section_label: impl Into<String>,
        old_text: impl Into<String>,
        new_text: impl Into<String>,
        similarity: f64,
    ) -> Self {
        Self {
            kind: ChangeKind::Modified,
            section_label: section_label.into(),
            old_text: Some(old_text.into()),
            new_text: Some(new_text.into()),
            similarity: Some(similarity),
        }
    }
}

/// Per-kind change counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub total: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl ChangeCounts {
    #[must_use]
    pub fn from_changes(changes: &[Change]) -> Self {
        let mut counts = Self {
            total: changes.len(),
            ..Self::default()
        };
        for change in changes {
            match change.kind {
                ChangeKind::Added => counts.added += 1,
                ChangeKind::Removed => counts.removed += 1,
                ChangeKind::Modified => counts.modified += 1,
            }
        }
        counts
    }
}

/// Complete result of comparing two document versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct ComparisonResult {
    /// Changes in alignment order
    pub changes: Vec<Change>,
    /// Overall risk rating
    pub risk_level: RiskLevel,
    /// Human-readable digest
    pub summary_text: String,
    /// Keyword hits behind the risk rating
    pub risk: RiskAssessment,
    /// Per-kind counts
    pub counts: ChangeCounts,
}

impl ComparisonResult {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Changes of one kind, in order.
    pub fn changes_of(&self, kind: ChangeKind) -> impl Iterator<Item = &Change> {
        self.changes.iter().filter(move |c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_kind_wire_names() {
        let change = Change::added("page 1", "New clause.");
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["change_type"], "ADDED");
        assert!(json["old_text"].is_null());
        assert!(json.get("similarity").is_none());
    }

    #[test]
    fn test_counts() {
        let changes = vec![
            Change::added("page 1", "a"),
            Change::removed("page 1", "b"),
            Change::modified("page 2", "c", "d", 0.7),
            Change::added("page 3", "e"),
        ];
        let counts = ChangeCounts::from_changes(&changes);
        assert_eq!(
            counts,
            ChangeCounts {
                total: 4,
                added: 2,
                removed: 1,
                modified: 1
            }
        );
    }
}
