//! Alignment pair shapes.

use crate::model::Paragraph;
use serde::{Deserialize, Serialize};

/// One entry of an alignment between an old and a new paragraph sequence.
///
/// Every input paragraph appears in exactly one pair. A pair without either
/// side cannot be expressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum AlignmentPair {
    /// Old and new paragraph matched at or above the match threshold
    Matched {
        old: Paragraph,
        new: Paragraph,
        similarity: f64,
    },
    /// Old paragraph with no counterpart in the new version
    Unmatched { old: Paragraph },
    /// New paragraph with no counterpart in the old version
    Inserted { new: Paragraph },
}

impl AlignmentPair {
    #[must_use]
    pub fn old_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Self::Matched { old, .. } | Self::Unmatched { old } => Some(old),
            Self::Inserted { .. } => None,
        }
    }

    #[must_use]
    pub fn new_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Self::Matched { new, .. } | Self::Inserted { new } => Some(new),
            Self::Unmatched { .. } => None,
        }
    }

    /// Similarity of a matched pair; 0.0 for one-sided pairs.
    #[must_use]
    pub fn similarity(&self) -> f64 {
        match self {
            Self::Matched { similarity, .. } => *similarity,
            Self::Unmatched { .. } | Self::Inserted { .. } => 0.0,
        }
    }
}

/// Alignment pair as exchanged with external producers: two optional sides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAlignmentPair {
    #[serde(default)]
    pub old: Option<Paragraph>,
    #[serde(default)]
    pub new: Option<Paragraph>,
    #[serde(default)]
    pub similarity: f64,
}

impl RawAlignmentPair {
    /// Convert into the tagged shape. Returns `None` when neither side is set.
    #[must_use]
    pub fn into_pair(self) -> Option<AlignmentPair> {
        match (self.old, self.new) {
            (Some(old), Some(new)) => Some(AlignmentPair::Matched {
                old,
                new,
                similarity: self.similarity,
            }),
            (Some(old), None) => Some(AlignmentPair::Unmatched { old }),
            (None, Some(new)) => Some(AlignmentPair::Inserted { new }),
            (None, None) => None,
        }
    }
}

impl From<AlignmentPair> for RawAlignmentPair {
    fn from(pair: AlignmentPair) -> Self {
        match pair {
            AlignmentPair::Matched {
                old,
                new,
                similarity,
            } => Self {
                old: Some(old),
                new: Some(new),
                similarity,
            },
            AlignmentPair::Unmatched { old } => Self {
                old: Some(old),
                new: None,
                similarity: 0.0,
            },
            AlignmentPair::Inserted { new } => Self {
                old: None,
                new: Some(new),
                similarity: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_pair_shapes() {
        let p = Paragraph::new(1, 0, "x");
        let raw = RawAlignmentPair {
            old: Some(p.clone()),
            new: None,
            similarity: 0.4,
        };
        assert_eq!(raw.into_pair(), Some(AlignmentPair::Unmatched { old: p }));
        assert_eq!(RawAlignmentPair::default().into_pair(), None);
    }

    #[test]
    fn test_one_sided_similarity_is_zero() {
        let pair = AlignmentPair::Inserted {
            new: Paragraph::new(2, 0, "y"),
        };
        assert!(pair.similarity().abs() < f64::EPSILON);
        assert!(pair.old_paragraph().is_none());
        assert_eq!(pair.new_paragraph().map(|p| p.page_number), Some(2));
    }

    #[test]
    fn test_raw_pair_deserializes_missing_sides() {
        let raw: RawAlignmentPair =
            serde_json::from_str(r#"{"new":{"page_number":1,"index":0,"text":"t"}}"#).unwrap();
        assert!(matches!(raw.into_pair(), Some(AlignmentPair::Inserted { .. })));
    }
}
