//! Rows of the comparison store.

use crate::analysis::RiskLevel;
use crate::diff::{ChangeKind, ComparisonResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A compared document, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One uploaded version of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub id: i64,
    pub document_id: i64,
    pub version_label: String,
    pub file_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// One comparison run between two versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub id: i64,
    pub document_id: i64,
    pub version_old_id: i64,
    pub version_new_id: i64,
    pub created_at: DateTime<Utc>,
    pub overall_risk_level: RiskLevel,
    pub summary_text: String,
}

/// A change recorded for a comparison.
///
/// `risk_level` and `ai_comment` are left empty by the comparison run and
/// reserved for later per-change review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeItemRecord {
    pub id: i64,
    pub comparison_id: i64,
    pub change_type: ChangeKind,
    pub section_label: String,
    pub old_text: Option<String>,
    pub new_text: Option<String>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub ai_comment: Option<String>,
}

/// One side of a run about to be recorded.
#[derive(Debug, Clone, Copy)]
pub struct NewVersion<'a> {
    pub label: &'a str,
    pub file_path: &'a Path,
}

/// A full comparison run about to be recorded: the document, both versions
/// and the result.
#[derive(Debug, Clone, Copy)]
pub struct NewRun<'a> {
    pub document_name: &'a str,
    pub old: NewVersion<'a>,
    pub new: NewVersion<'a>,
    pub result: &'a ComparisonResult,
}

/// A comparison about to be recorded.
#[derive(Debug, Clone, Copy)]
pub struct NewComparison<'a> {
    pub document_id: i64,
    pub version_old_id: i64,
    pub version_new_id: i64,
    pub result: &'a ComparisonResult,
}
