//! Short natural-language digest of a change set.

use crate::diff::{Change, ChangeCounts, ChangeKind};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default number of example entries in a summary.
pub const DEFAULT_MAX_EXAMPLES: usize = 3;

/// Default excerpt length, in characters.
pub const DEFAULT_EXCERPT_CHARS: usize = 140;

/// Language of the generated summary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLanguage {
    #[default]
    English,
    Thai,
}

impl SummaryLanguage {
    fn no_changes(self) -> &'static str {
        match self {
            Self::English => "No material content changes between the two versions.",
            Self::Thai => "ไม่มีการเปลี่ยนแปลงเนื้อหาสำคัญระหว่างสองเวอร์ชัน",
        }
    }

    fn count_line(self, counts: &ChangeCounts) -> String {
        match self {
            Self::English => format!(
                "Changes: {} total (added {}, removed {}, modified {})",
                counts.total, counts.added, counts.removed, counts.modified
            ),
            Self::Thai => format!(
                "โดยรวมมีการเปลี่ยนแปลงจำนวน {} รายการ (เพิ่ม {} รายการ, ลบ {} รายการ, แก้ไข {} รายการ)",
                counts.total, counts.added, counts.removed, counts.modified
            ),
        }
    }

    fn examples_header(self) -> &'static str {
        match self {
            Self::English => "Examples of changed sections:",
            Self::Thai => "ตัวอย่างหัวข้อที่มีการปรับเปลี่ยน:",
        }
    }
}

/// Builds the summary text for a change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryBuilder {
    language: SummaryLanguage,
    max_examples: usize,
    excerpt_chars: usize,
}

impl Default for SummaryBuilder {
    fn default() -> Self {
        Self {
            language: SummaryLanguage::default(),
            max_examples: DEFAULT_MAX_EXAMPLES,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

impl SummaryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn language(mut self, language: SummaryLanguage) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn max_examples(mut self, max_examples: usize) -> Self {
        self.max_examples = max_examples;
        self
    }

    #[must_use]
    pub fn excerpt_chars(mut self, excerpt_chars: usize) -> Self {
        self.excerpt_chars = excerpt_chars;
        self
    }

    /// Render the summary. Lines are joined with `\n`.
    #[must_use]
    pub fn build(&self, changes: &[Change]) -> String {
        if changes.is_empty() {
            return self.language.no_changes().to_string();
        }

        let counts = ChangeCounts::from_changes(changes);
        let mut lines = vec![self.language.count_line(&counts)];

        let examples: Vec<String> = changes
            .iter()
            .filter(|c| matches!(c.kind, ChangeKind::Modified | ChangeKind::Added))
            .filter_map(|c| {
                c.new_text
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .map(|t| (c, t))
            })
            .take(self.max_examples)
            .map(|(c, text)| format!("- {}: {}...", c.section_label, self.excerpt(text)))
            .collect();

        if !examples.is_empty() {
            lines.push(String::new());
            lines.push(self.language.examples_header().to_string());
            lines.extend(examples);
        }

        lines.join("\n")
    }

    fn excerpt(&self, text: &str) -> String {
        text.chars()
            .take(self.excerpt_chars)
            .collect::<String>()
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }
}
