//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::analysis::RiskLevel;
use crate::diff::{Change, ChangeKind, ComparisonResult};
use crate::model::DocumentVersion;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Changes listed before the output is cut short
const DEFAULT_MAX_ITEMS: usize = 10;

/// Terminal columns reserved for a change excerpt
const EXCERPT_WIDTH: usize = 60;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`.
///
/// Line breaks are flattened to spaces. Wide characters count double and
/// combining marks count zero, so Thai and CJK excerpts line up.
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    if UnicodeWidthStr::width(flat.as_str()) <= width {
        return flat;
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in flat.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn risk_line(&self, result: &ComparisonResult) -> String {
        let level = result.risk_level.to_string();
        let colored = match result.risk_level {
            RiskLevel::High => self.color(&level, "red"),
            RiskLevel::Medium => self.color(&level, "yellow"),
            RiskLevel::Low => self.color(&level, "green"),
        };

        let hits: Vec<&str> = result
            .risk
            .high_hits
            .iter()
            .chain(&result.risk.medium_hits)
            .map(String::as_str)
            .collect();
        if hits.is_empty() {
            format!("{}     {}", self.color("Risk:", "cyan"), colored)
        } else {
            format!(
                "{}     {}  {}",
                self.color("Risk:", "cyan"),
                colored,
                self.color(&format!("(keywords: {})", hits.join(", ")), "dim")
            )
        }
    }

    fn change_line(&self, change: &Change) -> String {
        let (marker, color) = match change.kind {
            ChangeKind::Added => ("+", "green"),
            ChangeKind::Removed => ("-", "red"),
            ChangeKind::Modified => ("~", "yellow"),
        };
        let text = change
            .new_text
            .as_deref()
            .or(change.old_text.as_deref())
            .unwrap_or_default();
        format!(
            "  {} {:<8} {:<10} {}",
            self.color(marker, color),
            change.kind,
            change.section_label,
            truncate_to_width(text, EXCERPT_WIDTH)
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_compare_report(
        &self,
        result: &ComparisonResult,
        old: &DocumentVersion,
        new: &DocumentVersion,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Document Comparison Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if !config.metadata.document_name.is_empty() {
            lines.push(format!(
                "{} {}",
                self.color("Document:", "cyan"),
                config.metadata.document_name
            ));
        }
        lines.push(format!(
            "{}  {} → {}",
            self.color("Compare:", "cyan"),
            old.label,
            new.label
        ));
        lines.push(format!(
            "{}    {} → {} pages, {} → {} paragraphs",
            self.color("Size:", "cyan"),
            old.page_count,
            new.page_count,
            old.paragraph_count(),
            new.paragraph_count()
        ));
        lines.push(String::new());

        // Counts
        let counts = &result.counts;
        lines.push(format!(
            "{}  {} {} {}  ({} total)",
            self.color("Changes:", "cyan"),
            self.color(&format!("+{}", counts.added), "green"),
            self.color(&format!("-{}", counts.removed), "red"),
            self.color(&format!("~{}", counts.modified), "yellow"),
            counts.total
        ));
        lines.push(self.risk_line(result));

        if result.has_changes() {
            let max_items = config.max_items.unwrap_or(DEFAULT_MAX_ITEMS);
            lines.push(String::new());
            for change in result.changes.iter().take(max_items) {
                lines.push(self.change_line(change));
            }
            if result.changes.len() > max_items {
                lines.push(self.color(
                    &format!("  ... and {} more", result.changes.len() - max_items),
                    "dim",
                ));
            }
        }

        lines.push(String::new());
        lines.push(result.summary_text.clone());

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample;

    #[test]
    fn test_summary_plain_output() {
        let (result, old, new) = sample();
        let output = SummaryReporter::new()
            .no_color()
            .generate_compare_report(&result, &old, &new, &ReportConfig::for_document("Lease"))
            .unwrap();

        assert!(output.contains("Document: Lease"));
        assert!(output.contains("Compare:  v1 → v2"));
        assert!(output.contains("+1 -1 ~1  (3 total)"));
        assert!(output.contains("HIGH"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_summary_colored_output() {
        let (result, old, new) = sample();
        let output = SummaryReporter::new()
            .generate_compare_report(&result, &old, &new, &ReportConfig::default())
            .unwrap();
        assert!(output.contains("\x1b[31mHIGH\x1b[0m"));
    }

    #[test]
    fn test_max_items_truncates_list() {
        let (result, old, new) = sample();
        let config = ReportConfig {
            max_items: Some(1),
            ..ReportConfig::default()
        };
        let output = SummaryReporter::new()
            .no_color()
            .generate_compare_report(&result, &old, &new, &config)
            .unwrap();
        assert!(output.contains("... and 2 more"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a\nb", 10), "a b");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // Full-width characters take two columns each
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }
}
