//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_md_opt, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::ComparisonResult;
use crate::model::DocumentVersion;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the change table
    include_changes: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_changes: true,
        }
    }

    /// Omit the change table
    #[must_use]
    pub const fn summary_only() -> Self {
        Self {
            include_changes: false,
        }
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_compare_report(
        &self,
        result: &ComparisonResult,
        old: &DocumentVersion,
        new: &DocumentVersion,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        writeln!(md, "# {}", escape_markdown_inline(&config.title_or_default()))?;
        writeln!(md)?;
        writeln!(
            md,
            "**Compare:** {} → {}  ",
            escape_markdown_inline(&old.label),
            escape_markdown_inline(&new.label)
        )?;
        writeln!(md, "**Risk Level:** {}  ", result.risk_level)?;
        writeln!(md, "**Generated:** {}", config.generated_at())?;
        writeln!(md)?;

        writeln!(md, "## Overview")?;
        writeln!(md)?;
        writeln!(md, "| | {} | {} |", escape_markdown_table(&old.label), escape_markdown_table(&new.label))?;
        writeln!(md, "|---|---|---|")?;
        writeln!(md, "| Pages | {} | {} |", old.page_count, new.page_count)?;
        writeln!(
            md,
            "| Paragraphs | {} | {} |",
            old.paragraph_count(),
            new.paragraph_count()
        )?;
        writeln!(md)?;

        let counts = &result.counts;
        writeln!(
            md,
            "{} changes: {} added, {} removed, {} modified.",
            counts.total, counts.added, counts.removed, counts.modified
        )?;
        if !result.risk.high_hits.is_empty() || !result.risk.medium_hits.is_empty() {
            writeln!(md)?;
            if !result.risk.high_hits.is_empty() {
                writeln!(
                    md,
                    "- High-risk keywords: {}",
                    escape_markdown_inline(&result.risk.high_hits.join(", "))
                )?;
            }
            if !result.risk.medium_hits.is_empty() {
                writeln!(
                    md,
                    "- Medium-risk keywords: {}",
                    escape_markdown_inline(&result.risk.medium_hits.join(", "))
                )?;
            }
        }
        writeln!(md)?;

        writeln!(md, "## Summary")?;
        writeln!(md)?;
        // Summary lines are kept as-is inside a fenced block
        writeln!(md, "```text")?;
        writeln!(md, "{}", result.summary_text.replace("```", "'''"))?;
        writeln!(md, "```")?;

        if self.include_changes && result.has_changes() {
            let limit = config.max_items.unwrap_or(usize::MAX);
            writeln!(md)?;
            writeln!(md, "## Changes")?;
            writeln!(md)?;
            writeln!(md, "| Type | Section | Old Text | New Text |")?;
            writeln!(md, "|------|---------|----------|----------|")?;
            for change in result.changes.iter().take(limit) {
                writeln!(
                    md,
                    "| {} | {} | {} | {} |",
                    change.kind,
                    escape_markdown_table(&change.section_label),
                    escape_md_opt(change.old_text.as_deref()),
                    escape_md_opt(change.new_text.as_deref())
                )?;
            }
            if result.changes.len() > limit {
                writeln!(md)?;
                writeln!(md, "_{} more changes not shown._", result.changes.len() - limit)?;
            }
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample;

    #[test]
    fn test_markdown_report() {
        let (result, old, new) = sample();
        let md = MarkdownReporter::new()
            .generate_compare_report(&result, &old, &new, &ReportConfig::for_document("Lease"))
            .unwrap();

        assert!(md.starts_with("# Document Comparison: Lease\n"));
        assert!(md.contains("**Risk Level:** HIGH"));
        assert!(md.contains("| Pages | 2 | 2 |"));
        assert!(md.contains("| MODIFIED | page 1 |"));
        assert!(md.contains("&lt;monthly&gt;"));
    }

    #[test]
    fn test_markdown_summary_only() {
        let (result, old, new) = sample();
        let md = MarkdownReporter::summary_only()
            .generate_compare_report(&result, &old, &new, &ReportConfig::default())
            .unwrap();
        assert!(!md.contains("## Changes"));
        assert!(md.contains("## Summary"));
    }

    #[test]
    fn test_markdown_limit() {
        let (result, old, new) = sample();
        let config = ReportConfig {
            max_items: Some(2),
            ..ReportConfig::default()
        };
        let md = MarkdownReporter::new()
            .generate_compare_report(&result, &old, &new, &config)
            .unwrap();
        assert!(md.contains("_1 more changes not shown._"));
    }
}
