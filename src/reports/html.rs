//! HTML report generator.

use super::escape::{escape_html, escape_html_multiline, escape_html_opt};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::analysis::RiskLevel;
use crate::diff::ComparisonResult;
use crate::model::DocumentVersion;
use std::fmt::Write;

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Toggle the inline stylesheet
    #[must_use]
    pub const fn include_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    fn get_styles(&self) -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #1e1e2e;
                --text-color: #cdd6f4;
                --accent-color: #89b4fa;
                --success-color: #a6e3a1;
                --warning-color: #f9e2af;
                --error-color: #f38ba8;
                --border-color: #45475a;
                --card-bg: #313244;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.6;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
            }

            h1, h2, h3 {
                color: var(--accent-color);
            }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 20px;
                margin-bottom: 30px;
            }

            .summary {
                background-color: var(--card-bg);
                border-radius: 8px;
                padding: 20px;
                border: 1px solid var(--border-color);
                margin-bottom: 30px;
            }

            .risk-LOW { color: #94e2d5; }
            .risk-MEDIUM { color: var(--warning-color); }
            .risk-HIGH { color: var(--error-color); font-weight: bold; }

            table {
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 30px;
                background-color: var(--card-bg);
                border-radius: 8px;
                overflow: hidden;
                table-layout: fixed;
            }

            th, td {
                padding: 12px 15px;
                text-align: left;
                vertical-align: top;
                border-bottom: 1px solid var(--border-color);
                word-wrap: break-word;
            }

            th {
                background-color: #45475a;
                font-weight: 600;
            }

            tr.type-ADDED { background-color: rgba(166, 227, 161, 0.12); }
            tr.type-REMOVED { background-color: rgba(243, 139, 168, 0.12); }
            tr.type-MODIFIED { background-color: rgba(249, 226, 175, 0.12); }

            .badge {
                display: inline-block;
                padding: 2px 8px;
                border-radius: 4px;
                font-size: 0.85em;
                font-weight: 500;
            }

            .badge-ADDED { background-color: rgba(166, 227, 161, 0.2); color: var(--success-color); }
            .badge-REMOVED { background-color: rgba(243, 139, 168, 0.2); color: var(--error-color); }
            .badge-MODIFIED { background-color: rgba(249, 226, 175, 0.2); color: var(--warning-color); }

            .footer {
                margin-top: 40px;
                padding-top: 20px;
                border-top: 1px solid var(--border-color);
                font-size: 0.9em;
                color: #a6adc8;
            }
        </style>
        "#
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate_compare_report(
        &self,
        result: &ComparisonResult,
        old: &DocumentVersion,
        new: &DocumentVersion,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut html = String::new();
        let document_name = &config.metadata.document_name;
        let title = config
            .title
            .clone()
            .unwrap_or_else(|| format!("Diff Report - {document_name}"));

        // HTML header
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{}</title>", escape_html(&title))?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        // Header
        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>Document Versioning Compare</h1>")?;
        writeln!(
            html,
            "    <p><strong>Document:</strong> {}</p>",
            escape_html(document_name)
        )?;
        writeln!(
            html,
            "    <p><strong>Compare:</strong> {} &rarr; {}</p>",
            escape_html(&old.label),
            escape_html(&new.label)
        )?;
        writeln!(
            html,
            "    <p>Pages: {} &rarr; {} &middot; Paragraphs: {} &rarr; {}</p>",
            old.page_count,
            new.page_count,
            old.paragraph_count(),
            new.paragraph_count()
        )?;
        writeln!(html, "</div>")?;

        // Summary
        writeln!(html, "<div class=\"summary\">")?;
        writeln!(html, "    <h2>Summary</h2>")?;
        writeln!(
            html,
            "    <p><strong>Risk Level:</strong> <span class=\"{}\">{}</span></p>",
            risk_class(result.risk_level),
            result.risk_level
        )?;
        writeln!(
            html,
            "    <p>{}</p>",
            escape_html_multiline(&result.summary_text)
        )?;
        writeln!(html, "</div>")?;

        // Change table
        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "    <h2>Changes ({})</h2>", result.counts.total)?;
        writeln!(html, "    <table>")?;
        writeln!(html, "        <thead>")?;
        writeln!(html, "            <tr>")?;
        writeln!(html, "                <th style=\"width: 10%\">Type</th>")?;
        writeln!(html, "                <th style=\"width: 10%\">Section</th>")?;
        writeln!(html, "                <th>Old Text</th>")?;
        writeln!(html, "                <th>New Text</th>")?;
        writeln!(html, "            </tr>")?;
        writeln!(html, "        </thead>")?;
        writeln!(html, "        <tbody>")?;

        for change in &result.changes {
            let kind = change.kind.as_str();
            writeln!(html, "            <tr class=\"type-{kind}\">")?;
            writeln!(
                html,
                "                <td><span class=\"badge badge-{kind}\">{kind}</span></td>"
            )?;
            writeln!(
                html,
                "                <td>{}</td>",
                escape_html(&change.section_label)
            )?;
            writeln!(
                html,
                "                <td>{}</td>",
                escape_html_opt(change.old_text.as_deref())
            )?;
            writeln!(
                html,
                "                <td>{}</td>",
                escape_html_opt(change.new_text.as_deref())
            )?;
            writeln!(html, "            </tr>")?;
        }

        writeln!(html, "        </tbody>")?;
        writeln!(html, "    </table>")?;
        writeln!(html, "</div>")?;

        // Footer
        writeln!(html, "<div class=\"footer\">")?;
        writeln!(
            html,
            "    <p>Generated by docdiff v{} on {}</p>",
            env!("CARGO_PKG_VERSION"),
            escape_html(&config.generated_at())
        )?;
        writeln!(html, "</div>")?;

        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}

fn risk_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "risk-LOW",
        RiskLevel::Medium => "risk-MEDIUM",
        RiskLevel::High => "risk-HIGH",
    }
}
