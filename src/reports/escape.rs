//! Escaping utilities for safe report generation.
//!
//! Document text comes from external files and may contain markup or table
//! syntax. Everything taken from a document MUST be escaped before it is
//! embedded in HTML or Markdown output.

/// Escape a string for safe inclusion in HTML content.
///
/// # Examples
///
/// ```
/// use docdiff::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<b>Fee</b> & 'tax'"),
///     "&lt;b&gt;Fee&lt;/b&gt; &amp; &#x27;tax&#x27;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape multi-line text for HTML, turning line breaks into `<br>`.
///
/// ```
/// use docdiff::reports::escape::escape_html_multiline;
///
/// assert_eq!(escape_html_multiline("a < b\r\nc"), "a &lt; b<br>c");
/// ```
pub fn escape_html_multiline(s: &str) -> String {
    escape_html(s).replace("\r\n", "<br>").replace('\n', "<br>")
}

/// Helper for optional multi-line text, returning an empty string for None.
pub fn escape_html_opt(s: Option<&str>) -> String {
    s.map(escape_html_multiline).unwrap_or_default()
}

/// Escape a string for safe inclusion in Markdown table cells.
///
/// ```
/// use docdiff::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1<br>line2");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push_str("<br>"),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Helper for optional Markdown table cells, returning "-" for None.
pub fn escape_md_opt(s: Option<&str>) -> String {
    s.map_or_else(|| "-".to_string(), escape_markdown_table)
}

/// Escape a string for safe inclusion in Markdown inline content.
///
/// ```
/// use docdiff::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' | '_' | '`' | '[' | ']' | '#' | '~' | '|' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_basic() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_escape_html_script() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_multiline_escapes_before_breaking() {
        assert_eq!(escape_html_multiline("<br>\nx"), "&lt;br&gt;<br>x");
    }

    #[test]
    fn test_thai_text_untouched() {
        let thai = "ค่าปรับ";
        assert_eq!(escape_html(thai), thai);
        assert_eq!(escape_markdown_table(thai), thai);
    }

    #[test]
    fn test_optional_helpers() {
        assert_eq!(escape_html_opt(None), "");
        assert_eq!(escape_md_opt(None), "-");
        assert_eq!(escape_md_opt(Some("a|b")), "a\\|b");
    }
}
