//! Line Classification
//!
//! Determines what a single source line is, and how deeply it is nested. Ordering matters:
//! blank lines win over comments, comments win over properties, and anything left over is a
//! selector.
use serde::Deserialize;

/// Indent width used when nothing else is configured.
pub const DEFAULT_INDENT_WIDTH: usize = 4;
/// Comment marker used when nothing else is configured.
pub const DEFAULT_COMMENT_MARKER: &str = "//";

/// Knobs for a conversion pass.
///
/// The defaults reproduce the classic behaviour: four characters per level and `//`
/// comments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub indent_width: usize,
    pub comment_marker: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
        }
    }
}

impl TransformOptions {
    /// Effective indent unit. A zero width would make every line infinitely deep, so it is
    /// read as one character per level.
    pub fn indent_unit(&self) -> usize {
        self.indent_width.max(1)
    }
}

/// What a source line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Trimmed text starts with the comment marker.
    Comment,
    /// Trimmed text contains a `:`.
    Property,
    /// Everything else.
    Selector,
}

impl LineKind {
    /// Blank and comment lines are emitted untouched and never affect nesting.
    pub fn is_passthrough(self) -> bool {
        matches!(self, LineKind::Blank | LineKind::Comment)
    }
}

/// Whitespace for indentation and trimming purposes. A byte-order mark counts too, so a
/// BOM-saved sheet whose first line is a comment still reads as a comment.
pub fn is_line_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Line content without surrounding whitespace.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_line_whitespace)
}

/// Determine the kind of a line.
pub fn classify_line(line: &str, options: &TransformOptions) -> LineKind {
    let trimmed = trim_line(line);
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if !options.comment_marker.is_empty() && trimmed.starts_with(options.comment_marker.as_str())
    {
        return LineKind::Comment;
    }
    if trimmed.contains(':') {
        return LineKind::Property;
    }
    LineKind::Selector
}

/// Number of leading whitespace characters. Tabs and spaces both count as one.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|&c| is_line_whitespace(c)).count()
}

/// Leading whitespace of a line, as written.
pub fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start_matches(is_line_whitespace).len()]
}

/// Nesting depth of a line: leading width divided by the indent unit, rounded down.
pub fn indent_level(line: &str, options: &TransformOptions) -> usize {
    indent_width(line) / options.indent_unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> TransformOptions {
        TransformOptions::default()
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line("", &defaults()), LineKind::Blank);
        assert_eq!(classify_line("    ", &defaults()), LineKind::Blank);
        assert_eq!(classify_line("\t\r", &defaults()), LineKind::Blank);
    }

    #[test]
    fn test_comment_wins_over_property() {
        assert_eq!(
            classify_line("    // color: red", &defaults()),
            LineKind::Comment
        );
    }

    #[test]
    fn test_property_and_selector() {
        assert_eq!(classify_line("    color: red", &defaults()), LineKind::Property);
        assert_eq!(classify_line(".button", &defaults()), LineKind::Selector);
        assert_eq!(classify_line("    &.active", &defaults()), LineKind::Selector);
    }

    #[test]
    fn test_pseudo_class_reads_as_property() {
        assert_eq!(classify_line("a:hover", &defaults()), LineKind::Property);
        assert_eq!(classify_line("    &:hover", &defaults()), LineKind::Property);
    }

    #[test]
    fn test_custom_comment_marker() {
        let options = TransformOptions {
            comment_marker: "#".to_string(),
            ..TransformOptions::default()
        };
        assert_eq!(classify_line("# note", &options), LineKind::Comment);
        assert_eq!(classify_line("// note", &options), LineKind::Selector);
    }

    #[test]
    fn test_indent_level_rounds_down() {
        assert_eq!(indent_level("a", &defaults()), 0);
        assert_eq!(indent_level("   a", &defaults()), 0);
        assert_eq!(indent_level("    a", &defaults()), 1);
        assert_eq!(indent_level("       a", &defaults()), 1);
        assert_eq!(indent_level("        a", &defaults()), 2);
    }

    #[test]
    fn test_tabs_count_as_one_character() {
        assert_eq!(indent_width("\t\ta"), 2);
        assert_eq!(indent_level("\ta", &defaults()), 0);
        assert_eq!(indent_level("\t\t\t\ta", &defaults()), 1);
    }

    #[test]
    fn test_zero_indent_width_is_one() {
        let options = TransformOptions {
            indent_width: 0,
            ..TransformOptions::default()
        };
        assert_eq!(indent_level("  a", &options), 2);
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(
            classify_line("\u{feff}// header", &defaults()),
            LineKind::Comment
        );
        assert_eq!(classify_line("\u{feff}", &defaults()), LineKind::Blank);
        assert_eq!(trim_line("\u{feff}.a "), ".a");
        assert_eq!(indent_width("\u{feff}    .a"), 5);
        assert_eq!(leading_whitespace("\u{feff} .a"), "\u{feff} ");
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("  \ta b "), "  \t");
        assert_eq!(leading_whitespace("a"), "");
    }
}
