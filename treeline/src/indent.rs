use crate::glyphs::{is_indent_glyph, INDENT_WIDTH};

/// Infers how deep a line sits in the tree.
///
/// Path-stack maintenance only ever asks for a depth, so any convention
/// (tabs, two-space trees, ...) can be plugged in without touching it.
pub trait Indentation {
    fn depth(&self, line: &str) -> usize;
}

/// Counts the leading run of box-drawing glyphs and spaces, then divides by
/// a fixed width.
///
/// Nothing is validated: a line indented with three characters per level is
/// simply assigned whatever integer the division yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphIndentation {
    pub width: usize,
}
impl GlyphIndentation {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}
impl Default for GlyphIndentation {
    fn default() -> Self {
        Self::new(INDENT_WIDTH)
    }
}
impl Indentation for GlyphIndentation {
    fn depth(&self, line: &str) -> usize {
        leading_glyphs(line).chars().count() / self.width.max(1)
    }
}

/// Returns the leading run of indentation glyphs of `line`.
pub fn leading_glyphs(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !is_indent_glyph(*c))
        .map(|(index, _)| index)
        .unwrap_or(line.len());

    &line[..end]
}

/// Depth of `line` under the default four-characters-per-level convention.
pub fn indent_depth(line: &str) -> usize {
    GlyphIndentation::default().depth(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_of_root_line_is_zero() {
        assert_eq!(indent_depth("my_bot/"), 0);
    }

    #[test]
    fn test_depth_counts_connectors() {
        assert_eq!(indent_depth("├── bot.py"), 1);
        assert_eq!(indent_depth("└── data/"), 1);
        assert_eq!(indent_depth("│   ├── __init__.py"), 2);
        assert_eq!(indent_depth("    └── user_12345.json"), 2);
        assert_eq!(indent_depth("│   │   └── deep.rs"), 3);
    }

    #[test]
    fn test_depth_truncates_partial_levels() {
        assert_eq!(indent_depth("   a.txt"), 0);
        assert_eq!(indent_depth("      a.txt"), 1);
    }

    #[test]
    fn test_depth_counts_characters_not_bytes() {
        // each glyph is three bytes in UTF-8
        assert_eq!(leading_glyphs("│   x").len(), 6);
        assert_eq!(indent_depth("│   x"), 1);
    }

    #[test]
    fn test_leading_glyphs_of_glyph_only_line() {
        assert_eq!(leading_glyphs("│   ├──"), "│   ├──");
    }

    #[test]
    fn test_custom_width() {
        let two_spaces = GlyphIndentation::new(2);

        assert_eq!(two_spaces.depth("  b.txt"), 1);
        assert_eq!(two_spaces.depth("    c.txt"), 2);
    }

    #[test]
    fn test_zero_width_does_not_panic() {
        assert_eq!(GlyphIndentation::new(0).depth("  a"), 2);
    }
}
