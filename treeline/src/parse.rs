use std::path::{Component, Path, PathBuf};
use std::str::Lines;

use crate::glyphs::{CORNER, DIRECTORY_MARKER, TEE, VERTICAL};
use crate::indent::{leading_glyphs, GlyphIndentation, Indentation};

/// Whether a label names a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}
impl EntryKind {
    /// A label is a file when it contains a `.` and has no trailing `/`.
    ///
    /// Known limitation: a directory written as `v1.2` is classified as a file.
    pub fn classify(label: &str) -> Self {
        if label.contains('.') && !label.ends_with(DIRECTORY_MARKER) {
            Self::File
        } else {
            Self::Directory
        }
    }

    pub fn is_file(self) -> bool {
        self == Self::File
    }
}

/// Removes connector glyphs and surrounding whitespace from a line.
pub fn clean_label(line: &str) -> String {
    line.replace(TEE, "")
        .replace(CORNER, "")
        .replace(VERTICAL, "")
        .trim()
        .to_string()
}

/// One meaningful line of tree notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub raw: &'a str,
    pub indent: &'a str,
    pub label: String,
    pub depth: usize,
}
impl<'a> TreeLine<'a> {
    /// Returns `None` for blank lines and lines made only of connector glyphs.
    pub fn parse<I: Indentation + ?Sized>(raw: &'a str, indentation: &I) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let label = clean_label(raw);
        if label.is_empty() {
            return None;
        }

        Some(Self {
            raw,
            indent: leading_glyphs(raw),
            depth: indentation.depth(raw),
            label,
        })
    }

    pub fn kind(&self) -> EntryKind {
        EntryKind::classify(&self.label)
    }
}

/// Labels of the currently open ancestors, indexed by depth.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathStack {
    labels: Vec<String>,
}
impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pops until at most `depth` labels remain, then pushes `label`.
    ///
    /// A depth greater than the current length is not an error; the label
    /// is pushed right after the deepest open ancestor.
    pub fn descend(&mut self, depth: usize, label: String) {
        self.labels.truncate(depth);
        self.labels.push(label);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Joins the labels into a relative path.
    ///
    /// Only plain name components are kept: root, `.` and `..` are dropped,
    /// so a label can never escape the base directory it is later joined onto.
    pub fn to_path(&self) -> PathBuf {
        self.labels
            .iter()
            .flat_map(|label| Path::new(label).components())
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name),
                _ => None,
            })
            .collect()
    }
}

/// A filesystem entry described by one line, relative to the tree's base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Depth relative to the first meaningful line of the text.
    pub depth: usize,
}

/// Lazily walks tree notation, yielding one [`Entry`] per meaningful line.
///
/// Depths are counted from the first meaningful line, so a tree drawn
/// without a root line (`└── my_bot/` at depth 1) nests the same way as
/// one that starts at depth 0.
pub struct Entries<'a, I: ?Sized = GlyphIndentation> {
    lines: Lines<'a>,
    stack: PathStack,
    base_depth: Option<usize>,
    indentation: &'a I,
}
impl<'a, I: Indentation + ?Sized> Entries<'a, I> {
    pub fn new(text: &'a str, indentation: &'a I) -> Self {
        Self {
            lines: text.lines(),
            stack: PathStack::new(),
            base_depth: None,
            indentation,
        }
    }

    /// Ancestors left open by the lines consumed so far.
    pub fn stack(&self) -> &PathStack {
        &self.stack
    }
}
impl<I: Indentation + ?Sized> Iterator for Entries<'_, I> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        for raw in self.lines.by_ref() {
            let Some(line) = TreeLine::parse(raw, self.indentation) else {
                continue;
            };

            let kind = line.kind();
            let base_depth = *self.base_depth.get_or_insert(line.depth);
            let depth = line.depth.saturating_sub(base_depth);
            self.stack.descend(depth, line.label);

            return Some(Entry {
                path: self.stack.to_path(),
                kind,
                depth,
            });
        }

        None
    }
}

/// Parses tree notation with the default four-characters-per-level
/// convention.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// let entries = treeline::parse("a/\n├── b.txt\n└── c/\n    └── d.txt\n");
/// let paths: Vec<_> = entries.iter().map(|e| e.path.as_path()).collect();
///
/// assert_eq!(
///     paths,
///     [Path::new("a"), Path::new("a/b.txt"), Path::new("a/c"), Path::new("a/c/d.txt")]
/// );
/// ```
pub fn parse(text: &str) -> Vec<Entry> {
    parse_with(text, &GlyphIndentation::default())
}

/// Parses tree notation using a custom indentation convention.
pub fn parse_with<I: Indentation + ?Sized>(text: &str, indentation: &I) -> Vec<Entry> {
    Entries::new(text, indentation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::DEFAULT_TEMPLATE;
    use std::path::Path;

    #[test]
    fn test_clean_label_strips_connectors() {
        assert_eq!(clean_label("│   ├── __init__.py"), "__init__.py");
        assert_eq!(clean_label("└── data/"), "data/");
        assert_eq!(clean_label("    └── user_12345.json  "), "user_12345.json");
        assert_eq!(clean_label("│   │"), "");
    }

    #[test]
    fn test_classify() {
        assert_eq!(EntryKind::classify("bot.py"), EntryKind::File);
        assert_eq!(EntryKind::classify("handlers/"), EntryKind::Directory);
        assert_eq!(EntryKind::classify("handlers"), EntryKind::Directory);
        assert_eq!(EntryKind::classify("v1.2/"), EntryKind::Directory);
        assert_eq!(EntryKind::classify("Makefile"), EntryKind::Directory);
    }

    #[test]
    fn test_classify_dotted_directory_without_marker_is_a_file() {
        assert_eq!(EntryKind::classify("v1.2"), EntryKind::File);
    }

    #[test]
    fn test_tree_line_skips_blank_and_glyph_only_lines() {
        let indentation = GlyphIndentation::default();

        assert!(TreeLine::parse("", &indentation).is_none());
        assert!(TreeLine::parse("    \t", &indentation).is_none());
        assert!(TreeLine::parse("│   ├──", &indentation).is_none());
        assert!(TreeLine::parse("└── ", &indentation).is_none());
    }

    #[test]
    fn test_tree_line_fields() {
        let line = TreeLine::parse("│   └── usage_handler.py", &GlyphIndentation::default())
            .expect("a meaningful line");

        assert_eq!(line.indent, "│   └── ");
        assert_eq!(line.label, "usage_handler.py");
        assert_eq!(line.depth, 2);
        assert_eq!(line.kind(), EntryKind::File);
    }

    #[test]
    fn test_path_stack_truncates_before_push() {
        let mut stack = PathStack::new();
        stack.descend(0, "a/".into());
        stack.descend(1, "b/".into());
        stack.descend(2, "c.txt".into());
        assert_eq!(stack.len(), 3);

        stack.descend(1, "d.txt".into());
        assert_eq!(stack.labels(), ["a/", "d.txt"]);
        assert_eq!(stack.to_path(), Path::new("a/d.txt"));
    }

    #[test]
    fn test_path_stack_tolerates_depth_jumps() {
        let mut stack = PathStack::new();
        stack.descend(3, "deep.txt".into());

        assert_eq!(stack.labels(), ["deep.txt"]);
    }

    #[test]
    fn test_path_stack_keeps_labels_under_base() {
        let mut stack = PathStack::new();
        stack.descend(0, "/etc".into());
        assert_eq!(stack.to_path(), Path::new("etc"));

        stack.descend(0, "../escaped.txt".into());
        assert_eq!(stack.to_path(), Path::new("escaped.txt"));

        stack.descend(0, "a/".into());
        stack.descend(1, "./../b/../c.txt".into());
        assert_eq!(stack.to_path(), Path::new("a/b/c.txt"));
    }

    #[test]
    fn test_parse_simple_tree() {
        let entries = parse("a/\n├── b.txt\n└── c/\n    └── d.txt\n");

        let expected = [
            ("a", EntryKind::Directory, 0),
            ("a/b.txt", EntryKind::File, 1),
            ("a/c", EntryKind::Directory, 1),
            ("a/c/d.txt", EntryKind::File, 2),
        ];
        assert_eq!(entries.len(), expected.len());
        for (entry, (path, kind, depth)) in entries.iter().zip(expected) {
            assert_eq!(entry.path, Path::new(path));
            assert_eq!(entry.kind, kind);
            assert_eq!(entry.depth, depth);
        }
    }

    #[test]
    fn test_parse_glyph_only_line_leaves_stack_untouched() {
        let entries = parse("a/\n├── b/\n│   \n│   ├──\n│   └── c.txt\n");
        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();

        assert_eq!(
            paths,
            [
                PathBuf::from("a"),
                PathBuf::from("a/b"),
                PathBuf::from("a/b/c.txt")
            ]
        );
    }

    #[test]
    fn test_parse_default_template() {
        let entries = parse(DEFAULT_TEMPLATE);
        let files: Vec<_> = entries
            .iter()
            .filter(|e| e.kind.is_file())
            .map(|e| e.path.to_string_lossy().into_owned())
            .collect();

        assert_eq!(entries.len(), 12);
        assert_eq!(
            files,
            [
                "my_bot/bot.py",
                "my_bot/config.py",
                "my_bot/handlers/__init__.py",
                "my_bot/handlers/subscription_handler.py",
                "my_bot/handlers/payment_handler.py",
                "my_bot/handlers/usage_handler.py",
                "my_bot/utils/data_manager.py",
                "my_bot/data/user_12345.json",
            ]
        );
    }

    #[test]
    fn test_parse_without_root_line() {
        // serialized trees start one level deep
        let entries = parse("└── my_bot/\n    ├── bot.py\n    └── data/\n        └── a.json");
        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();

        assert_eq!(
            paths,
            [
                PathBuf::from("my_bot"),
                PathBuf::from("my_bot/bot.py"),
                PathBuf::from("my_bot/data"),
                PathBuf::from("my_bot/data/a.json"),
            ]
        );
    }

    #[test]
    fn test_parse_depths_count_from_first_line() {
        let entries = parse("    ├── a/\n    │   └── b.txt\n    └── c.txt\n");
        let depths: Vec<_> = entries.iter().map(|e| e.depth).collect();

        assert_eq!(depths, [0, 1, 0]);
        assert_eq!(entries[1].path, Path::new("a/b.txt"));
        assert_eq!(entries[2].path, Path::new("c.txt"));
    }

    #[test]
    fn test_parse_line_shallower_than_first_is_a_sibling() {
        let entries = parse("├── a/\nb.txt\n");

        assert_eq!(entries[1].path, Path::new("b.txt"));
        assert_eq!(entries[1].depth, 0);
    }

    #[test]
    fn test_parse_with_two_space_indentation() {
        let entries = parse_with("a/\n  b.txt\n  c/\n    d.txt", &GlyphIndentation::new(2));

        assert_eq!(entries[3].path, Path::new("a/c/d.txt"));
    }

    #[test]
    fn test_parse_accepts_crlf() {
        let entries = parse("a/\r\n├── b.txt\r\n");

        assert_eq!(entries[1].path, Path::new("a/b.txt"));
    }

    #[test]
    fn test_entries_expose_open_ancestors() {
        let indentation = GlyphIndentation::default();
        let mut entries = Entries::new("a/\n├── b/\n│   └── c.txt\n└── d.txt\n", &indentation);

        entries.by_ref().take(3).for_each(drop);
        assert_eq!(entries.stack().labels(), ["a/", "b/", "c.txt"]);

        entries.next();
        assert_eq!(entries.stack().labels(), ["a/", "d.txt"]);
        assert!(entries.next().is_none());
    }

    #[test]
    fn test_parse_empty_text_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }
}
