use crate::glyphs::{BLANK_PREFIX, BRANCH_PREFIX, CORNER_POINTER, DIRECTORY_MARKER, TEE_POINTER};
use crate::parse::EntryKind;

/// A named entry with its children, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub kind: EntryKind,
    pub children: Vec<Node>,
}
impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            children: Vec::new(),
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            children,
        }
    }

    /// Label as it appears in tree notation: directories carry a trailing `/`.
    pub fn label(&self) -> String {
        match self.kind {
            EntryKind::Directory => format!("{}{}", self.name, DIRECTORY_MARKER),
            EntryKind::File => self.name.clone(),
        }
    }
}

/// Connector drawn in front of a sibling.
pub fn pointer(is_last: bool) -> &'static str {
    if is_last { CORNER_POINTER } else { TEE_POINTER }
}

/// Prefix extension for the children of a sibling.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let extension = if is_last { BLANK_PREFIX } else { BRANCH_PREFIX };

    format!("{prefix}{extension}")
}

/// Renders sibling nodes as tree notation, depth-first and pre-order.
///
/// Lines are joined with `\n` and there is no trailing newline. An empty
/// slice renders as an empty string.
///
/// # Example
/// ```
/// use treeline::Node;
///
/// let tree = vec![
///     Node::directory("src", vec![Node::file("lib.rs")]),
///     Node::file("Cargo.toml"),
/// ];
///
/// assert_eq!(treeline::render(&tree), "├── src/\n│   └── lib.rs\n└── Cargo.toml");
/// ```
pub fn render(nodes: &[Node]) -> String {
    let mut lines = Vec::new();
    render_into(nodes, "", &mut lines);

    lines.join("\n")
}

fn render_into(nodes: &[Node], prefix: &str, lines: &mut Vec<String>) {
    let len = nodes.len();

    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == len - 1;

        lines.push(format!("{prefix}{}{}", pointer(is_last), node.label()));

        if node.kind == EntryKind::Directory {
            render_into(&node.children, &child_prefix(prefix, is_last), lines);
        }
    }
}
