//! Box-drawing glyphs used by the tree notation.

/// Vertical bar drawn beside the children of a non-last sibling.
pub const VERTICAL: char = '│';
/// Horizontal bar used inside the branch connectors.
pub const HORIZONTAL: char = '─';
/// Head of a tee branch (`├──`).
pub const TEE_HEAD: char = '├';
/// Head of a corner branch (`└──`).
pub const CORNER_HEAD: char = '└';

/// Connector for every entry but the last of a directory.
pub const TEE: &str = "├──";
/// Connector for the last entry of a directory.
pub const CORNER: &str = "└──";

pub const TEE_POINTER: &str = "├── ";
pub const CORNER_POINTER: &str = "└── ";

/// Child prefix continuation below a non-last entry.
pub const BRANCH_PREFIX: &str = "│   ";
/// Child prefix continuation below the last entry.
pub const BLANK_PREFIX: &str = "    ";

/// Trailing marker on directory labels.
pub const DIRECTORY_MARKER: char = '/';

/// Characters per nesting level in rendered trees.
pub const INDENT_WIDTH: usize = 4;

/// Tree used when the builder receives no text at all.
pub const DEFAULT_TEMPLATE: &str = "my_bot/
├── bot.py
├── config.py
├── handlers/
│   ├── __init__.py
│   ├── subscription_handler.py
│   ├── payment_handler.py
│   └── usage_handler.py
├── utils/
│   └── data_manager.py
└── data/
    └── user_12345.json
";

/// Returns `true` for characters that count towards a line's indentation.
pub fn is_indent_glyph(c: char) -> bool {
    matches!(c, VERTICAL | TEE_HEAD | CORNER_HEAD | ' ' | HORIZONTAL)
}
