//! Reading and drawing directory layouts in box-drawing tree notation.
//!
//! ```text
//! my_bot/
//! ├── bot.py
//! └── data/
//!     └── user_12345.json
//! ```
//!
//! Every level is four characters wide. A line's depth is inferred from its
//! leading run of glyphs and spaces, and its path is rebuilt from a stack of
//! open ancestors. Nothing here touches the filesystem.
pub mod glyphs;
pub mod indent;
pub mod parse;
pub mod render;

pub use glyphs::DEFAULT_TEMPLATE;
pub use indent::{indent_depth, GlyphIndentation, Indentation};
pub use parse::{clean_label, parse, parse_with, Entries, Entry, EntryKind, PathStack, TreeLine};
pub use render::{render, Node};
