use std::path::PathBuf;

use treeline::{Entry, EntryKind};

/// Represents a file or directory staged in memory before it is written to disk.
///
/// Files are always created empty, so unlike a rendered template there is no
/// content to carry around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEntry {
    /// Path relative to the directory the tree is built into.
    pub destination: PathBuf,
    /// Indicates whether this entry is a file (`true`) or a directory (`false`).
    pub is_file: bool,
}
impl From<Entry> for VirtualEntry {
    fn from(entry: Entry) -> Self {
        Self {
            destination: entry.path,
            is_file: entry.kind == EntryKind::File,
        }
    }
}
/// An ordered plan of [`VirtualEntry`] values, one per line of tree notation.
///
/// Order matters: entries are applied to disk exactly as they appeared in the
/// text, and the same path may be listed more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses tree notation into a plan.
    pub fn from_tree(text: &str) -> Self {
        Self {
            entries: treeline::parse(text)
                .into_iter()
                .map(VirtualEntry::from)
                .collect(),
        }
    }

    pub fn files(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|e| e.is_file)
    }

    pub fn directories(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|e| !e.is_file)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_tree_keeps_line_order_and_duplicates() {
        let vfs = VirtualFS::from_tree("a/\n└── b.txt\na/\n");

        let destinations: Vec<_> = vfs.entries.iter().map(|e| e.destination.as_path()).collect();

        assert_eq!(
            destinations,
            [Path::new("a"), Path::new("a/b.txt"), Path::new("a")]
        );
        assert_eq!(vfs.files().count(), 1);
        assert_eq!(vfs.directories().count(), 2);
    }

    #[test]
    fn test_from_empty_tree() {
        let vfs = VirtualFS::from_tree("");

        assert!(vfs.is_empty());
        assert_eq!(vfs, VirtualFS::new());
    }
}
