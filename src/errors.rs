use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// The filesystem step that was running when an [`IoError`] happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileOperation {
    #[error("read")]
    Read,
    #[error("write")]
    Write,
    #[error("create an empty file")]
    Create,
    #[error("create a directory")]
    Mkdir,
    #[error("list a directory")]
    ListDir,
}

/// A failed filesystem step, with the entry it was working on.
///
/// Builds are not rolled back, so entries handled before this one are
/// already on disk when it is reported.
#[derive(Debug, Error, Diagnostic)]
#[error("could not {operation} at '{}'", path.display())]
#[diagnostic(
    code(treeseed::io),
    help(
        "Entries before this one were kept. Check permissions, and whether a file \
         sits where the tree expects a directory (or the other way round)."
    )
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}
