use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use treeline::Node;
use walkdir::WalkDir;

#[derive(Debug, Error, Diagnostic)]
pub enum SerializeError {
    #[error("could not draw the directory")]
    #[diagnostic(code(treeseed::serializer::io))]
    Io(#[from] IoError),

    #[error("'{path}' is not a directory")]
    #[diagnostic(
        code(treeseed::serializer::not_a_directory),
        help("Point the analysis at a project folder, not a file")
    )]
    NotADirectory { path: PathBuf },
}

/// Draws `directory` as tree notation.
///
/// The directory itself is not part of the output; its entries are listed
/// one level deep, sorted by name, with subdirectories expanded right below
/// their own line. An empty directory renders as an empty string.
///
/// # Errors
///
/// Returns a [`SerializeError`] if `directory` is not a directory or if any
/// directory below it cannot be listed. Nothing is returned in that case,
/// not even the part of the tree read so far.
pub fn serialize(directory: &Path) -> Result<String, SerializeError> {
    let nodes = read_tree(directory)?;

    Ok(treeline::render(&nodes))
}

/// Reads `directory` recursively into [`Node`]s, sorted by name.
pub fn read_tree(directory: &Path) -> Result<Vec<Node>, SerializeError> {
    if !directory.is_dir() {
        return Err(SerializeError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    read_nodes(directory)
}

fn read_nodes(directory: &Path) -> Result<Vec<Node>, SerializeError> {
    log::debug!("listing {}", directory.display());

    let mut nodes = Vec::new();

    let listing = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in listing {
        let entry = match entry {
            Ok(e) => e,
            Err(error) => {
                let path = error.path().unwrap_or(directory);

                Err(IoError::new(
                    FileOperation::ListDir,
                    path.to_path_buf(),
                    error.into(),
                ))?
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();

        // symlinks are not followed and render as plain entries
        if entry.file_type().is_dir() {
            let children = read_nodes(entry.path())?;

            nodes.push(Node::directory(name, children));
        } else {
            nodes.push(Node::file(name));
        }
    }

    Ok(nodes)
}
