use crate::{
    errors::{FileOperation, IoError},
    vfs::{VirtualEntry, VirtualFS},
};
use miette::Diagnostic;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use thiserror::Error;
use treeline::DEFAULT_TEMPLATE;

#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error("could not build the tree")]
    #[diagnostic(code(treeseed::builder::io))]
    Io(#[from] IoError),
}

/// What happened to a single planned entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreatedDirectory,
    ExistingDirectory,
    CreatedFile,
    TruncatedFile,
}
impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedDirectory | Self::CreatedFile => "create",
            Self::ExistingDirectory => "exists",
            Self::TruncatedFile => "truncate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub path: PathBuf,
    pub action: Action,
}

/// Outcome of a build, one [`Applied`] per planned entry, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub applied: Vec<Applied>,
}
impl BuildReport {
    pub fn count(&self, action: Action) -> usize {
        self.applied.iter().filter(|a| a.action == action).count()
    }
}

/// Parses `text` into a plan, falling back to [`DEFAULT_TEMPLATE`] when the
/// text is empty.
pub fn plan(text: &str) -> VirtualFS {
    let text = if text.is_empty() {
        log::debug!("empty tree text, using the default template");
        DEFAULT_TEMPLATE
    } else {
        text
    };

    VirtualFS::from_tree(text)
}

/// Creates every directory and empty file described by `text` under `base`.
///
/// Existing directories are left alone and existing files are truncated.
/// Nothing is rolled back: the first failing entry aborts the build and
/// whatever was created before it stays on disk.
///
/// # Errors
///
/// Returns a [`BuildError`] if a directory or file cannot be created.
pub fn build(base: &Path, text: &str) -> Result<BuildReport, BuildError> {
    let vfs = plan(text);

    apply_vfs(&vfs, base)
}

/// Applies a [`VirtualFS`] to disk under `destination_root`, entry by entry.
pub fn apply_vfs(vfs: &VirtualFS, destination_root: &Path) -> Result<BuildReport, BuildError> {
    let mut report = BuildReport::default();

    for entry in &vfs.entries {
        let applied = apply_entry(entry, destination_root)?;

        log::debug!("{} {}", applied.action.as_str(), applied.path.display());

        report.applied.push(applied);
    }

    log::info!(
        "applied {} entries under {}",
        report.applied.len(),
        destination_root.display()
    );

    Ok(report)
}

fn apply_entry(entry: &VirtualEntry, destination_root: &Path) -> Result<Applied, BuildError> {
    let path = destination_root.join(&entry.destination);

    let action = if entry.is_file {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                create_directory(parent)?;
            }
        }

        let existed = path.exists();

        create_empty_file(&path)?;

        if existed {
            Action::TruncatedFile
        } else {
            Action::CreatedFile
        }
    } else if path.exists() {
        Action::ExistingDirectory
    } else {
        create_directory(&path)?;

        Action::CreatedDirectory
    };

    Ok(Applied { path, action })
}

/// Creates all directories in the specified path if they do not exist.
fn create_directory(path: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    Ok(())
}

/// Creates the file, or truncates it to zero length if it already exists.
fn create_empty_file(path: &Path) -> Result<(), BuildError> {
    File::create(path).map_err(|error| IoError::new(FileOperation::Create, path.into(), error))?;

    Ok(())
}
