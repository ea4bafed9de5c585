use crate::{
    config::Settings,
    errors::{FileOperation, IoError},
};
use miette::Diagnostic;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum StructureError {
    #[error("could not read or seed the structure file")]
    #[diagnostic(
        code(treeseed::structure::io),
        help("The structure file is read from, or seeded into, the target directory")
    )]
    Io(#[from] IoError),
}

/// Where the text of a [`StructureFile`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The file already existed and was not empty.
    Existing,
    /// The file was missing or empty and has been filled with the template.
    Seeded,
}
impl Origin {
    fn as_str(&self) -> &str {
        match self {
            Self::Existing => "using existing file",
            Self::Seeded => "created new template file",
        }
    }
}
impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The tree text kept next to a project, `structure.txt` by default.
#[derive(Debug, Clone)]
pub struct StructureFile {
    pub path: PathBuf,
    pub content: String,
    pub origin: Origin,
}
impl StructureFile {
    /// Reads the structure file inside `directory`.
    ///
    /// A missing or zero-length file is (re)written with the settings'
    /// template first, so the caller always gets text to build from.
    pub fn resolve(directory: &Path, settings: &Settings) -> Result<Self, StructureError> {
        let path = directory.join(&settings.structure_file);

        let has_content = fs::metadata(&path)
            .map(|metadata| metadata.len() > 0)
            .unwrap_or(false);

        if has_content {
            let content = fs::read_to_string(&path)
                .map_err(|error| IoError::new(FileOperation::Read, path.clone(), error))?;

            log::debug!("read {} bytes from {}", content.len(), path.display());

            return Ok(Self {
                path,
                content,
                origin: Origin::Existing,
            });
        }

        let content = settings.template().to_string();

        fs::write(&path, &content)
            .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

        log::debug!("seeded {} with the default template", path.display());

        Ok(Self {
            path,
            content,
            origin: Origin::Seeded,
        })
    }
}
