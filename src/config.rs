use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const SETTINGS_FILE: &str = "treeseed.toml";
pub const STRUCTURE_FILE: &str = "structure.txt";
pub const ANALYSIS_FILE: &str = "project_structure.txt";

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("could not load treeseed.toml")]
    #[diagnostic(code(treeseed::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(treeseed::config::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Per-project settings read from an optional `treeseed.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Name of the structure file inside the target directory.
    pub structure_file: String,
    /// Suggested file name when saving an analysis.
    pub analysis_file: String,
    /// Replaces the builtin default tree when seeding a structure file.
    pub template: Option<String>,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            structure_file: STRUCTURE_FILE.to_string(),
            analysis_file: ANALYSIS_FILE.to_string(),
            template: None,
        }
    }
}
impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Loads `treeseed.toml` from `directory`, or the defaults when there is none.
    pub fn load(directory: &Path) -> Result<Self, ConfigError> {
        let path = directory.join(SETTINGS_FILE);

        if path.is_file() {
            log::debug!("reading settings from {}", path.display());
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Tree text used when a structure file has to be seeded.
    pub fn template(&self) -> &str {
        self.template.as_deref().unwrap_or(treeline::DEFAULT_TEMPLATE)
    }
}
