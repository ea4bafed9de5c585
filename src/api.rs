use crate::{
    builder::{self, Action, BuildReport},
    config::{self, Settings},
    errors::{FileOperation, IoError},
    preview::preview_as_tree,
    prompt,
    serializer,
    structure::{self, StructureFile},
};
use colored::Colorize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TreeseedError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] builder::BuildError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Serialize(#[from] serializer::SerializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Structure(#[from] structure::StructureError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Creates the directories and empty files described by `tree_text` under
/// `base_directory`. Empty text builds the default template.
///
/// # Errors
///
/// Returns a [`TreeseedError`] on the first directory or file that cannot be
/// created. Entries created before it are left on disk.
pub fn build(base_directory: &Path, tree_text: &str) -> Result<BuildReport, TreeseedError> {
    Ok(builder::build(base_directory, tree_text)?)
}

/// Draws the contents of `directory` as tree notation.
///
/// # Errors
///
/// Returns a [`TreeseedError`] if `directory`, or any directory below it,
/// cannot be listed.
pub fn serialize(directory: &Path) -> Result<String, TreeseedError> {
    Ok(serializer::serialize(directory)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Build the tree after resolving the structure file.
    pub create: bool,
    /// Preview the planned entries and ask before touching disk.
    pub interactive: bool,
}
impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            create: true,
            interactive: false,
        }
    }
}

/// Reads (or seeds) the structure file of `directory`, prints it, and builds
/// it into `directory`.
///
/// Returns `None` when nothing was built, because `options.create` is off or
/// the user declined the preview.
///
/// # Errors
///
/// Returns a [`TreeseedError`] if:
///
/// - `treeseed.toml` exists but cannot be read or parsed.
/// - The structure file can neither be read nor seeded.
/// - User prompts fail or the user cancels the input.
/// - A directory or file cannot be created.
pub fn seed_and_build(
    directory: &Path,
    options: &BuildOptions,
) -> Result<Option<BuildReport>, TreeseedError> {
    let settings = Settings::load(directory)?;

    let structure = StructureFile::resolve(directory, &settings)?;

    println!(
        "{}: {}",
        structure.origin.to_string().bright_blue(),
        structure.path.display()
    );
    println!("{}", structure.content.trim_end());

    if !options.create {
        return Ok(None);
    }

    let vfs = builder::plan(&structure.content);

    log::debug!(
        "planned {} entries from {}",
        vfs.len(),
        structure.path.display()
    );

    if options.interactive {
        preview_as_tree(&vfs, directory);

        if !prompt::apply_changes()? {
            log::info!("build of {} cancelled", directory.display());
            return Ok(None);
        }
    }

    let report = builder::apply_vfs(&vfs, directory)?;

    print_report(&report);

    Ok(Some(report))
}

fn print_report(report: &BuildReport) {
    for applied in &report.applied {
        let label = match applied.action {
            Action::CreatedDirectory | Action::CreatedFile => applied.action.as_str().green(),
            Action::TruncatedFile => applied.action.as_str().yellow(),
            Action::ExistingDirectory => applied.action.as_str().dimmed(),
        };

        println!("{} {}", label, applied.path.display());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Save the tree to this file.
    pub output: Option<PathBuf>,
    /// Ask for a file name when no `output` is given.
    pub interactive: bool,
}

/// Prints `directory` as tree notation and optionally saves it.
///
/// Returns the path the tree was saved to, if any.
///
/// # Errors
///
/// Returns a [`TreeseedError`] if the directory cannot be listed, the prompt
/// fails, or the output file cannot be written.
pub fn analyze(
    directory: &Path,
    options: &AnalyzeOptions,
) -> Result<Option<PathBuf>, TreeseedError> {
    let text = serializer::serialize(directory)?;

    println!("{}", text);

    let output = match (&options.output, options.interactive) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => {
            let settings = Settings::load(directory)?;

            prompt::get_output_file(&settings.analysis_file)?
        }
        (None, false) => None,
    };

    let Some(output) = output else {
        log::debug!("structure generated but not saved");
        return Ok(None);
    };

    save_text(&output, &text)?;

    println!("{} {}", "saved".green(), output.display());

    Ok(Some(output))
}

/// Writes tree text to `path`, replacing any previous content.
pub fn save_text(path: &Path, text: &str) -> Result<(), TreeseedError> {
    fs::write(path, text).map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    Ok(())
}
