use inquire::{Confirm, InquireError, Text};
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to prompt user")]
    #[diagnostic(
        code(treeseed::prompt::inquire),
        help("Interactive mode needs a terminal; drop --interactive when piping")
    )]
    Inquire(#[from] InquireError),
}

/// Asks whether the previewed entries should be written to disk.
pub fn apply_changes() -> Result<bool, PromptError> {
    let answer = Confirm::new("Create these entries?")
        .with_default(true)
        .with_help_message("Existing files listed in the tree will be emptied")
        .prompt()?;

    Ok(answer)
}

/// Asks where an analysis should be saved. `None` means it should not be.
pub fn get_output_file(default: &str) -> Result<Option<PathBuf>, PromptError> {
    let answer = Text::new("Save structure to:")
        .with_default(default)
        .with_help_message("Press Esc to skip saving")
        .prompt_skippable()?;

    Ok(answer
        .map(|answer| answer.trim().to_string())
        .filter(|answer| !answer.is_empty())
        .map(PathBuf::from))
}
