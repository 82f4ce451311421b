//! Interactive Prompts
//!
//! The terminal implementation of [`Prompter`], built on `inquire`.
//! Validation runs inline at the prompt, so a too-long description is
//! corrected on the spot instead of aborting the workflow; `Esc` and
//! `Ctrl-C` abort the workflow as a user cancellation.

use std::fmt;

use inquire::{InquireError, Select, Text, validator::Validation};

use crate::{
    actions::Action,
    errors::{OcommitError, Result},
    git::locator::RepositoryEntry,
    message::{validate_long_description, validate_short_description},
    workflow::Prompter,
};

/// Prompter backed by interactive terminal prompts.
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn select_action(&self) -> Result<Action> {
        let choices: Vec<ActionChoice> = Action::ALL.iter().copied().map(ActionChoice).collect();

        Select::new("Select the commit action", choices)
            .prompt()
            .map(|choice| choice.0)
            .map_err(map_prompt_error)
    }

    fn select_repository(&self, repositories: &[RepositoryEntry]) -> Result<RepositoryEntry> {
        Select::new("Select the repository to commit in", repositories.to_vec())
            .prompt()
            .map_err(map_prompt_error)
    }

    fn select_module(&self, modules: &[String]) -> Result<String> {
        if modules.is_empty() {
            return Text::new("Which module is affected by this change?")
                .with_placeholder("For example: auth, database, ui")
                .prompt()
                .map_err(map_prompt_error);
        }

        Select::new("Which module is affected by this change?", modules.to_vec())
            .prompt()
            .map_err(map_prompt_error)
    }

    fn short_description(&self) -> Result<String> {
        Text::new("Briefly describe the changes made (maximum 80 characters)")
            .with_placeholder("Enter the short description")
            .with_validator(|input: &str| match validate_short_description(input) {
                Ok(()) => Ok(Validation::Valid),
                Err(message) => Ok(Validation::Invalid(message.into())),
            })
            .prompt()
            .map_err(map_prompt_error)
    }

    fn long_description(&self) -> Result<String> {
        Text::new("Provide a detailed description of the changes made (maximum 300 characters)")
            .with_placeholder("Enter the long description (optional)")
            .with_validator(|input: &str| match validate_long_description(input) {
                Ok(()) => Ok(Validation::Valid),
                Err(message) => Ok(Validation::Invalid(message.into())),
            })
            .prompt()
            .map_err(map_prompt_error)
    }
}

/// Menu entry pairing a tag with its explanation.
struct ActionChoice(Action);

impl fmt::Display for ActionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6} {}", self.0.tag(), self.0.description())
    }
}

fn map_prompt_error(error: InquireError) -> OcommitError {
    match error {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            OcommitError::UserCancelled
        }
        other => OcommitError::Prompt(other),
    }
}
