//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message.
//!
//! Pressing Esc or interrupting a prompt maps to
//! [`PromptError::Cancelled`]; the orchestrator treats that as a graceful
//! abort, not a failure.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect, Select};
use thiserror::Error;

use crate::core::types::BranchName;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        let dialoguer::Error::IO(io) = err;
        if io.kind() == std::io::ErrorKind::Interrupted {
            PromptError::Cancelled
        } else {
            PromptError::IoError(io.to_string())
        }
    }
}

/// What to do when the working tree has uncommitted changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncleanAction {
    /// Archive anyway; the diff is computed from committed trees.
    Proceed,
    /// Stop without archiving.
    Abort,
}

/// Prompt for exactly two branches out of the candidate list.
///
/// Re-prompts until exactly two entries are checked. Returns
/// `Err(PromptError::Cancelled)` if the user backs out.
pub fn select_two_branches(
    candidates: &[BranchName],
    interactive: bool,
) -> Result<(BranchName, BranchName), PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    loop {
        let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select two branches to compare (space to toggle, enter to accept)")
            .items(candidates)
            .interact_opt()?;

        let Some(indices) = chosen else {
            return Err(PromptError::Cancelled);
        };

        if let [first, second] = indices[..] {
            return Ok((candidates[first].clone(), candidates[second].clone()));
        }

        super::output::error("please select exactly two branches");
    }
}

/// Prompt for confirmation (yes/no).
///
/// Returns `Ok(true)` if the user confirms, `Ok(false)` if they decline.
/// Returns `Err(PromptError::NotInteractive)` if not in interactive mode.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(default)
        .interact_opt()?;

    answer.ok_or(PromptError::Cancelled)
}

/// Ask how to handle a dirty working tree.
pub fn choose_unclean_action(interactive: bool) -> Result<UncleanAction, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Working tree has uncommitted changes")
        .items(&["Proceed anyway", "Abort"])
        .default(1)
        .interact_opt()?;

    match choice {
        Some(0) => Ok(UncleanAction::Proceed),
        Some(_) => Ok(UncleanAction::Abort),
        None => Err(PromptError::Cancelled),
    }
}
