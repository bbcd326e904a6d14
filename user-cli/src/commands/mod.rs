pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use std::io;

use thiserror::Error;
use user_service::ServiceError;

pub type CommandResult = Result<(), CommandError>;

/// Ways a menu command can stop early.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Reported to the user; the menu keeps going.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Standard input closed in the middle of a prompt.
    #[error("input closed")]
    InputClosed,

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Collapse "no more input" into `InputClosed`.
pub(crate) fn required(line: Option<String>) -> Result<String, CommandError> {
    line.ok_or(CommandError::InputClosed)
}

pub(crate) const NOT_FOUND_MESSAGE: &str = "No user found with that ID.";
