mod commands;
mod history;

use thiserror::Error;

pub use commands::Command;
pub use history::CommandHistory;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    /// There is nothing to undo or redo
    #[error("Nothing to undo or redo")]
    EmptyHistory,
    /// The document no longer matches what the command expects
    #[error("Document out of sync with history: {0}")]
    InvalidState(String),
}
