mod commands;
mod history;

use thiserror::Error;

pub use commands::Command;
pub use history::{ImageHistory, UNDO_LIMIT};

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Why a command was ignored. A rejected command leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no current image")]
    NoCurrentImage,

    #[error("line index {index} out of range for {len} lines")]
    LineIndexOutOfRange { index: usize, len: usize },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("no active position to clear")]
    NoActivePosition,
}
