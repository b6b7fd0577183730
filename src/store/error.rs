use std::fmt;

use thiserror::Error;

/// Operation a refused request was made for. It only shapes the message the
/// user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Edit,
    Delete,
    Load,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Action::Add => "add",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Load => "load",
        };
        f.write_str(verb)
    }
}

/// Recoverable failures of the record operations. None of them changes the
/// store; the UI shows them to the user and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// One or both required fields were empty.
    #[error("Fill in all fields to {action}.")]
    Validation { action: Action },
    /// Edit, delete or load was attempted without a selected record.
    #[error("Select a record to {action}.")]
    Selection { action: Action },
    /// No record name contains the search term.
    #[error("Name \"{term}\" not found.")]
    NotFound { term: String },
}

impl RecordError {
    /// Heading used by the notification popup.
    pub fn title(&self) -> &'static str {
        match self {
            RecordError::Validation { .. } | RecordError::Selection { .. } => "Warning",
            RecordError::NotFound { .. } => "Not found",
        }
    }
}

pub type RecordResult<T> = Result<T, RecordError>;
