use thiserror::Error;

/// Failure conditions surfaced by the core operations.
///
/// Row-level problems found while decoding the store are not part of this
/// taxonomy: they are recovered locally and reported as diagnostics (see
/// `persistence::parser::ParseWarning`). File I/O failures are carried as
/// `anyhow::Error` at the persistence boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Bad input shape or content (blank or non-alphanumeric name/task).
    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// Case-insensitive subject name collision.
    #[error("subject '{0}' already exists")]
    DuplicateName(String),

    /// Operation is not valid in the current state or at the given index.
    #[error("{0}")]
    PreconditionFailed(String),

    /// Analytics requested over zero subjects.
    #[error("no subjects to analyze")]
    EmptyCollection,
}

impl TrackerError {
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionFailed(msg.into())
    }
}
