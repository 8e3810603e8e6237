use thiserror::Error;

use crate::id::TaskId;

/// Failures surfaced by task operations.
///
/// None of these are fatal: callers turn them into a user-facing message and
/// leave the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The task text was empty or whitespace-only.
    #[error("Task text cannot be empty!")]
    EmptyTaskText,
    /// No task carries the requested identifier.
    #[error("task {id} not found")]
    NotFound {
        /// Identifier that was looked up.
        id: TaskId,
    },
    /// A priority token outside of high/medium/low.
    #[error("invalid priority: {token}")]
    InvalidPriority {
        /// Token as supplied by the caller.
        token: String,
    },
    /// A filter token outside of all/completed/pending.
    #[error("invalid filter: {token}")]
    InvalidFilter {
        /// Token as supplied by the caller.
        token: String,
    },
}

/// Result alias for task operations.
pub type TaskResult<T> = Result<T, TaskError>;
