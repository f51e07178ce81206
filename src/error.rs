//! Error types for concurrent execution.
//!
//! This module defines the errors the engine itself can raise. Failures of
//! individual task bodies are not errors of the engine; they are collected
//! into the [`Outcome`](crate::Outcome) as [`TaskFailure`](crate::TaskFailure)
//! values.

/// Errors that can occur while validating input or coordinating workers
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StampedeError {
    /// A task bundle or task sequence was empty
    EmptyBundle,

    /// A replicated bundle was requested with a worker count of zero
    ZeroWorkers,

    /// The concurrency protocol itself was violated
    ///
    /// This is not a task-level failure: it means a worker thread could not
    /// be spawned, terminated abnormally, or the barrier bookkeeping ended
    /// in a state the engine cannot trust. The measured timing and the
    /// captured failure set are discarded.
    UnknownExecution { detail: String },
}

impl std::fmt::Display for StampedeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StampedeError::EmptyBundle => {
                write!(f, "task bundle must contain at least one task")
            }
            StampedeError::ZeroWorkers => {
                write!(f, "worker count must be at least 1")
            }
            StampedeError::UnknownExecution { detail } => {
                write!(
                    f,
                    "unknown concurrent execution failure: {}\n\
                     \n\
                     The execution protocol was violated, so the measured timing and \
                     captured failures cannot be trusted. This invocation is aborted.",
                    detail
                )
            }
        }
    }
}

impl std::error::Error for StampedeError {}

/// Result type for engine operations
pub type StampedeResult<T> = Result<T, StampedeError>;
