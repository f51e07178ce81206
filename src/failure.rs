//! The error value a task reports when it fails.
//!
//! A [`TaskFailure`] is a tagged failure record: a `kind` label used by
//! assertions to classify the failure, a human-readable message, and an
//! optional underlying error. Worker panics are normalized into the same
//! shape under [`TaskFailure::PANIC`] so that panicking tasks and
//! `Err`-returning tasks travel the same reporting path.

use std::any::Any;
use std::error::Error;
use std::fmt;

/// A failure raised by a task body during the timed phase.
///
/// Failures are captured by the worker that observed them and surfaced to
/// the caller as part of the [`Outcome`](crate::Outcome); they are never
/// propagated mid-run.
///
/// # Examples
///
/// ```
/// use stampede::TaskFailure;
///
/// let failure = TaskFailure::new("io", "connection refused");
/// assert_eq!(failure.kind(), "io");
/// assert_eq!(failure.to_string(), "io: connection refused");
/// ```
#[derive(Debug)]
pub struct TaskFailure {
    kind: String,
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl TaskFailure {
    /// Kind assigned to failures converted from caught panics.
    pub const PANIC: &'static str = "panic";

    /// Create a failure with a kind label and a message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying error that caused this failure.
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build a failure of kind [`TaskFailure::PANIC`] from a caught panic payload.
    ///
    /// Panic payloads are almost always `&str` or `String`; anything else is
    /// reported as an unknown panic.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::new(Self::PANIC, message)
    }

    /// The kind label this failure was tagged with.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for TaskFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.source.as_deref() {
            Some(source) => Some(source),
            None => None,
        }
    }
}
