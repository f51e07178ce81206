//! The unit of work submitted for concurrent execution.
//!
//! A [`Task`] is a zero-argument, no-return body that may fail by returning
//! a [`TaskFailure`]. Plain closures implement it automatically, and
//! [`task_fn`] adapts closures that cannot fail.

use crate::failure::TaskFailure;

/// A single unit of work, run by exactly one worker thread.
///
/// The trait is object-safe: bundles store tasks as `Arc<dyn Task>`, and a
/// replicated bundle shares one task instance across all of its workers.
/// Implementations must therefore be callable from multiple threads at
/// once (`Send + Sync`, `run(&self)`).
///
/// Any `Fn() -> Result<(), TaskFailure> + Send + Sync` closure is a task:
///
/// ```
/// use stampede::{Task, TaskFailure};
///
/// fn flaky() -> Result<(), TaskFailure> {
///     Err(TaskFailure::new("io", "connection refused"))
/// }
///
/// assert!(flaky.run().is_err());
/// ```
///
/// For task bodies that cannot fail, see [`task_fn`].
pub trait Task: Send + Sync {
    /// Execute the task body once.
    fn run(&self) -> Result<(), TaskFailure>;
}

impl<F> Task for F
where
    F: Fn() -> Result<(), TaskFailure> + Send + Sync,
{
    fn run(&self) -> Result<(), TaskFailure> {
        self()
    }
}

/// Adapt an infallible closure into a [`Task`].
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use stampede::{task_fn, Task};
///
/// let hits = Arc::new(AtomicUsize::new(0));
/// let task = task_fn({
///     let hits = Arc::clone(&hits);
///     move || {
///         hits.fetch_add(1, Ordering::SeqCst);
///     }
/// });
///
/// task.run().unwrap();
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
pub fn task_fn<F>(f: F) -> impl Task
where
    F: Fn() + Send + Sync,
{
    move || {
        f();
        Ok(())
    }
}
