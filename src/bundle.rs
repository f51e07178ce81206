//! Immutable task bundle: validated input for the execution engine.
//!
//! A [`TaskBundle`] pairs tasks with their worker assignment. It is built
//! once by the test author, validated at construction, read (never
//! mutated) by the engine, and discarded when the call returns.

use std::sync::Arc;

use crate::error::{StampedeError, StampedeResult};
use crate::task::Task;

/// An immutable, ordered sequence of tasks, one per worker-to-be.
///
/// Two construction forms yield the same normalized shape:
///
/// - [`TaskBundle::replicate`] runs one task on `num_threads` workers
/// - [`TaskBundle::from_tasks`] runs a heterogeneous list, one task per worker
///
/// # Examples
///
/// ```
/// use stampede::{task_fn, TaskBundle};
///
/// let bundle = TaskBundle::replicate(task_fn(|| {}), 8).unwrap();
/// assert_eq!(bundle.len(), 8);
/// ```
#[derive(Clone)]
pub struct TaskBundle {
    tasks: Vec<Arc<dyn Task>>,
}

impl TaskBundle {
    /// Bundle one task to be run on `num_threads` distinct workers.
    ///
    /// All workers share the same task instance, so the task must tolerate
    /// concurrent invocation (the [`Task`] bounds already require it).
    ///
    /// # Errors
    ///
    /// Returns [`StampedeError::ZeroWorkers`] if `num_threads` is zero.
    pub fn replicate<T>(task: T, num_threads: usize) -> StampedeResult<Self>
    where
        T: Task + 'static,
    {
        if num_threads < 1 {
            return Err(StampedeError::ZeroWorkers);
        }
        let task: Arc<dyn Task> = Arc::new(task);
        let tasks = (0..num_threads).map(|_| Arc::clone(&task)).collect();
        Ok(Self { tasks })
    }

    /// Bundle an explicit ordered sequence of tasks, one per worker.
    ///
    /// The sequence is taken by value and never exposed mutably afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StampedeError::EmptyBundle`] if `tasks` is empty.
    pub fn from_tasks(tasks: Vec<Arc<dyn Task>>) -> StampedeResult<Self> {
        if tasks.is_empty() {
            return Err(StampedeError::EmptyBundle);
        }
        Ok(Self { tasks })
    }

    /// The normalized task sequence, in worker order.
    pub fn tasks(&self) -> &[Arc<dyn Task>] {
        &self.tasks
    }

    /// Number of workers this bundle will be run on.
    ///
    /// Always at least 1.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl std::fmt::Debug for TaskBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskBundle")
            .field("len", &self.tasks.len())
            .finish()
    }
}
