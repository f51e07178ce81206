//! Barrier-synchronized concurrent execution engine.
//!
//! Runs N tasks on N dedicated worker threads so that all of them begin
//! their real work at the same logical instant, then reports the captured
//! failures and the elapsed time of the concurrent phase.
//!
//! # Barrier protocol
//!
//! The engine coordinates workers through three countdown latches:
//!
//! 1. **Readiness**: each worker, immediately after starting, counts down
//!    `ready` and parks on `start`. The engine waits until all N workers
//!    are parked, which pushes thread-creation and scheduling jitter in
//!    front of the timing window instead of inside it.
//! 2. **Timed phase**: the engine records a start instant and opens
//!    `start`, unblocking every worker in a single broadcast. Each worker
//!    runs its task body, captures any failure into a shared collection,
//!    and counts down `done`.
//! 3. **Completion**: the engine waits for all N `done` signals and records
//!    the end instant. `elapsed = end - start`.
//!
//! Workers are created fresh for every invocation and joined before it
//! returns; nothing is pooled or reused. Tasks are never retried, never
//! canceled once started, and no timeout is enforced while they run —
//! timing is observational and compared by the caller after the fact.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use parking_lot::Mutex;

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, trace};

use crate::bundle::TaskBundle;
use crate::error::{StampedeError, StampedeResult};
use crate::failure::TaskFailure;
use crate::latch::Latch;
use crate::outcome::Outcome;
use crate::task::Task;

/// Execute every task of `bundle` on its own worker thread.
///
/// Equivalent to [`execute_tasks`] on the bundle's normalized sequence.
///
/// # Errors
///
/// Returns [`StampedeError::UnknownExecution`] if the concurrency protocol
/// is violated (a worker cannot be spawned or terminates abnormally). Task
/// failures are not errors: they are returned inside the [`Outcome`].
///
/// # Examples
///
/// ```
/// use stampede::{execute, task_fn, TaskBundle};
///
/// let bundle = TaskBundle::replicate(task_fn(|| {}), 4).unwrap();
/// let outcome = execute(&bundle).unwrap();
/// assert!(outcome.is_success());
/// ```
pub fn execute(bundle: &TaskBundle) -> StampedeResult<Outcome> {
    execute_tasks(bundle.tasks())
}

/// Execute an ordered sequence of tasks, one dedicated worker thread each.
///
/// This is the raw engine entry point; [`execute`] is the bundle-shaped
/// convenience over it.
///
/// # Errors
///
/// Returns [`StampedeError::EmptyBundle`] if `tasks` is empty (checked
/// before any worker is spawned), or [`StampedeError::UnknownExecution`]
/// if the concurrency protocol is violated.
pub fn execute_tasks(tasks: &[Arc<dyn Task>]) -> StampedeResult<Outcome> {
    if tasks.is_empty() {
        return Err(StampedeError::EmptyBundle);
    }
    let worker_count = tasks.len();

    #[cfg(feature = "tracing")]
    debug!(worker_count, "spawning worker threads");

    let failures = Arc::new(Mutex::new(Vec::new()));
    let ready = Arc::new(Latch::new(worker_count));
    let start = Arc::new(Latch::new(1));
    let done = Arc::new(Latch::new(worker_count));
    // Raised only when a spawn fails mid-flight, so workers already parked
    // on `start` can be released without running their task bodies.
    let aborted = Arc::new(AtomicBool::new(false));

    let mut handles = Vec::with_capacity(worker_count);
    for (index, task) in tasks.iter().enumerate() {
        let task = Arc::clone(task);
        let failures = Arc::clone(&failures);
        let ready = Arc::clone(&ready);
        let worker_start = Arc::clone(&start);
        let done = Arc::clone(&done);
        let worker_aborted = Arc::clone(&aborted);

        let spawned = thread::Builder::new()
            .name(format!("stampede-worker-{index}"))
            .spawn(move || {
                ready.count_down();
                worker_start.wait();
                if !worker_aborted.load(Ordering::SeqCst) {
                    // The task reference crosses the unwind boundary intact:
                    // a panicking body is recorded and never re-entered.
                    match catch_unwind(AssertUnwindSafe(|| task.run())) {
                        Ok(Ok(())) => {}
                        Ok(Err(failure)) => failures.lock().push(failure),
                        Err(payload) => failures.lock().push(TaskFailure::from_panic(payload)),
                    }
                }
                done.count_down();
            });

        match spawned {
            Ok(handle) => {
                #[cfg(feature = "tracing")]
                trace!(worker = index, "worker thread spawned");
                handles.push(handle);
            }
            Err(spawn_error) => {
                #[cfg(feature = "tracing")]
                error!(worker = index, %spawn_error, "failed to spawn worker thread");

                // Release the workers that are already parked; the abort
                // flag keeps them from running their task bodies.
                aborted.store(true, Ordering::SeqCst);
                start.count_down();
                for handle in handles {
                    let _ = handle.join();
                }
                return Err(StampedeError::UnknownExecution {
                    detail: format!("failed to spawn worker thread: {spawn_error}"),
                });
            }
        }
    }

    ready.wait();

    #[cfg(feature = "tracing")]
    debug!("all workers ready, broadcasting start");

    let started = Instant::now();
    start.count_down();
    done.wait();
    let elapsed = started.elapsed();

    // The timing window closed at `done`; joining is teardown, not
    // measurement.
    for handle in handles {
        if handle.join().is_err() {
            #[cfg(feature = "tracing")]
            error!("worker thread terminated abnormally");

            return Err(StampedeError::UnknownExecution {
                detail: "worker thread terminated abnormally".to_string(),
            });
        }
    }

    let failures = Arc::try_unwrap(failures)
        .map(Mutex::into_inner)
        .map_err(|_| StampedeError::UnknownExecution {
            detail: "failure collection still shared after all workers joined".to_string(),
        })?;

    #[cfg(feature = "tracing")]
    info!(
        ?elapsed,
        failure_count = failures.len(),
        "concurrent execution complete"
    );

    Ok(Outcome { elapsed, failures })
}
