//! The result of one engine invocation.

use std::time::Duration;

use crate::failure::TaskFailure;

/// Elapsed time and captured failures from one concurrent execution.
///
/// `elapsed` covers the timed phase only: from the instant the start signal
/// was broadcast to the instant the last worker signaled completion. Thread
/// spawning and readiness-barrier waiting happen before the clock starts,
/// so outcomes are comparable across runs with different worker counts.
///
/// `failures` holds every failure captured during the run, in the order the
/// workers recorded them. Capture is concurrent, so under contention that
/// order is "first captured", not task index order — callers must not
/// depend on which failure comes first when several tasks fail.
#[derive(Debug)]
pub struct Outcome {
    /// Duration of the timed phase (start broadcast to last completion).
    pub elapsed: Duration,
    /// Failures captured by the workers, possibly empty.
    pub failures: Vec<TaskFailure>,
}

impl Outcome {
    /// `true` if no task reported a failure.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
