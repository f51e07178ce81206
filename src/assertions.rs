//! Assertion-style entry points over the execution engine.
//!
//! Each assertion runs the engine synchronously, then translates its
//! outcome into the pass/fail signal a test framework expects: returning
//! normally on pass, panicking with an expected-vs-actual message on fail.
//!
//! When several tasks fail in one run, exactly one captured failure is
//! re-raised or compared — the first one recorded. Capture order under
//! contention is non-deterministic, so assertions here check kind and
//! presence, never the identity of a specific worker's failure.

use std::time::Duration;

use crate::bundle::TaskBundle;
use crate::engine;
use crate::failure::TaskFailure;
use crate::outcome::Outcome;

/// Assert that no task in `bundle` fails when run concurrently.
///
/// Returns the [`Outcome`] so the caller can inspect the elapsed time.
///
/// # Panics
///
/// Panics with the first captured failure if any task failed, or with the
/// engine error if the execution protocol was violated.
///
/// # Examples
///
/// ```
/// use stampede::{assert_no_failure, task_fn, TaskBundle};
///
/// let bundle = TaskBundle::replicate(task_fn(|| {}), 4).unwrap();
/// assert_no_failure(&bundle);
/// ```
pub fn assert_no_failure(bundle: &TaskBundle) -> Outcome {
    let outcome = run_engine(bundle);
    if let Some(failure) = outcome.failures.first() {
        panic!("unexpected task failure: {failure}");
    }
    outcome
}

/// Assert that running `bundle` raises a failure of `expected_kind`.
///
/// Returns the matched failure for further inspection.
///
/// # Panics
///
/// Panics if nothing failed, or if the first captured failure's kind
/// differs from `expected_kind` (the message cites both kinds).
///
/// # Examples
///
/// ```
/// use stampede::{assert_failure_kind, TaskBundle, TaskFailure};
///
/// fn refused() -> Result<(), TaskFailure> {
///     Err(TaskFailure::new("io", "connection refused"))
/// }
///
/// let bundle = TaskBundle::replicate(refused, 4).unwrap();
/// let failure = assert_failure_kind("io", &bundle);
/// assert_eq!(failure.message(), "connection refused");
/// ```
pub fn assert_failure_kind(expected_kind: &str, bundle: &TaskBundle) -> TaskFailure {
    let mut outcome = run_engine(bundle);
    if outcome.failures.is_empty() {
        panic!("expected a failure of kind `{expected_kind}`, but nothing failed");
    }
    let failure = outcome.failures.remove(0);
    if failure.kind() != expected_kind {
        panic!(
            "expected a failure of kind `{expected_kind}`, but `{actual}` was raised: {failure}",
            actual = failure.kind(),
        );
    }
    failure
}

/// Assert that the concurrent phase of running `bundle` finishes within
/// `bound`.
///
/// Task failure takes priority over timing: if any task failed, the first
/// captured failure is re-raised exactly as [`assert_no_failure`] would,
/// without consulting the clock. The bound is checked retrospectively
/// against the measured elapsed time; nothing aborts a slow task mid-run.
///
/// Returns the [`Outcome`] on success.
///
/// # Panics
///
/// Panics if any task failed, or if the measured elapsed time exceeds
/// `bound` (the message carries both values).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use stampede::{assert_elapsed_within, task_fn, TaskBundle};
///
/// let bundle = TaskBundle::replicate(task_fn(|| {}), 4).unwrap();
/// assert_elapsed_within(Duration::from_secs(1), &bundle);
/// ```
pub fn assert_elapsed_within(bound: Duration, bundle: &TaskBundle) -> Outcome {
    let outcome = assert_no_failure(bundle);
    if outcome.elapsed > bound {
        panic!(
            "concurrent execution took {:?}, exceeding the allowed {:?}",
            outcome.elapsed, bound
        );
    }
    outcome
}

fn run_engine(bundle: &TaskBundle) -> Outcome {
    match engine::execute(bundle) {
        Ok(outcome) => outcome,
        Err(error) => panic!("{error}"),
    }
}
