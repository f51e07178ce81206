//! Tests for the concurrent failure-capture policy
//!
//! Capture order under contention is unspecified, so these tests assert
//! kind and presence, never which worker's failure came first.

use std::sync::Arc;

use stampede::{execute, task_fn, Task, TaskBundle, TaskFailure};

use crate::common::failing;

#[test]
fn test_distinct_kinds_are_all_captured() {
    let mut tasks: Vec<Arc<dyn Task>> = Vec::new();
    for _ in 0..3 {
        tasks.push(Arc::new(failing("io", "refused")));
        tasks.push(Arc::new(failing("parse", "bad digit")));
    }

    let bundle = TaskBundle::from_tasks(tasks).unwrap();
    let outcome = execute(&bundle).unwrap();

    assert_eq!(outcome.failures.len(), 6);
    let io_count = outcome.failures.iter().filter(|f| f.kind() == "io").count();
    let parse_count = outcome
        .failures
        .iter()
        .filter(|f| f.kind() == "parse")
        .count();
    assert_eq!(io_count, 3);
    assert_eq!(parse_count, 3);
}

#[test]
fn test_errors_and_panics_share_the_capture_path() {
    let tasks: Vec<Arc<dyn Task>> = vec![
        Arc::new(failing("io", "refused")),
        Arc::new(task_fn(|| panic!("worker exploded"))),
        Arc::new(task_fn(|| {})),
    ];

    let bundle = TaskBundle::from_tasks(tasks).unwrap();
    let outcome = execute(&bundle).unwrap();

    assert_eq!(outcome.failures.len(), 2);
    assert!(outcome.failures.iter().any(|f| f.kind() == "io"));
    assert!(outcome
        .failures
        .iter()
        .any(|f| f.kind() == TaskFailure::PANIC));
}

#[test]
fn test_first_captured_failure_is_a_real_failure() {
    // Whatever order the workers won the race in, the first element is a
    // captured failure from this run.
    let bundle = TaskBundle::replicate(failing("io", "refused"), 16).unwrap();
    let outcome = execute(&bundle).unwrap();

    assert_eq!(outcome.failures.len(), 16);
    assert_eq!(outcome.failures[0].kind(), "io");
    assert_eq!(outcome.failures[0].message(), "refused");
}
