//! Tests with tracing feature enabled

use std::time::Duration;

use stampede::{assert_no_failure, execute, TaskBundle};
use tracing_subscriber::{fmt, EnvFilter};

use crate::common::{failing, sleeper};

fn init_subscriber() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stampede=trace")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn test_tracing_with_successful_run() {
    init_subscriber();

    let bundle = TaskBundle::replicate(sleeper(Duration::from_millis(5)), 4).unwrap();
    let outcome = assert_no_failure(&bundle);
    assert!(outcome.is_success());
}

#[test]
fn test_tracing_with_failing_run() {
    init_subscriber();

    let bundle = TaskBundle::replicate(failing("io", "refused"), 4).unwrap();
    let outcome = execute(&bundle).unwrap();
    assert_eq!(outcome.failures.len(), 4);
}
