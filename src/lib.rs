//! Barrier-Synchronized Concurrency Testing
//!
//! A minimal test-support library for launching a fixed set of tasks on
//! dedicated threads, forcing them to start at the same instant, observing
//! whether any of them fails, and measuring the wall-clock time of the
//! concurrent phase.
//!
//! # Features
//!
//! - **Simultaneous start**: a three-phase barrier (ready → start → done)
//!   guarantees no task begins before every worker thread is parked and
//!   waiting, so thread-creation and scheduling jitter never pollute the
//!   measurement.
//! - **Failure aggregation**: task failures (returned errors and caught
//!   panics alike) are captured into the outcome instead of tearing down
//!   the run; assertions re-raise or classify them afterwards.
//! - **Fair timing**: the measured window runs from the start broadcast to
//!   the last completion signal, making elapsed times comparable across
//!   runs with different worker counts.
//! - **Assertion façade**: [`assert_no_failure`], [`assert_failure_kind`],
//!   and [`assert_elapsed_within`] translate outcomes into the panic-based
//!   pass/fail signaling Rust test frameworks expect.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//! use stampede::{assert_elapsed_within, assert_no_failure, task_fn, TaskBundle};
//!
//! let counter = Arc::new(AtomicUsize::new(0));
//!
//! // Run one task on 16 threads, all released at the same instant.
//! let bundle = TaskBundle::replicate(
//!     task_fn({
//!         let counter = Arc::clone(&counter);
//!         move || {
//!             counter.fetch_add(1, Ordering::SeqCst);
//!         }
//!     }),
//!     16,
//! )
//! .unwrap();
//!
//! let outcome = assert_no_failure(&bundle);
//! assert_eq!(counter.load(Ordering::SeqCst), 16);
//! println!("concurrent phase took {:?}", outcome.elapsed);
//!
//! // The same bundle shape works for timing bounds.
//! assert_elapsed_within(Duration::from_secs(1), &bundle);
//! ```
//!
//! Expecting a failure of a particular kind:
//!
//! ```
//! use stampede::{assert_failure_kind, TaskBundle, TaskFailure};
//!
//! fn overflowing() -> Result<(), TaskFailure> {
//!     Err(TaskFailure::new("overflow", "counter wrapped"))
//! }
//!
//! let bundle = TaskBundle::replicate(overflowing, 8).unwrap();
//!
//! let failure = assert_failure_kind("overflow", &bundle);
//! assert_eq!(failure.message(), "counter wrapped");
//! ```
//!
//! # Execution Model
//!
//! Every call to [`execute`] owns a disposable set of worker threads, one
//! per task, created fresh and joined before the call returns. Workers
//! signal readiness, park on the start latch, run their task body once the
//! engine broadcasts the start, record any failure, and signal completion.
//! The engine blocks the caller throughout; there is no asynchronous
//! return path and no state survives the call.
//!
//! Failures of task bodies are **data**, not engine errors: they come back
//! in [`Outcome::failures`] in first-captured order. Engine errors
//! ([`StampedeError`]) are reserved for malformed input and for violations
//! of the concurrency protocol itself, which abort the invocation without
//! reporting an outcome.
//!
//! # Optional Tracing Support
//!
//! Structured logging through the `tracing` crate is available behind the
//! `tracing` feature, compiled out entirely when disabled:
//!
//! ```toml
//! [dependencies]
//! stampede = { version = "0.1", features = ["tracing"] }
//! tracing-subscriber = "0.3"
//! ```
//!
//! Then initialize a subscriber in your test or harness:
//!
//! ```no_run
//! use tracing_subscriber::{fmt, EnvFilter};
//!
//! fmt()
//!     .with_env_filter(
//!         EnvFilter::try_from_default_env()
//!             .unwrap_or_else(|_| EnvFilter::new("stampede=debug"))
//!     )
//!     .init();
//! ```
//!
//! - **INFO**: execution completion with elapsed time and failure count
//! - **DEBUG**: worker spawning, barrier milestones
//! - **TRACE**: individual worker lifecycle
//! - **ERROR**: protocol violations

// Module declarations
mod assertions;
mod bundle;
mod engine;
mod error;
mod failure;
mod latch;
mod outcome;
mod task;

// Public re-exports
pub use assertions::{assert_elapsed_within, assert_failure_kind, assert_no_failure};
pub use bundle::TaskBundle;
pub use engine::{execute, execute_tasks};
pub use error::{StampedeError, StampedeResult};
pub use failure::TaskFailure;
pub use outcome::Outcome;
pub use task::{task_fn, Task};
