//! Tests proving the simultaneous-start guarantee of the barrier

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use stampede::{execute, task_fn, Task, TaskBundle};

#[test]
fn test_start_instants_are_clustered() {
    // Instrument every worker to record the instant it began its task
    // body; the maximum pairwise spread must be far below what sequential
    // release would produce.
    let instants = Arc::new(Mutex::new(Vec::new()));
    let tasks: Vec<Arc<dyn Task>> = (0..8)
        .map(|_| {
            let instants = Arc::clone(&instants);
            Arc::new(task_fn(move || {
                instants.lock().unwrap().push(Instant::now());
            })) as Arc<dyn Task>
        })
        .collect();

    let bundle = TaskBundle::from_tasks(tasks).unwrap();
    execute(&bundle).unwrap();

    let instants = instants.lock().unwrap();
    assert_eq!(instants.len(), 8);

    let earliest = instants.iter().min().unwrap();
    let latest = instants.iter().max().unwrap();
    let spread = latest.duration_since(*earliest);

    println!("start-instant spread across 8 workers: {:?}", spread);
    assert!(
        spread < Duration::from_millis(50),
        "workers not released simultaneously, spread {:?}",
        spread
    );
}

#[test]
fn test_all_workers_overlap_in_time() {
    // Track the number of simultaneously running task bodies. With the
    // barrier releasing everyone at once and each body sleeping far longer
    // than release jitter, all workers must overlap at some point.
    let num_workers = 8;
    let current = Arc::new(AtomicUsize::new(0));
    let max_concurrent = Arc::new(AtomicUsize::new(0));

    let bundle = TaskBundle::replicate(
        task_fn({
            let current = Arc::clone(&current);
            let max_concurrent = Arc::clone(&max_concurrent);
            move || {
                let now = current.fetch_add(1, Ordering::SeqCst) + 1;
                max_concurrent.fetch_max(now, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(100));
                current.fetch_sub(1, Ordering::SeqCst);
            }
        }),
        num_workers,
    )
    .unwrap();

    execute(&bundle).unwrap();

    let max_seen = max_concurrent.load(Ordering::SeqCst);
    println!("maximum concurrent workers: {}", max_seen);
    assert_eq!(
        max_seen, num_workers,
        "expected all {} workers to overlap, saw {}",
        num_workers, max_seen
    );
    assert_eq!(current.load(Ordering::SeqCst), 0);
}

#[test]
fn test_single_worker_bundle_runs() {
    // Degenerate barrier: one participant still crosses all three phases.
    let ran = Arc::new(AtomicUsize::new(0));
    let bundle = TaskBundle::replicate(
        task_fn({
            let ran = Arc::clone(&ran);
            move || {
                ran.fetch_add(1, Ordering::SeqCst);
            }
        }),
        1,
    )
    .unwrap();

    let outcome = execute(&bundle).unwrap();
    assert!(outcome.is_success());
    assert_eq!(ran.load(Ordering::SeqCst), 1);
}
