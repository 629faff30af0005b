use crate::deadline::Deadline;
use crate::lock::Lock;
use crate::raw_lock::RawLock;
use crate::wait::{Wait, Yield};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

// Constants used for waiting in tests.rs.
pub const LONG_WAIT: Duration = Duration::from_secs(30);

/// Spawns a new thread and waits until its closure has _started_ executing.
///
/// Useful for _probabilistically_ testing code where a thread will start off by blocking
/// on something, and we want to verify that the thread is, indeed, blocked. This function
/// only guarantees that the closure has begun executing; it doesn't guarantee
/// that the thread has blocked.
pub fn spawn_blocked<F, T>(f: F) -> JoinHandle<T>
where
    F: FnOnce() -> T,
    F: Send + 'static,
    T: Send + 'static,
{
    let started = Arc::new(AtomicBool::new(false));
    let thread = {
        let started = started.clone();
        thread::spawn(move || {
            started.store(true, Ordering::Relaxed);
            f()
        })
    };
    Yield::wait_until(|| started.load(Ordering::Relaxed), Deadline::Forever).unwrap();
    thread
}

/// Occupancy of a critical section, tracked with plain (non-atomic) arithmetic.
#[derive(Debug, Default)]
pub struct Tally {
    pub inside: usize,
    pub max_inside: usize,
    pub acquisitions: usize,
}

/// Has `threads` threads enter and leave the critical section of a shared lock
/// `iterations` times each, yielding a random number of times while inside. Fails the
/// calling test if the run outlives [`LONG_WAIT`].
pub fn hammer<L: RawLock + Default + 'static>(threads: usize, iterations: usize) -> Tally {
    let lock = Arc::new(Lock::<L, _>::new(Tally::default()));
    let start_barrier = Arc::new(Barrier::new(threads));
    let handles = (0..threads)
        .map(|_| {
            let lock = lock.clone();
            let start_barrier = start_barrier.clone();
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                start_barrier.wait();
                for _ in 0..iterations {
                    let mut tally = lock.lock();
                    tally.inside += 1;
                    tally.max_inside = tally.max_inside.max(tally.inside);
                    for _ in 0..rng.gen_range(0..3) {
                        thread::yield_now();
                    }
                    tally.acquisitions += 1;
                    tally.inside -= 1;
                }
            })
        })
        .collect::<Vec<_>>();

    Yield::wait_for(|| handles.iter().all(JoinHandle::is_finished), LONG_WAIT)
        .expect("lock did not admit every caller in time");
    for handle in handles {
        handle.join().unwrap();
    }
    Arc::try_unwrap(lock).ok().unwrap().into_inner()
}
