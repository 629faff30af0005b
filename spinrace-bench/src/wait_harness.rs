use crate::latency::Latency;
use spinrace::raw_lock::RawLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

pub mod print;

#[derive(Debug, Clone)]
pub struct Options {
    pub workers: usize,
    pub iterations: u64,
    /// How long each worker sleeps while holding the lock.
    pub hold: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct ExtendedOptions {
    pub debug_locks: bool,
    pub debug_exits: bool,
}

#[derive(Debug)]
pub struct BenchmarkResult {
    pub samples: u64,
    pub total_wait: Duration,
    /// Wall time from spawning the first worker to joining the last.
    pub elapsed: Duration,
}

impl BenchmarkResult {
    pub fn mean_wait(&self) -> Option<Latency> {
        Latency::mean(self.total_wait, self.samples)
    }
}

/// Has `opts.workers` threads acquire, hold and release `lock` `opts.iterations` times
/// each, summing the time every acquisition spent waiting.
///
/// Returns only after every worker has completed all of its iterations. A worker that
/// panics takes the caller down with it.
pub fn run<L: RawLock + ?Sized + 'static>(
    lock: Arc<L>,
    opts: &Options,
    ext_opts: &ExtendedOptions,
) -> BenchmarkResult {
    let Options { workers, iterations, hold } = *opts;
    let ExtendedOptions { debug_locks, debug_exits } = *ext_opts;

    // nanoseconds; u64 overflows only past ~584 years of accumulated waiting
    let total_wait = Arc::new(AtomicU64::default());
    let samples = Arc::new(AtomicU64::default());
    let start_barrier = Arc::new(Barrier::new(workers));

    let start_time = Instant::now();
    let worker_threads = (0..workers)
        .map(|i| {
            let lock = lock.clone();
            let total_wait = total_wait.clone();
            let samples = samples.clone();
            let start_barrier = start_barrier.clone();
            thread::spawn(move || {
                start_barrier.wait();
                for _ in 0..iterations {
                    let started = Instant::now();
                    lock.acquire();
                    let waited = started.elapsed();
                    total_wait.fetch_add(saturating_nanos(waited), Ordering::Relaxed);
                    samples.fetch_add(1, Ordering::Relaxed);
                    if debug_locks {
                        println!("worker {i} acquired after {waited:?}");
                    }

                    thread::sleep(hold);

                    lock.release();
                    if debug_locks {
                        println!("worker {i} released");
                    }
                }
                if debug_exits {
                    println!("worker {i} exited");
                }
            })
        })
        .collect::<Vec<_>>();

    worker_threads
        .into_iter()
        .map(JoinHandle::join)
        .for_each(Result::unwrap);
    let elapsed = Instant::now() - start_time;

    let samples = samples.load(Ordering::Relaxed);
    assert_eq!(workers as u64 * iterations, samples);
    BenchmarkResult {
        samples,
        total_wait: Duration::from_nanos(total_wait.load(Ordering::Relaxed)),
        elapsed,
    }
}

#[inline]
fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
