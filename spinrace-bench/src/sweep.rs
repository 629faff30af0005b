use crate::lock_spec::LockSpec;
use crate::wait_harness;
use crate::wait_harness::{BenchmarkResult, ExtendedOptions, Options};
use std::time::Duration;

/// Results for one concurrency level, one per contender in contender order.
#[derive(Debug)]
pub struct Row {
    pub workers: usize,
    pub results: Vec<BenchmarkResult>,
}

/// Benchmarks every contender at each level in `levels`, in the given order, handing
/// each [`Row`] to `on_row` as soon as it completes.
///
/// Every run gets a freshly constructed lock, and each run is joined before the next
/// one starts.
pub fn sweep<F: FnMut(Row)>(
    levels: &[usize],
    iterations: u64,
    hold: Duration,
    contenders: &[LockSpec],
    ext_opts: &ExtendedOptions,
    mut on_row: F,
) {
    for &workers in levels {
        let opts = Options {
            workers,
            iterations,
            hold,
        };
        let results = contenders
            .iter()
            .map(|spec| {
                if ext_opts.debug_exits {
                    println!("running {} with {workers} workers", spec.name);
                }
                wait_harness::run((spec.new)(), &opts, ext_opts)
            })
            .collect();
        on_row(Row { workers, results });
    }
}
