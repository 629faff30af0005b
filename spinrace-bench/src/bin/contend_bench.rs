use spinrace_bench::lock_spec::CONTENDERS;
use spinrace_bench::sweep;
use spinrace_bench::wait_harness::print::Header;
use spinrace_bench::wait_harness::ExtendedOptions;
use std::time::Duration;

const ITERATIONS: u64 = 1_000;

const LEVELS: [usize; 5] = [2, 5, 10, 20, 50];

/// Time spent inside the critical section on every iteration.
const HOLD: Duration = Duration::from_micros(1);

fn main() {
    let ext_opts = ExtendedOptions {
        // stick your overrides here
        ..ExtendedOptions::default()
    };
    println!("{}", Header(&CONTENDERS));
    sweep::sweep(&LEVELS, ITERATIONS, HOLD, &CONTENDERS, &ext_opts, |row| {
        println!("{row}");
    });
}
