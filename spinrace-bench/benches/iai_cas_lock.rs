use iai::{black_box, main};
use spinrace::cas_lock::CasLock;
use spinrace::raw_lock::RawLock;

fn acquire_release() {
    let lock = CasLock::new();
    lock.acquire();
    lock.release();
    black_box(lock);
}

main!(acquire_release);
