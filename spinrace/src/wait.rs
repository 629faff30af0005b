use crate::deadline::Deadline;
use std::time::Duration;
use std::{hint, thread};

pub type WaitResult = Result<(), ()>;

/// One pause between polls of a busy-wait loop: a spin hint followed by a voluntary
/// yield, so other runnable threads still make progress while the caller waits.
#[inline(always)]
pub fn relax() {
    hint::spin_loop();
    thread::yield_now();
}

pub trait Wait {
    fn wait_until<C>(condition: C, deadline: Deadline) -> WaitResult
    where
        C: FnMut() -> bool;

    #[inline(always)]
    fn wait_for<C>(condition: C, duration: Duration) -> WaitResult
    where
        C: FnMut() -> bool,
    {
        Self::wait_until(condition, Deadline::after(duration))
    }
}

/// Polls the condition, calling [`relax`] between attempts, until it holds or the
/// deadline passes.
pub struct Yield {}

impl Wait for Yield {
    #[inline(always)]
    fn wait_until<C>(mut condition: C, deadline: Deadline) -> WaitResult
    where
        C: FnMut() -> bool,
    {
        while !condition() {
            if deadline.is_elapsed() {
                return Err(());
            }
            relax();
        }
        Ok(())
    }
}
