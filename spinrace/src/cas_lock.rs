//! An unfair spinlock: whichever caller wins the compare-and-swap takes the lock.

use crate::raw_lock::RawLock;
use crate::wait;
use std::sync::atomic::{AtomicBool, Ordering};

/// A compare-and-swap lock.
///
/// Waiters are not queued, so acquisition order is unspecified; a late arrival can
/// overtake a caller that has been polling for much longer. As with
/// [`crate::ticket_lock::TicketLock`], there is no timeout.
#[derive(Debug, Default)]
pub struct CasLock {
    locked: AtomicBool,
}

impl CasLock {
    #[inline]
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

unsafe impl RawLock for CasLock {
    #[inline]
    fn acquire(&self) {
        while !self.try_acquire() {
            wait::relax();
        }
    }

    #[inline]
    fn try_acquire(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    #[inline]
    fn release(&self) {
        self.locked.store(false, Ordering::Release);
    }
}
