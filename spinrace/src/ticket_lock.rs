//! A fair spinlock that admits callers strictly in the order they arrive.

use crate::raw_lock::RawLock;
use crate::wait;
use std::sync::atomic::{AtomicU32, Ordering};

/// A ticket lock.
///
/// Each caller draws a ticket from `next_ticket` and polls `serving` until its number
/// comes up. Both counters are `u32` and wrap on overflow; since tickets are only ever
/// compared for equality, wrapping is harmless as long as fewer than 2<sup>32</sup>
/// callers are queued at once.
///
/// A holder that never releases leaves every other caller polling forever. There is no
/// timeout.
#[derive(Debug, Default)]
pub struct TicketLock {
    next_ticket: AtomicU32,
    serving: AtomicU32,
}

impl TicketLock {
    #[inline]
    pub const fn new() -> Self {
        Self {
            next_ticket: AtomicU32::new(0),
            serving: AtomicU32::new(0),
        }
    }

    #[cfg(test)]
    pub(crate) const fn starting_at(ticket: u32) -> Self {
        Self {
            next_ticket: AtomicU32::new(ticket),
            serving: AtomicU32::new(ticket),
        }
    }

    /// Number of tickets drawn but not yet released, the holder's included.
    #[inline]
    pub fn queued(&self) -> u32 {
        let serving = self.serving.load(Ordering::Relaxed);
        self.next_ticket.load(Ordering::Relaxed).wrapping_sub(serving)
    }
}

unsafe impl RawLock for TicketLock {
    #[inline]
    fn acquire(&self) {
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        while self.serving.load(Ordering::Acquire) != ticket {
            wait::relax();
        }
    }

    #[inline]
    fn try_acquire(&self) -> bool {
        // only succeeds when nobody holds or awaits the lock
        let serving = self.serving.load(Ordering::Acquire);
        self.next_ticket
            .compare_exchange(serving, serving.wrapping_add(1), Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    #[inline]
    fn release(&self) {
        self.serving.fetch_add(1, Ordering::Release);
    }
}
