use parking_lot::lock_api::RawMutex as _;
use spinrace::cas_lock::CasLock;
use spinrace::raw_lock::RawLock;
use spinrace::ticket_lock::TicketLock;
use std::sync::Arc;

/// A named lock variant that the sweep constructs afresh for every run.
#[derive(Debug, Clone, Copy)]
pub struct LockSpec {
    pub name: &'static str,
    pub new: fn() -> Arc<dyn RawLock>,
}

impl LockSpec {
    pub const fn of<L: RawLock + Default + 'static>(name: &'static str) -> Self {
        Self {
            name,
            new: new_arc::<L>,
        }
    }
}

fn new_arc<L: RawLock + Default + 'static>() -> Arc<dyn RawLock> {
    Arc::new(L::default())
}

pub const TICKET: LockSpec = LockSpec::of::<TicketLock>("TicketLock");

pub const CAS: LockSpec = LockSpec::of::<CasLock>("CASLock");

/// The variants the benchmark compares, in column order.
pub const CONTENDERS: [LockSpec; 2] = [TICKET, CAS];

/// [`parking_lot::RawMutex`] behind the [`RawLock`] interface. Parks rather than
/// spins, so it serves as a reference point rather than a contender.
pub struct ParkingMutex(parking_lot::RawMutex);

impl Default for ParkingMutex {
    fn default() -> Self {
        Self(parking_lot::RawMutex::INIT)
    }
}

unsafe impl RawLock for ParkingMutex {
    #[inline]
    fn acquire(&self) {
        self.0.lock();
    }

    #[inline]
    fn try_acquire(&self) -> bool {
        self.0.try_lock()
    }

    #[inline]
    fn release(&self) {
        // only the holder releases, as RawLock requires
        unsafe { self.0.unlock() }
    }
}

pub const PARKING: LockSpec = LockSpec::of::<ParkingMutex>("parking_lot");

#[cfg(test)]
mod tests;
