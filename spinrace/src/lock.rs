use crate::raw_lock::RawLock;
use std::cell::UnsafeCell;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::fmt;

unsafe impl<L: RawLock, T: ?Sized + Send> Send for Lock<L, T> {}
unsafe impl<L: RawLock, T: ?Sized + Send> Sync for Lock<L, T> {}
unsafe impl<L: RawLock, T: ?Sized + Sync> Sync for LockGuard<'_, L, T> {}

/// Pairs a [`RawLock`] with the data it protects.
///
/// The raw lock is private to the wrapper, so it can only be released by dropping a
/// [`LockGuard`].
pub struct Lock<L: RawLock, T: ?Sized> {
    raw: L,
    data: UnsafeCell<T>,
}

pub struct LockGuard<'a, L: RawLock, T: ?Sized> {
    lock: &'a Lock<L, T>,
    /// Emulates !Send for the struct. (Until issue 68318 -- negative trait bounds -- is resolved.)
    __no_send: PhantomData<*const ()>,
}

impl<L: RawLock + Default, T> Lock<L, T> {
    #[inline]
    pub fn new(t: T) -> Self {
        Self::with_raw(L::default(), t)
    }
}

impl<L: RawLock, T> Lock<L, T> {
    #[inline]
    pub fn with_raw(raw: L, t: T) -> Self {
        Self {
            raw,
            data: UnsafeCell::new(t),
        }
    }

    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

impl<L: RawLock, T: ?Sized> Lock<L, T> {
    #[inline]
    pub fn lock(&self) -> LockGuard<L, T> {
        self.raw.acquire();
        LockGuard {
            lock: self,
            __no_send: PhantomData,
        }
    }

    #[inline]
    pub fn try_lock(&self) -> Option<LockGuard<L, T>> {
        if self.raw.try_acquire() {
            Some(LockGuard {
                lock: self,
                __no_send: PhantomData,
            })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the underlying data.
    ///
    /// Since this call borrows the [`Lock`] mutably, no actual locking needs to
    /// take place---the mutable borrow statically guarantees no locks exist.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }
}

impl<L: RawLock, T: ?Sized> Drop for LockGuard<'_, L, T> {
    #[inline]
    fn drop(&mut self) {
        self.lock.raw.release();
    }
}

impl<L: RawLock, T: ?Sized> Deref for LockGuard<'_, L, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { &*self.lock.data.get() }
    }
}

impl<L: RawLock, T: ?Sized> DerefMut for LockGuard<'_, L, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<L: RawLock, T: ?Sized + Debug> Debug for Lock<L, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Lock");
        match self.try_lock() {
            Some(guard) => {
                d.field("data", &&*guard);
            }
            None => {
                d.field("data", &format_args!("<locked>"));
            }
        }
        d.finish_non_exhaustive()
    }
}

impl<L: RawLock, T: ?Sized + Debug> Debug for LockGuard<'_, L, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&**self, f)
    }
}
