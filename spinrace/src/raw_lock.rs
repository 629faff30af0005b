//! The acquire/release capability shared by every lock variant.

/// A lock that guards no data of its own; it only arbitrates ownership between callers.
///
/// The trait is object-safe, so heterogeneous variants can be driven through
/// `Arc<dyn RawLock>`.
///
/// # Safety
///
/// Implementations must guarantee exclusivity: once [`RawLock::acquire`] returns (or
/// [`RawLock::try_acquire`] returns `true`), no other caller can acquire the lock until
/// the holder calls [`RawLock::release`]. [`crate::lock::Lock`] relies on this to hand
/// out `&mut T`.
pub unsafe trait RawLock: Send + Sync {
    /// Blocks, polling, until the caller holds the lock.
    fn acquire(&self);

    /// Takes the lock only if that can be done without waiting.
    fn try_acquire(&self) -> bool;

    /// Gives up the lock. Must only be called by the current holder.
    fn release(&self);
}
