use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    Point(Instant),
    Forever,
}

impl Deadline {
    /// A deadline `duration` from now. Durations too large to represent as an
    /// [`Instant`] never elapse.
    #[inline(always)]
    pub fn after(duration: Duration) -> Self {
        match Instant::now().checked_add(duration) {
            None => Deadline::Forever,
            Some(instant) => Deadline::Point(instant),
        }
    }

    #[inline(always)]
    pub fn remaining(&self) -> Duration {
        match self {
            Deadline::Point(instant) => instant.saturating_duration_since(Instant::now()),
            Deadline::Forever => Duration::MAX,
        }
    }

    #[inline(always)]
    pub fn is_elapsed(&self) -> bool {
        self.remaining().is_zero()
    }
}
