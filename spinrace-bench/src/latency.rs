use std::fmt::{Display, Formatter};
use std::time::Duration;

/// A wait time, displayed in whichever of ns, µs, ms or s reads best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Latency(pub Duration);

impl Latency {
    /// The arithmetic mean of `samples` waits adding up to `total`, or `None` if there
    /// were no samples.
    pub fn mean(total: Duration, samples: u64) -> Option<Latency> {
        if samples == 0 {
            return None;
        }
        let nanos = total.as_nanos() / samples as u128;
        Some(Latency(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))))
    }

    pub fn ns(&self) -> f64 {
        self.0.as_nanos() as f64
    }

    pub fn us(&self) -> f64 {
        self.ns() / 1_000.0
    }

    pub fn ms(&self) -> f64 {
        self.ns() / 1_000_000.0
    }
}

impl Display for Latency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let unaligned = {
            if f.alternate() {
                format!("{:.3}µs", self.us())
            } else {
                match self.ns() {
                    val if val < 1_000.0 => format!("{}ns", self.0.as_nanos()),
                    val if val < 1_000_000.0 => format!("{:.3}µs", self.us()),
                    val if val < 1_000_000_000.0 => format!("{:.3}ms", self.ms()),
                    _ => format!("{:.3}s", self.0.as_secs_f64()),
                }
            }
        };
        f.pad(&unaligned)
    }
}
