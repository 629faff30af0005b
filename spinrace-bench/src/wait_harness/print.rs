//! Printing of the results table.

use crate::lock_spec::LockSpec;
use crate::sweep::Row;
use crate::wait_harness::BenchmarkResult;
use std::fmt::{Display, Formatter};

/// Minimum width of every column; longer values overflow rather than truncate.
pub const COLUMN_WIDTH: usize = 12;

impl Display for BenchmarkResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.mean_wait() {
            Some(latency) => Display::fmt(&latency, f),
            None => f.pad("-"),
        }
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<COLUMN_WIDTH$}", self.workers)?;
        for result in &self.results {
            write!(f, " {:<COLUMN_WIDTH$}", result)?;
        }
        Ok(())
    }
}

pub struct Header<'a>(pub &'a [LockSpec]);

impl Display for Header<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<COLUMN_WIDTH$}", "Threads")?;
        for spec in self.0 {
            write!(f, " {:<COLUMN_WIDTH$}", spec.name)?;
        }
        Ok(())
    }
}
