pub mod latency;
pub mod lock_spec;
pub mod sweep;
pub mod wait_harness;
