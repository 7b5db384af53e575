//! telemetry/mod.rs
//! Run counters and the immutable end-of-run summary.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
