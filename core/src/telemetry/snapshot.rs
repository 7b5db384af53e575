// ## src/telemetry/snapshot.rs

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::RunCounters;

/// Immutable end-of-run snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub tokens_processed: u64,
    pub batches_written: u64,
    pub bytes_plaintext: u64,
    pub bytes_artifact: u64,
    pub bytes_stored: u64,
    pub output_dir: PathBuf,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Freeze the counters at the end of a run.
    pub fn capture(counters: &RunCounters, output_dir: PathBuf, started: Instant) -> Self {
        Self {
            tokens_processed: counters.tokens_processed,
            batches_written: counters.batches_written,
            bytes_plaintext: counters.bytes_plaintext,
            bytes_artifact: counters.bytes_artifact,
            bytes_stored: counters.bytes_stored,
            output_dir,
            elapsed: started.elapsed(),
        }
    }

    /// Sealing overhead (salt, nonce and tag per batch) relative to plaintext.
    pub fn overhead_ratio(&self) -> f64 {
        if self.bytes_plaintext > 0 {
            (self.bytes_artifact.saturating_sub(self.bytes_plaintext)) as f64 / self.bytes_plaintext as f64
        } else {
            0.0
        }
    }
}
