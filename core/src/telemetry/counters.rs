// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters used during one preparation run.
//!
//! Summary: Collects token, batch and byte counts while the pipeline runs.
//! Converted into an immutable `RunSummary` at pipeline end.

use serde::{Deserialize, Serialize};

/// Deterministic counters collected during a run.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounters {
    pub tokens_processed: u64,
    pub batches_written: u64,
    /// Serialized batch JSON, before encryption.
    pub bytes_plaintext: u64,
    /// Raw artifact bytes (salt + nonce + ciphertext + tag), before base64.
    pub bytes_artifact: u64,
    /// Stored base64 text.
    pub bytes_stored: u64,
}

impl RunCounters {
    /// Record one token record accepted by the batcher.
    pub fn add_token(&mut self) {
        self.tokens_processed += 1;
    }

    /// Record one sealed and persisted batch.
    pub fn add_batch(&mut self, pt_len: usize, artifact_len: usize, stored_len: usize) {
        self.batches_written += 1;
        self.bytes_plaintext += pt_len as u64;
        self.bytes_artifact += artifact_len as u64;
        self.bytes_stored += stored_len as u64;
    }
}
