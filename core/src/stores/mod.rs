//! stores/mod.rs
//! Input and output collaborators of the pipeline.
//!
//! Design notes:
//! - `MetadataStore` enumerates token ids and serves raw metadata bytes per shard.
//! - `MediaStore` serves raw media bytes per shard.
//! - `BatchStore` receives one artifact text per flushed batch, write-once.
//! - Filesystem implementations live in `fs.rs`; in-memory ones in `memory.rs`.

use std::path::PathBuf;

use crate::types::PrepareError;

pub mod fs;
pub mod memory;

pub use fs::*;
pub use memory::*;

/// Raw bytes plus where they came from (for error context).
#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub location: PathBuf,
    pub bytes: Vec<u8>,
}

pub trait MetadataStore {
    /// Every token id in the store, in processing order.
    fn token_ids(&self) -> Result<Vec<String>, PrepareError>;

    /// Raw metadata file for a shard, exactly as stored.
    fn read_metadata(&self, shard: u64) -> Result<StoredBlob, PrepareError>;
}

pub trait MediaStore {
    /// Raw media blob for a shard.
    fn read_media(&self, shard: u64) -> Result<StoredBlob, PrepareError>;
}

pub trait BatchStore {
    /// Drop anything from a previous run and prepare an empty destination.
    fn reset(&mut self) -> Result<(), PrepareError>;

    /// Persist the artifact for batch `index`.
    fn write_batch(&mut self, index: u64, artifact_text: &str) -> Result<(), PrepareError>;
}
