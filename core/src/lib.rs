//! reveal-core
//!
//! Prepares encrypted per-token NFT metadata batches for a delayed reveal.
//! Builds token records from a collection, groups them into numbered
//! batches, and seals each batch with AES-256-GCM under a PBKDF2-derived key.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

pub mod crypto;
pub mod artifact;
pub mod stores;
pub mod telemetry;

// Pipeline stages
pub mod record;
pub mod batcher;
pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::batcher::Batcher;
    pub use crate::config::PrepareConfig;
    pub use crate::crypto::{open_artifact, Encryptor, KeyMaterial};
    pub use crate::pipeline::{run_pipeline, run_prepare};
    pub use crate::record::RecordBuilder;
    pub use crate::stores::{BatchStore, FsBatchStore, FsCollection, MediaStore, MetadataStore};
    pub use crate::telemetry::RunSummary;
    pub use crate::types::{Batch, FlushedBatch, PrepareError, TokenRecord};
}
