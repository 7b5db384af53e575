//! config.rs
//! Run configuration for one preparation pass.
//!
//! Defaults come from `constants.rs`. `validate()` is called by the pipeline
//! before any file is touched.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_KDF_ITERATIONS, DEFAULT_OUTPUT_ROOT, DEFAULT_SHARD_COUNT, MIN_RECOMMENDED_KDF_ITERATIONS,
};
use crate::types::PrepareError;

#[derive(Clone)]
pub struct PrepareConfig {
    /// Collection root holding `json/` and `images/`.
    pub collection_dir: PathBuf,
    /// Collection metadata CID. Output directory name and `reference` host.
    pub metadata_cid: String,
    /// Max records per artifact; `None` means one batch for the whole run.
    pub batch_size: Option<NonZeroUsize>,
    /// Number of backing metadata/media files.
    pub shard_count: u64,
    pub kdf_iterations: u32,
    pub passphrase: String,
    /// Parent of the `{cid}` output directory.
    pub output_root: PathBuf,
}

impl PrepareConfig {
    pub fn new(
        collection_dir: impl Into<PathBuf>,
        metadata_cid: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            collection_dir: collection_dir.into(),
            metadata_cid: metadata_cid.into(),
            batch_size: None,
            shard_count: DEFAULT_SHARD_COUNT,
            kdf_iterations: DEFAULT_KDF_ITERATIONS,
            passphrase: passphrase.into(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }

    pub fn with_batch_size(mut self, batch_size: Option<NonZeroUsize>) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_shard_count(mut self, shard_count: u64) -> Self {
        self.shard_count = shard_count;
        self
    }

    pub fn with_kdf_iterations(mut self, iterations: u32) -> Self {
        self.kdf_iterations = iterations;
        self
    }

    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    /// `{output_root}/{cid}`
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(&self.metadata_cid)
    }

    /// True when the round count is below the recommended floor.
    pub fn is_weak_kdf(&self) -> bool {
        self.kdf_iterations < MIN_RECOMMENDED_KDF_ITERATIONS
    }

    pub fn validate(&self) -> Result<(), PrepareError> {
        if self.metadata_cid.is_empty() {
            return Err(PrepareError::Config("metadata CID must not be empty".into()));
        }
        // The CID names a single directory under the output root.
        let mut components = Path::new(&self.metadata_cid).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(std::path::Component::Normal(_)), None)
        );
        if !single_normal {
            return Err(PrepareError::Config(format!(
                "metadata CID {:?} must be a single path component",
                self.metadata_cid
            )));
        }
        if self.shard_count == 0 {
            return Err(PrepareError::Config("shard count must be at least 1".into()));
        }
        if self.kdf_iterations == 0 {
            return Err(PrepareError::Config("KDF iteration count must be at least 1".into()));
        }
        if self.passphrase.is_empty() {
            return Err(PrepareError::Config("passphrase must not be empty".into()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for PrepareConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrepareConfig")
            .field("collection_dir", &self.collection_dir)
            .field("metadata_cid", &self.metadata_cid)
            .field("batch_size", &self.batch_size)
            .field("shard_count", &self.shard_count)
            .field("kdf_iterations", &self.kdf_iterations)
            .field("passphrase", &"<redacted>")
            .field("output_root", &self.output_root)
            .finish()
    }
}
