use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use crate::stores::{BatchStore, MediaStore, MetadataStore, StoredBlob};
use crate::types::PrepareError;

/// In-memory collection. Token ids are served in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    token_ids: Vec<String>,
    metadata: BTreeMap<u64, Vec<u8>>,
    media: BTreeMap<u64, Vec<u8>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_token(&mut self, token_id: impl Into<String>) -> &mut Self {
        self.token_ids.push(token_id.into());
        self
    }

    pub fn put_shard(&mut self, shard: u64, metadata: impl Into<Vec<u8>>, media: impl Into<Vec<u8>>) -> &mut Self {
        self.metadata.insert(shard, metadata.into());
        self.media.insert(shard, media.into());
        self
    }
}

fn not_found(what: &str, shard: u64) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("no {} for shard {}", what, shard))
}

impl MetadataStore for MemoryCollection {
    fn token_ids(&self) -> Result<Vec<String>, PrepareError> {
        Ok(self.token_ids.clone())
    }

    fn read_metadata(&self, shard: u64) -> Result<StoredBlob, PrepareError> {
        let location = PathBuf::from(format!("memory://json/{}", shard));
        match self.metadata.get(&shard) {
            Some(bytes) => Ok(StoredBlob { location, bytes: bytes.clone() }),
            None => Err(PrepareError::MetadataRead { path: location, source: not_found("metadata", shard) }),
        }
    }
}

impl MediaStore for MemoryCollection {
    fn read_media(&self, shard: u64) -> Result<StoredBlob, PrepareError> {
        let location = PathBuf::from(format!("memory://images/{}", shard));
        match self.media.get(&shard) {
            Some(bytes) => Ok(StoredBlob { location, bytes: bytes.clone() }),
            None => Err(PrepareError::MediaRead { path: location, source: not_found("media", shard) }),
        }
    }
}

/// Collects artifacts in memory, indexed by batch number.
#[derive(Debug, Clone, Default)]
pub struct MemoryBatchStore {
    artifacts: BTreeMap<u64, String>,
}

impl MemoryBatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifacts(&self) -> &BTreeMap<u64, String> {
        &self.artifacts
    }

    pub fn into_artifacts(self) -> BTreeMap<u64, String> {
        self.artifacts
    }
}

impl BatchStore for MemoryBatchStore {
    fn reset(&mut self) -> Result<(), PrepareError> {
        self.artifacts.clear();
        Ok(())
    }

    fn write_batch(&mut self, index: u64, artifact_text: &str) -> Result<(), PrepareError> {
        if self.artifacts.contains_key(&index) {
            return Err(PrepareError::Output {
                path: PathBuf::from(format!("memory://{}", index)),
                source: io::Error::new(io::ErrorKind::AlreadyExists, "artifact already written"),
            });
        }
        self.artifacts.insert(index, artifact_text.to_owned());
        Ok(())
    }
}
