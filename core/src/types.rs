use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use thiserror::Error;

use crate::crypto::CryptoError;

/// Normalized per-token metadata, as revealed on chain.
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct TokenRecord {
    pub title: String,
    pub description: String,
    pub media: String,
    pub media_hash: String,
    pub reference: String,
    pub reference_hash: String,
}

/// Ordered token id -> record mapping. Serializes as a JSON object in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    entries: Vec<(String, TokenRecord)>,
    ids: HashSet<String>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, token_id: &str) -> bool {
        self.ids.contains(token_id)
    }

    /// Append a record. Token ids are unique within a batch.
    pub fn insert(&mut self, token_id: String, record: TokenRecord) -> Result<(), PrepareError> {
        if !self.ids.insert(token_id.clone()) {
            return Err(PrepareError::DuplicateToken(token_id));
        }
        self.entries.push((token_id, record));
        Ok(())
    }

    pub fn token_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenRecord)> {
        self.entries.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Compact JSON object, keys in insertion order.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, PrepareError> {
        serde_json::to_vec(self).map_err(PrepareError::Serialize)
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Serialize for Batch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, record) in &self.entries {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

/// Batch handed out by the batcher on flush.
#[derive(Debug, Clone, PartialEq)]
pub struct FlushedBatch {
    /// Zero-based, gap-free flush sequence number.
    pub index: u64,
    pub batch: Batch,
}

/// Unified pipeline error. Every variant is fatal for the run.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to list token ids in {path}: {source}")]
    ListTokens {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("token id {0:?} is not a non-negative integer")]
    InvalidTokenId(String),

    #[error("token id {0:?} appears twice in one batch")]
    DuplicateToken(String),

    #[error("failed to read metadata {path}: {source}")]
    MetadataRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed metadata {path}: {source}")]
    MalformedMetadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read media {path}: {source}")]
    MediaRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize batch: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("failed to write output {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
