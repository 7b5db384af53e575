//! record.rs
//! Token record construction.
//!
//! Design notes:
//! - Token `t` reads the backing shard `t % shard_count` from both stores.
//! - `reference_hash` is taken over the metadata bytes as stored, not the
//!   re-serialized JSON.
//! - The media rewrite is a literal substring replacement of `ipfs:/`.

use serde::Deserialize;
use tracing::debug;

use crate::constants::{IPFS_GATEWAY_PREFIX, IPFS_SCHEME_PREFIX};
use crate::crypto::sha256_base64;
use crate::stores::{MediaStore, MetadataStore};
use crate::types::{PrepareError, TokenRecord};

/// Fields read from a metadata file. Anything else in the file is ignored.
#[derive(Debug, Deserialize)]
struct SourceMetadata {
    name: String,
    description: String,
    image: String,
}

/// Replace every `ipfs:/` with the public gateway prefix.
/// `ipfs:/abc` becomes `https://ipfs.io/ipfsabc`; `ipfs://cid/x` becomes
/// `https://ipfs.io/ipfs/cid/x`.
#[inline]
pub fn rewrite_media_uri(image: &str) -> String {
    image.replace(IPFS_SCHEME_PREFIX, IPFS_GATEWAY_PREFIX)
}

/// Parse a decimal token id.
pub fn parse_token_id(token_id: &str) -> Result<u64, PrepareError> {
    if token_id.is_empty() || !token_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PrepareError::InvalidTokenId(token_id.to_owned()));
    }
    token_id
        .parse::<u64>()
        .map_err(|_| PrepareError::InvalidTokenId(token_id.to_owned()))
}

/// Backing shard for a token id.
#[inline]
pub fn shard_index(token_id: u64, shard_count: u64) -> u64 {
    token_id % shard_count
}

/// Builds one `TokenRecord` per token id from the two input stores.
pub struct RecordBuilder<'a, M: ?Sized, I: ?Sized> {
    metadata: &'a M,
    media: &'a I,
    metadata_cid: &'a str,
    shard_count: u64,
}

impl<'a, M, I> RecordBuilder<'a, M, I>
where
    M: MetadataStore + ?Sized,
    I: MediaStore + ?Sized,
{
    pub fn new(metadata: &'a M, media: &'a I, metadata_cid: &'a str, shard_count: u64) -> Self {
        Self { metadata, media, metadata_cid, shard_count }
    }

    pub fn build(&self, token_id: &str) -> Result<TokenRecord, PrepareError> {
        if self.shard_count == 0 {
            return Err(PrepareError::Config("shard count must be at least 1".into()));
        }
        let shard = shard_index(parse_token_id(token_id)?, self.shard_count);

        let meta_blob = self.metadata.read_metadata(shard)?;
        let media_blob = self.media.read_media(shard)?;

        let source: SourceMetadata = serde_json::from_slice(&meta_blob.bytes).map_err(|source| {
            PrepareError::MalformedMetadata { path: meta_blob.location.clone(), source }
        })?;

        debug!(token_id, shard, "built token record");

        Ok(TokenRecord {
            title: source.name,
            description: source.description,
            media: rewrite_media_uri(&source.image),
            media_hash: sha256_base64(&media_blob.bytes),
            reference: format!("ipfs://{}/{}", self.metadata_cid, shard),
            reference_hash: sha256_base64(&meta_blob.bytes),
        })
    }
}
