//! constants.rs
//! Defaults and fixed sizes shared across the pipeline.

/// Number of backing metadata/media files a collection is sharded over.
/// Token `t` resolves to shard `t % DEFAULT_SHARD_COUNT` unless configured.
pub const DEFAULT_SHARD_COUNT: u64 = 9;

/// PBKDF2-HMAC-SHA256 rounds used when the caller does not choose.
pub const DEFAULT_KDF_ITERATIONS: u32 = 100_000;

/// Below this the run still proceeds, with a warning.
pub const MIN_RECOMMENDED_KDF_ITERATIONS: u32 = 100_000;

/// Round count used by collections prepared before iterations were configurable.
pub const LEGACY_KDF_ITERATIONS: u32 = 1;

/// Root directory under which `{cid}/` is created.
pub const DEFAULT_OUTPUT_ROOT: &str = "output";

/// Collection layout.
pub const METADATA_DIR: &str = "json";
pub const MEDIA_DIR: &str = "images";
pub const MEDIA_EXT: &str = "png";

/// Media URI rewrite (literal prefix substitution).
pub const IPFS_SCHEME_PREFIX: &str = "ipfs:/";
pub const IPFS_GATEWAY_PREFIX: &str = "https://ipfs.io/ipfs";
