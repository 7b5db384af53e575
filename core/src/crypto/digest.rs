//! crypto/digest.rs
//! Content hashes carried in token records: base64(SHA-256(bytes)).

use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest as _, Sha256};

/// SHA-256 over `data`, base64-encoded with the standard padded alphabet.
#[inline]
pub fn sha256_base64(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    STANDARD.encode(digest)
}
