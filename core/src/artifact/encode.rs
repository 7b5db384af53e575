//! src/artifact/encode.rs
//!
//! Artifact encoding.
//!
//! Design notes:
//! - Field order must match `decode.rs` exactly.
//! - Output text is the standard padded base64 alphabet, no trailing newline.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::artifact::types::Artifact;

/// Concatenate `salt || nonce || ciphertext+tag`.
pub fn encode_artifact_bytes(artifact: &Artifact) -> Vec<u8> {
    let mut wire = Vec::with_capacity(artifact.wire_len());
    wire.extend_from_slice(&artifact.salt);       // 0..16  salt
    wire.extend_from_slice(&artifact.nonce);      // 16..28 nonce
    wire.extend_from_slice(&artifact.ciphertext); // 28..   ciphertext + tag

    debug_assert_eq!(wire.len(), artifact.wire_len());
    wire
}

/// Encode an artifact into its stored text form.
#[inline]
pub fn encode_artifact(artifact: &Artifact) -> String {
    STANDARD.encode(encode_artifact_bytes(artifact))
}
