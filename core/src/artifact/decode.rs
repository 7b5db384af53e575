// ## 📂 File: `src/artifact/decode.rs`
//! src/artifact/decode.rs
//!
//! Artifact decoding.
//!
//! Design notes:
//! - Field order must match `encode.rs`.
//! - Surrounding ASCII whitespace is ignored so hand-copied artifacts still parse.
//! - Only framing is checked here; authenticity is checked by the AEAD open.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::artifact::types::{Artifact, ArtifactError};
use crate::crypto::types::{NONCE_LEN_12, SALT_LEN_16};

/// Split a raw buffer into salt, nonce and ciphertext+tag.
pub fn decode_artifact_bytes(buf: &[u8]) -> Result<Artifact, ArtifactError> {
    if buf.len() < Artifact::MIN_LEN {
        return Err(ArtifactError::BufferTooShort { have: buf.len(), need: Artifact::MIN_LEN });
    }

    let mut salt = [0u8; SALT_LEN_16];
    salt.copy_from_slice(&buf[..SALT_LEN_16]);

    let mut nonce = [0u8; NONCE_LEN_12];
    nonce.copy_from_slice(&buf[SALT_LEN_16..Artifact::PREFIX_LEN]);

    Ok(Artifact {
        salt,
        nonce,
        ciphertext: buf[Artifact::PREFIX_LEN..].to_vec(),
    })
}

/// Decode stored artifact text.
pub fn decode_artifact(text: &str) -> Result<Artifact, ArtifactError> {
    let raw = STANDARD.decode(text.trim())?;
    decode_artifact_bytes(&raw)
}
