// ## 📂 File: `src/artifact/types.rs`

use std::fmt;

use crate::crypto::types::{NONCE_LEN_12, SALT_LEN_16, TAG_LEN};

/// One sealed batch as stored on disk (before base64).
///
/// Layout:
///
/// ```text
/// [ salt          (16) ]
/// [ nonce         (12) ]
/// [ ciphertext    (N)  ]
/// [ tag           (16) ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub salt: [u8; SALT_LEN_16],
    pub nonce: [u8; NONCE_LEN_12],
    /// Ciphertext with the 16-byte GCM tag appended.
    pub ciphertext: Vec<u8>,
}

impl Artifact {
    /// Bytes before the ciphertext.
    pub const PREFIX_LEN: usize = SALT_LEN_16 + NONCE_LEN_12;

    /// Smallest well-formed artifact: prefix plus a bare tag.
    pub const MIN_LEN: usize = Self::PREFIX_LEN + TAG_LEN;

    /// Raw (pre-base64) length.
    #[inline]
    pub fn wire_len(&self) -> usize {
        Self::PREFIX_LEN + self.ciphertext.len()
    }
}

#[derive(Debug)]
pub enum ArtifactError {
    /// Stored text is not valid standard base64.
    Base64(base64::DecodeError),

    /// Decoded buffer cannot hold salt, nonce and tag.
    BufferTooShort { have: usize, need: usize },
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Base64(e) => write!(f, "artifact is not valid base64: {}", e),
            ArtifactError::BufferTooShort { have, need } =>
                write!(f, "artifact too short: have={}, need={}", have, need),
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArtifactError::Base64(e) => Some(e),
            ArtifactError::BufferTooShort { .. } => None,
        }
    }
}

impl From<base64::DecodeError> for ArtifactError {
    fn from(e: base64::DecodeError) -> Self {
        ArtifactError::Base64(e)
    }
}
