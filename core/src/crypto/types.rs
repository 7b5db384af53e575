// ## 📂 File: `src/crypto/types.rs`

use std::fmt;

/// AES-256 key length.
pub const KEY_LEN_32: usize = 32;

/// PBKDF2 salt length, generated once per run.
pub const SALT_LEN_16: usize = 16;

/// AES-GCM nonce length.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

#[derive(Debug)]
pub enum NonceError {
    /// Salt is invalid (e.g., all zeros).
    InvalidSalt,

    /// Requested nonce length is unsupported.
    InvalidNonceLen { requested: usize, supported: usize },
}

impl fmt::Display for NonceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonceError::InvalidSalt => write!(f, "invalid salt: all zeros"),
            NonceError::InvalidNonceLen { requested, supported } =>
                write!(f, "invalid nonce length: requested={}, supported={}", requested, supported),
        }
    }
}

impl std::error::Error for NonceError {}

#[derive(Debug)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Nonce length mismatch (must be 12 bytes for AES-GCM).
    InvalidNonceLen { expected: usize, actual: usize },

    /// Salt length mismatch (must be 16 bytes).
    InvalidSaltLen { expected: usize, actual: usize },

    /// PBKDF2 round count of zero.
    InvalidIterations,

    /// AEAD tag mismatch (authentication failure).
    TagMismatch,

    /// General derivation or runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidNonceLen { expected, actual } =>
                write!(f, "invalid nonce length: expected={}, actual={}", expected, actual),
            InvalidSaltLen { expected, actual } =>
                write!(f, "invalid salt length: expected={}, actual={}", expected, actual),
            InvalidIterations =>
                write!(f, "PBKDF2 iteration count must be at least 1"),
            TagMismatch =>
                write!(f, "AEAD tag mismatch"),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}

impl From<NonceError> for CryptoError {
    fn from(e: NonceError) -> Self {
        CryptoError::Failure(e.to_string())
    }
}
