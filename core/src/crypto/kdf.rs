// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! PBKDF2-HMAC-SHA256 key derivation from a passphrase and a per-run salt.
//!
//! Design:
//! - One random 16-byte salt per run, one 32-byte AES-256 key per run.
//! - Every batch of the run is sealed under the same key; nonces are per batch.
//! - The salt travels in front of every artifact so a reader can re-derive.
//!
//! Notes:
//! - Round count is caller-chosen. Collections prepared with the legacy
//!   single round remain readable by passing `LEGACY_KDF_ITERATIONS`.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::crypto::nonce::validate_salt;
use crate::crypto::types::{CryptoError, KEY_LEN_32, SALT_LEN_16};

/// Salt and derived key for one run. Read-only after derivation.
#[derive(Clone)]
pub struct KeyMaterial {
    salt: [u8; SALT_LEN_16],
    key: [u8; KEY_LEN_32],
}

impl KeyMaterial {
    /// Derive key material with a fresh random salt.
    pub fn generate(passphrase: &[u8], iterations: u32) -> Result<Self, CryptoError> {
        let mut salt = [0u8; SALT_LEN_16];
        loop {
            OsRng.fill_bytes(&mut salt);
            if validate_salt(&salt).is_ok() {
                break;
            }
        }
        Self::derive(passphrase, salt, iterations)
    }

    /// Re-derive key material from a known salt (e.g. one read back from an artifact).
    pub fn derive(
        passphrase: &[u8],
        salt: [u8; SALT_LEN_16],
        iterations: u32,
    ) -> Result<Self, CryptoError> {
        let key = derive_key_32(passphrase, &salt, iterations)?;
        Ok(Self { salt, key })
    }

    #[inline]
    pub fn salt(&self) -> &[u8; SALT_LEN_16] {
        &self.salt
    }

    #[inline]
    pub fn key(&self) -> &[u8; KEY_LEN_32] {
        &self.key
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("salt", &self.salt)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Summary: PBKDF2-HMAC-SHA256 into a 32-byte key.
///
/// Errors:
/// - `iterations == 0` returns `CryptoError::InvalidIterations`.
/// - Salt length other than 16 returns `CryptoError::InvalidSaltLen`.
#[inline]
pub fn derive_key_32(
    passphrase: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<[u8; KEY_LEN_32], CryptoError> {
    if iterations == 0 {
        return Err(CryptoError::InvalidIterations);
    }
    if salt.len() != SALT_LEN_16 {
        return Err(CryptoError::InvalidSaltLen {
            expected: SALT_LEN_16,
            actual: salt.len(),
        });
    }

    let mut key = [0u8; KEY_LEN_32];
    pbkdf2_hmac::<Sha256>(passphrase, salt, iterations, &mut key);
    Ok(key)
}
