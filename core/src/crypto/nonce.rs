// ## 📂 File: `src/crypto/nonce.rs`

//! crypto/nonce.rs
//! Random per-batch nonce generation and salt validation.
//!
//! Design:
//! - All batches of a run share one key, so each batch draws a fresh random
//!   12-byte nonce from the OS RNG. No counter state is kept between batches.
//!
//! Security notes:
//! - 96-bit random nonces under one key are safe well past any realistic
//!   collection size (birthday bound ~2^48 messages).
//! - Do not use all-zero salts.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::{NonceError, NONCE_LEN_12};

/// Draw a fresh 12-byte AES-GCM nonce from the OS RNG.
#[inline]
pub fn random_nonce_12() -> [u8; NONCE_LEN_12] {
    let mut nonce = [0u8; NONCE_LEN_12];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Summary: Validate that salt is not all zeros.
/// Returns Ok(()) if valid; Err(NonceError) otherwise.
#[inline]
pub fn validate_salt(salt: &[u8; 16]) -> Result<(), NonceError> {
    if salt.iter().all(|&b| b == 0) {
        return Err(NonceError::InvalidSalt);
    }
    Ok(())
}

/// Summary: Validate a nonce slice length.
/// Only 12-byte nonces are supported.
#[inline]
pub fn validate_nonce_len(nonce_len: usize) -> Result<(), NonceError> {
    if nonce_len != NONCE_LEN_12 {
        return Err(NonceError::InvalidNonceLen { requested: nonce_len, supported: NONCE_LEN_12 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_nonces_differ() {
        assert_ne!(random_nonce_12(), random_nonce_12());
    }

    #[test]
    fn zero_salt_rejected() {
        assert!(validate_salt(&[0u8; 16]).is_err());
        assert!(validate_salt(&[0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).is_ok());
    }

    #[test]
    fn only_twelve_byte_nonces() {
        assert!(validate_nonce_len(12).is_ok());
        assert!(validate_nonce_len(24).is_err());
    }
}
