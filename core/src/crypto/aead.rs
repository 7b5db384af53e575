// ## 📂 File: `src/crypto/aead.rs`

//! src/crypto/aead.rs
//! AES-256-GCM seal/open.
//!
//! Design notes:
//! - 32-byte key, 12-byte nonce, 16-byte tag appended to the ciphertext.
//! - No associated data: the artifact framing carries salt and nonce in clear.
//! - Tag verification must fail closed (no partial plaintext).

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::crypto::nonce::validate_nonce_len;
use crate::crypto::types::{CryptoError, KEY_LEN_32, NONCE_LEN_12, TAG_LEN};

/// AES-256-GCM cipher bound to one run key.
#[derive(Clone)]
pub struct BatchCipher {
    cipher: Aes256Gcm,
}

impl BatchCipher {
    /// Build the cipher from a derived 32-byte key.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != KEY_LEN_32 {
            return Err(CryptoError::InvalidKeyLen {
                expected: KEY_LEN_32,
                actual: key.len(),
            });
        }
        let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        })?;
        Ok(Self { cipher })
    }

    /// Seal (encrypt) plaintext under nonce. Output is ciphertext || tag.
    pub fn seal(&self, nonce_12: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        validate_nonce_len(nonce_12.len()).map_err(|_| CryptoError::InvalidNonceLen {
            expected: NONCE_LEN_12,
            actual: nonce_12.len(),
        })?;

        self.cipher
            .encrypt(Nonce::from_slice(nonce_12), Payload { msg: plaintext, aad: &[] })
            .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))
    }

    /// Open (decrypt) ciphertext || tag under nonce.
    pub fn open(&self, nonce_12: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>, CryptoError> {
        validate_nonce_len(nonce_12.len()).map_err(|_| CryptoError::InvalidNonceLen {
            expected: NONCE_LEN_12,
            actual: nonce_12.len(),
        })?;

        if ciphertext_and_tag.len() < TAG_LEN {
            return Err(CryptoError::Failure("ciphertext too short".into()));
        }

        self.cipher
            .decrypt(Nonce::from_slice(nonce_12), Payload { msg: ciphertext_and_tag, aad: &[] })
            .map_err(|_| CryptoError::TagMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_appends_tag() {
        let cipher = BatchCipher::new(&[3u8; KEY_LEN_32]).unwrap();
        let ct = cipher.seal(&[1u8; NONCE_LEN_12], b"{}").unwrap();
        assert_eq!(ct.len(), 2 + TAG_LEN);
        assert_eq!(cipher.open(&[1u8; NONCE_LEN_12], &ct).unwrap(), b"{}");
    }

    #[test]
    fn empty_plaintext_is_tag_only() {
        let cipher = BatchCipher::new(&[3u8; KEY_LEN_32]).unwrap();
        let ct = cipher.seal(&[1u8; NONCE_LEN_12], b"").unwrap();
        assert_eq!(ct.len(), TAG_LEN);
        assert!(cipher.open(&[1u8; NONCE_LEN_12], &ct).unwrap().is_empty());
    }

    #[test]
    fn wrong_key_length_rejected() {
        assert!(matches!(
            BatchCipher::new(&[0u8; 16]),
            Err(CryptoError::InvalidKeyLen { expected: 32, actual: 16 })
        ));
    }

    #[test]
    fn wrong_nonce_length_rejected() {
        let cipher = BatchCipher::new(&[3u8; KEY_LEN_32]).unwrap();
        assert!(matches!(
            cipher.seal(&[0u8; 8], b"x"),
            Err(CryptoError::InvalidNonceLen { expected: 12, actual: 8 })
        ));
    }
}
