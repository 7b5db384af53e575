//! crypto/seal.rs
//! Batch sealing: plaintext -> framed artifact, and the inverse.
//!
//! Design notes:
//! - One `Encryptor` per run. It owns the run's `KeyMaterial` and cipher.
//! - Every sealed artifact repeats the run salt so it can be opened alone.

use crate::artifact::{decode_artifact, Artifact, ArtifactError};
use crate::crypto::aead::BatchCipher;
use crate::crypto::kdf::KeyMaterial;
use crate::crypto::nonce::{random_nonce_12, validate_salt};
use crate::crypto::types::CryptoError;

/// Seals batch plaintexts under the run key.
pub struct Encryptor {
    material: KeyMaterial,
    cipher: BatchCipher,
}

impl Encryptor {
    /// Derive fresh run key material from the passphrase.
    pub fn new(passphrase: &[u8], iterations: u32) -> Result<Self, CryptoError> {
        Self::from_material(KeyMaterial::generate(passphrase, iterations)?)
    }

    /// Seal under existing key material. An all-zero salt is refused.
    pub fn from_material(material: KeyMaterial) -> Result<Self, CryptoError> {
        validate_salt(material.salt())?;
        let cipher = BatchCipher::new(material.key())?;
        Ok(Self { material, cipher })
    }

    #[inline]
    pub fn salt(&self) -> &[u8; 16] {
        self.material.salt()
    }

    /// Seal one batch plaintext with a fresh nonce.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Artifact, CryptoError> {
        let nonce = random_nonce_12();
        let ciphertext = self.cipher.seal(&nonce, plaintext)?;
        Ok(Artifact {
            salt: *self.material.salt(),
            nonce,
            ciphertext,
        })
    }
}

/// Error opening stored artifact text.
#[derive(Debug)]
pub enum OpenError {
    Artifact(ArtifactError),
    Crypto(CryptoError),
}

impl std::fmt::Display for OpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenError::Artifact(e) => write!(f, "artifact error: {}", e),
            OpenError::Crypto(e) => write!(f, "crypto error: {}", e),
        }
    }
}

impl std::error::Error for OpenError {}

impl From<ArtifactError> for OpenError {
    fn from(e: ArtifactError) -> Self {
        OpenError::Artifact(e)
    }
}

impl From<CryptoError> for OpenError {
    fn from(e: CryptoError) -> Self {
        OpenError::Crypto(e)
    }
}

/// Open a decoded artifact: re-derive from its salt, then authenticate and decrypt.
pub fn open(passphrase: &[u8], iterations: u32, artifact: &Artifact) -> Result<Vec<u8>, CryptoError> {
    let material = KeyMaterial::derive(passphrase, artifact.salt, iterations)?;
    let cipher = BatchCipher::new(material.key())?;
    cipher.open(&artifact.nonce, &artifact.ciphertext)
}

/// Open stored artifact text.
pub fn open_artifact(passphrase: &[u8], iterations: u32, text: &str) -> Result<Vec<u8>, OpenError> {
    let artifact = decode_artifact(text)?;
    Ok(open(passphrase, iterations, &artifact)?)
}
