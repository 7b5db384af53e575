pub mod types;
pub mod aead;
pub mod kdf;
pub mod nonce;
pub mod digest;
pub mod seal;

pub use types::*;
pub use aead::*;
pub use kdf::*;
pub use nonce::*;
pub use digest::*;
pub use seal::*;
