// src/crypto/mod.rs
//! Credential cipher — AES-256-GCM for short secrets at rest
//!
//! Blob layout (lowercase hex, fixed order): nonce (12 bytes) ‖ tag (16 bytes)
//! ‖ ciphertext (variable). The layout is persisted by external storage and
//! must not change.
//!
//! Everything below `cipher` is pure: no I/O, no logging of key material.
mod blob;
mod cipher;
mod decrypt;
mod encrypt;
mod key;
mod rotate;

pub use blob::EncryptedBlob;
pub use cipher::CredentialCipher;
pub use decrypt::decrypt_with_key;
pub use encrypt::encrypt_with_key;
pub use key::{generate_key, key_fingerprint, key_representations, load_key, KeyRepr};
pub use rotate::rotate_blob;
