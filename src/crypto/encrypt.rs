// src/crypto/encrypt.rs
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;
use zeroize::Zeroizing;

use super::blob::EncryptedBlob;
use crate::aliases::CredentialKey32;
use crate::consts::{NONCE_LEN, TAG_LEN};
use crate::error::{CoreError, Result};

/// Encrypt `plaintext` under `key` with a fresh random nonce → hex blob
pub fn encrypt_with_key(key: &CredentialKey32, plaintext: &str) -> Result<String> {
    let mut nonce = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce);
    seal(key, nonce, plaintext.as_bytes()).map(|blob| blob.to_hex())
}

pub(crate) fn seal(
    key: &CredentialKey32,
    nonce: [u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<EncryptedBlob> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret()));

    let mut buffer = Zeroizing::new(plaintext.to_vec());
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", buffer.as_mut_slice())
        .map_err(|_| CoreError::Authentication("AES-GCM encryption failed".into()))?;

    let mut blob = EncryptedBlob {
        nonce,
        tag: [0u8; TAG_LEN],
        ciphertext: buffer.to_vec(),
    };
    blob.tag.copy_from_slice(&tag);
    Ok(blob)
}
