// src/crypto/decrypt.rs
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce, Tag};
use zeroize::Zeroizing;

use super::blob::EncryptedBlob;
use crate::aliases::{CredentialKey32, PlainCredential};
use crate::error::{CoreError, Result};

/// Verify and decrypt a hex blob under `key`.
///
/// The tag is checked before any plaintext leaves this function; on failure
/// the working buffer is wiped and only an error is returned.
pub fn decrypt_with_key(key: &CredentialKey32, blob: &str) -> Result<PlainCredential> {
    let EncryptedBlob {
        nonce,
        tag,
        ciphertext,
    } = EncryptedBlob::parse(blob)?;

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret()));

    let mut buffer = Zeroizing::new(ciphertext);
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(&nonce),
            b"",
            buffer.as_mut_slice(),
            Tag::from_slice(&tag),
        )
        .map_err(|_| {
            CoreError::Authentication("credential blob failed tag verification".into())
        })?;

    let text = std::str::from_utf8(&buffer).map_err(|_| {
        CoreError::Authentication("decrypted credential is not valid UTF-8".into())
    })?;
    Ok(PlainCredential::new(text.to_owned()))
}
