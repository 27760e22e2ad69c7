// src/crypto/rotate.rs
use tracing::info;

use super::{decrypt_with_key, encrypt_with_key, key_fingerprint};
use crate::aliases::CredentialKey32;
use crate::error::Result;

/// Re-encrypt a blob from `old_key` to `new_key`; plaintext never leaves this function
pub fn rotate_blob(
    blob: &str,
    old_key: &CredentialKey32,
    new_key: &CredentialKey32,
) -> Result<String> {
    let plaintext = decrypt_with_key(old_key, blob)?;
    let rotated = encrypt_with_key(new_key, plaintext.expose_secret())?;
    info!(
        from = %key_fingerprint(old_key),
        to = %key_fingerprint(new_key),
        "rotated credential blob"
    );
    Ok(rotated)
}
