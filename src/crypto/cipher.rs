// src/crypto/cipher.rs
//! Provider-backed credential cipher
//!
//! Each call resolves the key afresh from the `SecretProvider`, so a key
//! swapped between calls is picked up without rebuilding the cipher. One call
//! uses one snapshot of the key.

use super::{decrypt_with_key, encrypt_with_key, key_fingerprint, load_key, rotate_blob};
use crate::aliases::PlainCredential;
use crate::config::{CipherConfig, SecretProvider};
use crate::consts::{DEFAULT_KEY_VAR, DEFAULT_PREVIOUS_KEY_VAR};
use crate::error::Result;

pub struct CredentialCipher<P> {
    provider: P,
    key_var: String,
    previous_key_var: String,
}

impl<P: SecretProvider> CredentialCipher<P> {
    /// Cipher reading `ENCRYPTION_KEY` from `provider`
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            key_var: DEFAULT_KEY_VAR.to_string(),
            previous_key_var: DEFAULT_PREVIOUS_KEY_VAR.to_string(),
        }
    }

    pub fn from_config(provider: P, config: &CipherConfig) -> Self {
        Self {
            provider,
            key_var: config.key_var.clone(),
            previous_key_var: config.previous_key_var.clone(),
        }
    }

    pub fn key_var(&self) -> &str {
        &self.key_var
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let key = load_key(&self.provider, &self.key_var)?;
        encrypt_with_key(&key, plaintext)
    }

    pub fn decrypt(&self, blob: &str) -> Result<PlainCredential> {
        let key = load_key(&self.provider, &self.key_var)?;
        decrypt_with_key(&key, blob)
    }

    /// Move a blob written under the previous key onto the current key
    pub fn rotate(&self, blob: &str) -> Result<String> {
        self.rotate_from(blob, &self.previous_key_var)
    }

    /// Move a blob written under the key named `previous_var` onto the current key
    pub fn rotate_from(&self, blob: &str, previous_var: &str) -> Result<String> {
        let old_key = load_key(&self.provider, previous_var)?;
        let new_key = load_key(&self.provider, &self.key_var)?;
        rotate_blob(blob, &old_key, &new_key)
    }

    /// Fingerprint of the currently configured key
    pub fn fingerprint(&self) -> Result<String> {
        let key = load_key(&self.provider, &self.key_var)?;
        Ok(key_fingerprint(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticSecretProvider;
    use crate::error::ErrorKind;

    #[test]
    fn rotate_moves_blob_to_current_key() {
        let provider = StaticSecretProvider::new();
        provider.set(DEFAULT_PREVIOUS_KEY_VAR, &"11".repeat(32));
        provider.set(DEFAULT_KEY_VAR, &"11".repeat(32));
        let cipher = CredentialCipher::new(&provider);
        let old_blob = cipher.encrypt("refresh-token").unwrap();

        provider.set(DEFAULT_KEY_VAR, &"22".repeat(32));
        assert_eq!(
            cipher.decrypt(&old_blob).unwrap_err().kind(),
            ErrorKind::Authentication
        );

        let rotated = cipher.rotate(&old_blob).unwrap();
        assert_eq!(cipher.decrypt(&rotated).unwrap().expose_secret(), "refresh-token");
    }

    #[test]
    fn rotate_requires_previous_key() {
        let provider = StaticSecretProvider::with(DEFAULT_KEY_VAR, &"11".repeat(32));
        let cipher = CredentialCipher::new(&provider);
        let blob = cipher.encrypt("x").unwrap();
        let err = cipher.rotate(&blob).unwrap_err();
        assert!(err.to_string().contains(DEFAULT_PREVIOUS_KEY_VAR));
    }

    #[test]
    fn rotate_from_reads_caller_named_variable() {
        let provider = StaticSecretProvider::with("LEGACY_KEY", &"44".repeat(32));
        let legacy = CredentialCipher::from_config(
            &provider,
            &CipherConfig {
                key_var: "LEGACY_KEY".into(),
                previous_key_var: DEFAULT_PREVIOUS_KEY_VAR.into(),
            },
        );
        let legacy_blob = legacy.encrypt("api-secret").unwrap();

        provider.set(DEFAULT_KEY_VAR, &"55".repeat(32));
        let cipher = CredentialCipher::new(&provider);
        let rotated = cipher.rotate_from(&legacy_blob, "LEGACY_KEY").unwrap();
        assert_eq!(cipher.decrypt(&rotated).unwrap().expose_secret(), "api-secret");

        let err = cipher.rotate_from(&legacy_blob, "MISSING_KEY").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("MISSING_KEY"));
    }

    #[test]
    fn custom_key_var_comes_from_config() {
        let config = CipherConfig {
            key_var: "OAUTH_TOKEN_KEY".into(),
            previous_key_var: "OAUTH_TOKEN_KEY_OLD".into(),
        };
        let provider = StaticSecretProvider::with("OAUTH_TOKEN_KEY", &"33".repeat(32));
        let cipher = CredentialCipher::from_config(&provider, &config);
        assert_eq!(cipher.key_var(), "OAUTH_TOKEN_KEY");
        assert!(cipher.fingerprint().is_ok());
    }
}
