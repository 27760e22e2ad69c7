// src/crypto/key.rs
//! Key retrieval, generation and representation
//!
//! Keys are re-read from the provider on every call; nothing here caches.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::{Zeroize, Zeroizing};

use crate::aliases::{
    CredentialKey32, RandomCredentialKey32, SecureConversionsExt, SecureRandomExt,
};
use crate::config::SecretProvider;
use crate::consts::{FINGERPRINT_HEX_LEN, KEY_LEN};
use crate::error::{CoreError, Result};

/// Resolve the 32-byte credential key named `name` from `provider`
pub fn load_key<P: SecretProvider + ?Sized>(provider: &P, name: &str) -> Result<CredentialKey32> {
    let value = provider
        .get_secret(name)
        .filter(|v| !v.expose_secret().trim().is_empty())
        .ok_or_else(|| CoreError::Configuration(format!("{name} is not set")))?;

    let bytes = Zeroizing::new(
        hex::decode(value.expose_secret().trim())
            .map_err(|_| CoreError::Configuration(format!("{name} is not valid hex")))?,
    );

    if bytes.len() != KEY_LEN {
        return Err(CoreError::Configuration(format!(
            "{name} has invalid key length: expected {KEY_LEN} bytes, got {}",
            bytes.len()
        )));
    }

    let mut raw = [0u8; KEY_LEN];
    raw.copy_from_slice(&bytes);
    let key = CredentialKey32::new(raw);
    raw.zeroize();
    Ok(key)
}

/// Generate a new random 256-bit credential key
#[inline]
pub fn generate_key() -> CredentialKey32 {
    CredentialKey32::new(**RandomCredentialKey32::new())
}

/// String representations of a key for provisioning
#[derive(Debug, Clone)]
pub struct KeyRepr {
    /// What `ENCRYPTION_KEY` expects
    pub hex: String,
    pub base64: String,
}

pub fn key_representations(key: &CredentialKey32) -> KeyRepr {
    KeyRepr {
        hex: key.expose_secret().to_hex(),
        base64: STANDARD.encode(key.expose_secret()),
    }
}

/// Non-secret identifier for a key, safe to log
pub fn key_fingerprint(key: &CredentialKey32) -> String {
    let digest = blake3::hash(key.expose_secret());
    digest.to_hex()[..FINGERPRINT_HEX_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticSecretProvider;
    use crate::error::ErrorKind;

    #[test]
    fn load_key_accepts_64_hex_chars() {
        let provider = StaticSecretProvider::with("K", &"ab".repeat(32));
        let key = load_key(&provider, "K").unwrap();
        assert_eq!(key.expose_secret(), &[0xab; 32]);
    }

    #[test]
    fn load_key_rejects_empty_value_as_unset() {
        let provider = StaticSecretProvider::with("K", "   ");
        let err = load_key(&provider, "K").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("K is not set"));
    }

    #[test]
    fn load_key_rejects_short_and_non_hex_values() {
        let short = StaticSecretProvider::with("K", &"ab".repeat(16));
        let err = load_key(&short, "K").unwrap_err();
        assert!(err.to_string().contains("invalid key length"));

        let garbage = StaticSecretProvider::with("K", &"zz".repeat(32));
        assert_eq!(
            load_key(&garbage, "K").unwrap_err().kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn generate_key_is_random_and_loadable() {
        let key1 = generate_key();
        let key2 = generate_key();
        assert_eq!(key1.expose_secret().len(), KEY_LEN);
        assert_ne!(key1.expose_secret(), key2.expose_secret());

        let provider = StaticSecretProvider::with("K", &key_representations(&key1).hex);
        let loaded = load_key(&provider, "K").unwrap();
        assert_eq!(loaded.expose_secret(), key1.expose_secret());
    }

    #[test]
    fn fingerprint_is_stable_and_short() {
        let key = CredentialKey32::new([0x42; 32]);
        let fp = key_fingerprint(&key);
        assert_eq!(fp.len(), FINGERPRINT_HEX_LEN);
        assert_eq!(fp, key_fingerprint(&CredentialKey32::new([0x42; 32])));
        assert_ne!(fp, key_fingerprint(&CredentialKey32::new([0x43; 32])));
    }

    #[test]
    fn representations_match_known_encodings() {
        let repr = key_representations(&CredentialKey32::new([0x42; 32]));
        assert_eq!(
            repr.hex,
            "4242424242424242424242424242424242424242424242424242424242424242"
        );
        assert_eq!(repr.base64, "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI=");
    }
}
