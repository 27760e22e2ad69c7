// src/config/secrets.rs
//! Secret providers — the only way key material enters the crate
//!
//! Providers are consulted on every call and must not cache, so rotating
//! the backing value takes effect on the next encrypt/decrypt.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::aliases::SecretValue;

/// Source of named secrets, resolved at call time
pub trait SecretProvider: Send + Sync {
    fn get_secret(&self, name: &str) -> Option<SecretValue>;
}

/// Reads secrets from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretProvider;

impl SecretProvider for EnvSecretProvider {
    fn get_secret(&self, name: &str) -> Option<SecretValue> {
        std::env::var(name).ok().map(|v| SecretValue::new(v))
    }
}

/// In-process secret map; values can be swapped while the provider is shared
#[derive(Default)]
pub struct StaticSecretProvider {
    values: RwLock<HashMap<String, String>>,
}

impl StaticSecretProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(name: &str, value: &str) -> Self {
        let provider = Self::new();
        provider.set(name, value);
        provider
    }

    pub fn set(&self, name: &str, value: &str) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(name.to_string(), value.to_string());
    }

    pub fn remove(&self, name: &str) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.remove(name);
    }
}

impl SecretProvider for StaticSecretProvider {
    fn get_secret(&self, name: &str) -> Option<SecretValue> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.get(name).map(|v| SecretValue::new(v.clone()))
    }
}

impl<P: SecretProvider + ?Sized> SecretProvider for &P {
    fn get_secret(&self, name: &str) -> Option<SecretValue> {
        (**self).get_secret(name)
    }
}

impl<P: SecretProvider + ?Sized> SecretProvider for std::sync::Arc<P> {
    fn get_secret(&self, name: &str) -> Option<SecretValue> {
        (**self).get_secret(name)
    }
}
