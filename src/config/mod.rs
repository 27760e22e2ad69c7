// src/config/mod.rs
//! Configuration system for todo-os-security
//!
//! Two layers: a `SecretProvider` consulted on every cipher call, and a
//! plain TOML application config with env overrides.

pub use app::{load, load_from, CipherConfig, Config, StoreConfig};
pub use secrets::{EnvSecretProvider, SecretProvider, StaticSecretProvider};

mod app;
mod defaults;
mod secrets;
