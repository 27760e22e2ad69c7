// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret wrappers used throughout todo-os-security.
//! Everything here zeroizes on drop.

pub use secure_gate::{
    dynamic_alias, fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(CredentialKey32, 32); // 256-bit AES-GCM credential key

// Dynamic secrets
dynamic_alias!(SecretValue, String); // Raw value handed out by a SecretProvider
dynamic_alias!(PlainCredential, String); // Decrypted refresh token / API secret

// Random secrets
random_alias!(RandomCredentialKey32, 32);
