// src/lib.rs
//! todo-os-security — credential protection and workspace authorization
//!
//! Features:
//! - AES-256-GCM credential blobs (hex nonce ‖ tag ‖ ciphertext)
//! - Per-call key resolution through a `SecretProvider`
//! - Workspace role guard over an elevated membership store
//! - SQLCipher-backed membership table

pub mod access;
pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod store;

// Re-export everything users need at the crate root
pub use access::{AccessDecision, WorkspaceGuard};
pub use aliases::{CredentialKey32, PlainCredential, SecretValue};
pub use config::{EnvSecretProvider, SecretProvider, StaticSecretProvider};
pub use crypto::CredentialCipher;
pub use enums::Role;
pub use error::{CoreError, ErrorKind, Result as CoreResult, StoreError};
pub use store::{
    InMemoryMembershipStore, MembershipRecord, MembershipStore, SqliteMembershipStore, UserId,
    WorkspaceId,
};
