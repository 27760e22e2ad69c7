// src/consts.rs
//! Shared constants: credential blob layout, config names and reason strings

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// AES-GCM nonce length in bytes (96-bit IV)
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// Hex characters occupied by the fixed-width blob header (nonce ‖ tag)
pub const BLOB_HEADER_HEX_LEN: usize = (NONCE_LEN + TAG_LEN) * 2;

/// Environment value holding the hex-encoded credential key
pub const DEFAULT_KEY_VAR: &str = "ENCRYPTION_KEY";

/// Environment value holding the key being rotated away from
pub const DEFAULT_PREVIOUS_KEY_VAR: &str = "ENCRYPTION_KEY_PREVIOUS";

/// Environment value holding the optional SQLCipher passphrase for the membership DB
pub const DEFAULT_DB_KEY_VAR: &str = "TODO_OS_DB_KEY";

/// Default membership database location
pub const DEFAULT_MEMBERSHIP_DB: &str = "data/memberships.db";

/// Recommended KDF iterations for SQLCipher databases
// ~0.1–0.2s on modern hardware
pub const DB_KDF_ITERATIONS: u32 = 256_000;

/// Hex characters of BLAKE3(key) shown as a key fingerprint
pub const FINGERPRINT_HEX_LEN: usize = 16;

/// Client-facing reason when the caller has no membership in the workspace
pub const WORKSPACE_ACCESS_DENIED: &str = "Workspace access denied";

/// Prefix of the client-facing reason when the caller's role is not allowed
pub const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions. Required:";

/// Client-facing reason when membership could not be looked up; details go to the log
pub const ACCESS_UNVERIFIED: &str = "Unable to verify workspace access";
