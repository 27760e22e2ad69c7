// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

/// Uniform error type for membership store backends.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("integrity violation: {0}")]
    Integrity(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    /// Key or config missing/malformed; needs an operator, not a retry.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Blob failed tag verification (wrong key, tampering, truncation).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Displays exactly the client-facing reason.
    #[error("{0}")]
    AccessDenied(String),

    #[error("membership lookup failed: {0}")]
    Dependency(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used by request boundaries (403 vs 5xx).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Authentication,
    AccessDenied,
    Dependency,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Configuration(_) | CoreError::Io(_) => ErrorKind::Configuration,
            CoreError::Authentication(_) => ErrorKind::Authentication,
            CoreError::AccessDenied(_) => ErrorKind::AccessDenied,
            CoreError::Dependency(_) => ErrorKind::Dependency,
        }
    }

    pub fn is_access_denied(&self) -> bool {
        self.kind() == ErrorKind::AccessDenied
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
