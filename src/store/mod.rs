// src/store/mod.rs
//! Membership storage abstraction
//!
//! `MembershipStore` is the *elevated* read capability: it sees membership
//! rows across every tenant. Only the workspace guard should hold one, since
//! it is the component that establishes tenant boundaries in the first place.
//! Tenant-scoped data access lives with the request-handling code, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::error::StoreError;

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryMembershipStore;
pub use sqlite::SqliteMembershipStore;

/// Strongly-typed identifiers (avoid mixing user and workspace ids).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub String);

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl From<&str> for WorkspaceId {
    fn from(value: &str) -> Self {
        WorkspaceId(value.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One (user, workspace, role) row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub user_id: UserId,
    pub workspace_id: WorkspaceId,
    pub role: Role,
}

/// Cross-tenant membership lookup.
///
/// Implementations return every row matching the pair; callers decide what
/// to do when the at-most-one invariant is broken.
pub trait MembershipStore: Send + Sync {
    fn memberships(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<MembershipRecord>, StoreError>;
}

impl<S: MembershipStore + ?Sized> MembershipStore for &S {
    fn memberships(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<MembershipRecord>, StoreError> {
        (**self).memberships(user_id, workspace_id)
    }
}

impl<S: MembershipStore + ?Sized> MembershipStore for std::sync::Arc<S> {
    fn memberships(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<MembershipRecord>, StoreError> {
        (**self).memberships(user_id, workspace_id)
    }
}
