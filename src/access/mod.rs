// src/access/mod.rs
//! Workspace access guard — the authorization decision point for every
//! multi-tenant operation.
//!
//! Role checks are explicit allow-lists: no role implies another.

mod decision;
mod guard;

pub use decision::{AccessDecision, Denial};
pub use guard::{insufficient_permissions_reason, WorkspaceGuard, MANAGE_ROLES, OWNER_ONLY};
