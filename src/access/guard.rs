// src/access/guard.rs
use tracing::{debug, warn};

use super::AccessDecision;
use crate::consts::{INSUFFICIENT_PERMISSIONS, WORKSPACE_ACCESS_DENIED};
use crate::enums::Role;
use crate::error::{CoreError, Result, StoreError};
use crate::store::{MembershipStore, UserId, WorkspaceId};

/// Roles allowed to manage members, projects and settings
pub const MANAGE_ROLES: &[Role] = &[Role::Owner, Role::Admin];

/// Workspace deletion and ownership transfer
pub const OWNER_ONLY: &[Role] = &[Role::Owner];

/// `Insufficient permissions. Required: owner or admin`
pub fn insufficient_permissions_reason(required: &[Role]) -> String {
    let roles: Vec<&str> = required.iter().map(Role::as_str).collect();
    format!("{INSUFFICIENT_PERMISSIONS} {}", roles.join(" or "))
}

/// Stateless authorization over an elevated membership store
pub struct WorkspaceGuard<S> {
    store: S,
}

impl<S: MembershipStore> WorkspaceGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Role of `user_id` in `workspace_id`, or `None` without a membership.
    ///
    /// More than one matching record breaks the store's uniqueness
    /// invariant and is reported as a dependency fault; roles are never
    /// merged or picked.
    pub fn resolve_role(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Option<Role>> {
        let records = self.store.memberships(user_id, workspace_id)?;

        match records.as_slice() {
            [] => Ok(None),
            [record] => Ok(Some(record.role)),
            many => {
                warn!(
                    user = %user_id,
                    workspace = %workspace_id,
                    count = many.len(),
                    "duplicate workspace membership records"
                );
                Err(CoreError::Dependency(StoreError::Integrity(format!(
                    "{} membership records for user {user_id} in workspace {workspace_id}",
                    many.len()
                ))))
            }
        }
    }

    /// Resolved role if the user is a member and (when `required_roles` is
    /// non-empty) holds one of the listed roles.
    pub fn require_access(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
        required_roles: Option<&[Role]>,
    ) -> Result<Role> {
        let Some(role) = self.resolve_role(user_id, workspace_id)? else {
            warn!(user = %user_id, workspace = %workspace_id, "no workspace membership");
            return Err(CoreError::AccessDenied(WORKSPACE_ACCESS_DENIED.to_string()));
        };

        if let Some(required) = required_roles.filter(|r| !r.is_empty()) {
            if !required.contains(&role) {
                warn!(
                    user = %user_id,
                    workspace = %workspace_id,
                    %role,
                    "role not in required set"
                );
                return Err(CoreError::AccessDenied(insufficient_permissions_reason(
                    required,
                )));
            }
        }

        debug!(user = %user_id, workspace = %workspace_id, %role, "workspace access granted");
        Ok(role)
    }

    /// Shorthand for `require_access` with a mandatory role set
    pub fn require_any(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
        roles: &[Role],
    ) -> Result<Role> {
        self.require_access(user_id, workspace_id, Some(roles))
    }

    /// Non-failing form of `require_access` for boundary code
    pub fn check_access(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
        required_roles: Option<&[Role]>,
    ) -> AccessDecision {
        match self.require_access(user_id, workspace_id, required_roles) {
            Ok(role) => AccessDecision::Granted(role),
            Err(err) => AccessDecision::from_error(&err),
        }
    }
}
