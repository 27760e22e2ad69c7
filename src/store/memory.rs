// src/store/memory.rs
use std::sync::RwLock;

use super::{MembershipRecord, MembershipStore, UserId, WorkspaceId};
use crate::enums::Role;
use crate::error::StoreError;

/// Lock-protected membership table, for tests and embedding
#[derive(Debug, Default)]
pub struct InMemoryMembershipStore {
    records: RwLock<Vec<MembershipRecord>>,
}

impl InMemoryMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update the role for (user, workspace)
    pub fn grant(&self, user_id: &str, workspace_id: &str, role: Role) {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        let user_id = UserId::from(user_id);
        let workspace_id = WorkspaceId::from(workspace_id);
        match records
            .iter_mut()
            .find(|r| r.user_id == user_id && r.workspace_id == workspace_id)
        {
            Some(existing) => existing.role = role,
            None => records.push(MembershipRecord {
                user_id,
                workspace_id,
                role,
            }),
        }
    }

    /// Returns true if a membership was removed
    pub fn revoke(&self, user_id: &str, workspace_id: &str) -> bool {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        let before = records.len();
        records.retain(|r| !(r.user_id.0 == user_id && r.workspace_id.0 == workspace_id));
        records.len() != before
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MembershipStore for InMemoryMembershipStore {
    fn memberships(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<MembershipRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("membership table lock poisoned".into()))?;
        Ok(records
            .iter()
            .filter(|r| &r.user_id == user_id && &r.workspace_id == workspace_id)
            .cloned()
            .collect())
    }
}
