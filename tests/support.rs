// tests/support.rs
//! Fixtures — keys, providers and pre-populated membership stores

use std::sync::Arc;

use todo_os_security::consts::DEFAULT_KEY_VAR;
use todo_os_security::error::StoreError;
use todo_os_security::{
    CredentialCipher, InMemoryMembershipStore, MembershipRecord, MembershipStore, Role,
    StaticSecretProvider, UserId, WorkspaceId,
};

/// 64 'a' hex characters
#[allow(dead_code)]
pub const KEY_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

#[allow(dead_code)]
pub const KEY_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

/// Cipher over a shared provider the test can keep mutating
#[allow(dead_code)]
pub fn cipher_with_key(
    hex_key: &str,
) -> (
    Arc<StaticSecretProvider>,
    CredentialCipher<Arc<StaticSecretProvider>>,
) {
    let provider = Arc::new(StaticSecretProvider::with(DEFAULT_KEY_VAR, hex_key));
    let cipher = CredentialCipher::new(Arc::clone(&provider));
    (provider, cipher)
}

/// acme: alice=owner, bob=admin, carol=member; globex: bob=member
#[allow(dead_code)]
pub fn seeded_store() -> InMemoryMembershipStore {
    let store = InMemoryMembershipStore::new();
    store.grant("alice", "acme", Role::Owner);
    store.grant("bob", "acme", Role::Admin);
    store.grant("carol", "acme", Role::Member);
    store.grant("bob", "globex", Role::Member);
    store
}

#[allow(dead_code)]
pub fn ids(user: &str, workspace: &str) -> (UserId, WorkspaceId) {
    (UserId::from(user), WorkspaceId::from(workspace))
}

/// Store whose backend is unreachable
#[allow(dead_code)]
pub struct UnreachableStore;

impl MembershipStore for UnreachableStore {
    fn memberships(
        &self,
        _user_id: &UserId,
        _workspace_id: &WorkspaceId,
    ) -> Result<Vec<MembershipRecord>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }
}

/// Store that violates the one-record-per-pair invariant
#[allow(dead_code)]
pub struct DuplicatingStore;

impl MembershipStore for DuplicatingStore {
    fn memberships(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<MembershipRecord>, StoreError> {
        Ok([Role::Member, Role::Owner]
            .into_iter()
            .map(|role| MembershipRecord {
                user_id: user_id.clone(),
                workspace_id: workspace_id.clone(),
                role,
            })
            .collect())
    }
}
