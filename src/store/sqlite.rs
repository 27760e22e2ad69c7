// src/store/sqlite.rs
//! SQLCipher-backed membership table

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection};

use super::{MembershipRecord, MembershipStore, UserId, WorkspaceId};
use crate::config::{SecretProvider, StoreConfig};
use crate::consts::DB_KDF_ITERATIONS;
use crate::enums::Role;
use crate::error::StoreError;

pub struct SqliteMembershipStore {
    conn: Mutex<Connection>,
}

impl SqliteMembershipStore {
    /// Open (or create) the membership database; `db_key` enables SQLCipher
    pub fn open<P: AsRef<Path>>(path: P, db_key: Option<&str>) -> Result<Self, StoreError> {
        if let Some(parent) = path.as_ref().parent() {
            let _ = fs::create_dir_all(parent);
        }

        let conn = Connection::open(path.as_ref())?;

        if let Some(key) = db_key {
            conn.pragma_update(None, "key", key)?;
            conn.execute_batch(&format!(
                r#"
                PRAGMA cipher_page_size = 4096;
                PRAGMA kdf_iter = {DB_KDF_ITERATIONS};
                PRAGMA cipher_hmac_algorithm = HMAC_SHA512;
                PRAGMA cipher_kdf_algorithm = PBKDF2_HMAC_SHA512;
                "#
            ))?;
        }

        Self::from_connection(conn)
    }

    /// Open the database named by `config`, keyed from `provider` when the key is set
    pub fn open_with_config<P: SecretProvider + ?Sized>(
        config: &StoreConfig,
        provider: &P,
    ) -> Result<Self, StoreError> {
        let db_key = provider.get_secret(&config.db_key_var);
        let db_key = db_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.is_empty());
        Self::open(&config.membership_db, db_key)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS workspace_members (
                workspace_id TEXT NOT NULL,
                user_id TEXT NOT NULL,
                role TEXT NOT NULL CHECK (role IN ('owner', 'admin', 'member')),
                created_at TEXT NOT NULL DEFAULT (datetime('now')),
                PRIMARY KEY (workspace_id, user_id)
            );

            CREATE INDEX IF NOT EXISTS idx_workspace_members_user_id
                ON workspace_members(user_id);
            "#,
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Backend("membership connection lock poisoned".into()))
    }

    /// Insert a membership or change the role of an existing one
    pub fn add_member(&self, record: &MembershipRecord) -> Result<(), StoreError> {
        self.conn()?.execute(
            r#"
            INSERT INTO workspace_members (workspace_id, user_id, role)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (workspace_id, user_id) DO UPDATE SET role = excluded.role
            "#,
            params![
                &record.workspace_id.0,
                &record.user_id.0,
                record.role.as_str()
            ],
        )?;
        Ok(())
    }

    /// Returns true if a row was deleted
    pub fn remove_member(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<bool, StoreError> {
        let deleted = self.conn()?.execute(
            "DELETE FROM workspace_members WHERE workspace_id = ?1 AND user_id = ?2",
            params![&workspace_id.0, &user_id.0],
        )?;
        Ok(deleted > 0)
    }

    /// All memberships of one workspace, ordered by user id
    pub fn members_of(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<MembershipRecord>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT user_id, workspace_id, role FROM workspace_members
             WHERE workspace_id = ?1 ORDER BY user_id",
        )?;
        let rows = stmt.query_map([&workspace_id.0], read_row)?;
        collect_records(rows)
    }
}

type RawRow = (String, String, String);

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn collect_records<I>(rows: I) -> Result<Vec<MembershipRecord>, StoreError>
where
    I: Iterator<Item = rusqlite::Result<RawRow>>,
{
    rows.map(|row| {
        let (user_id, workspace_id, role) = row?;
        let role = role
            .parse::<Role>()
            .map_err(|e| StoreError::Integrity(e.to_string()))?;
        Ok(MembershipRecord {
            user_id: UserId(user_id),
            workspace_id: WorkspaceId(workspace_id),
            role,
        })
    })
    .collect()
}

impl MembershipStore for SqliteMembershipStore {
    fn memberships(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<MembershipRecord>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT user_id, workspace_id, role FROM workspace_members
             WHERE user_id = ?1 AND workspace_id = ?2",
        )?;
        let rows = stmt.query_map(params![&user_id.0, &workspace_id.0], read_row)?;
        collect_records(rows)
    }
}
