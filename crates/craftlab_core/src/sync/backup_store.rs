//! Backup store contract and in-process implementation.
//!
//! # Responsibility
//! - Model the remote backup row (`userId` + three JSON payload sections).
//! - Provide last-write-wins save/load semantics per user.
//!
//! # Invariants
//! - At most one backup row per user is retrievable.
//! - Validation failures are returned as stable error envelopes, never
//!   panics; a missing backup is `None`, not an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BackupResult<T> = Result<T, BackupErrorEnvelope>;

/// Payload sent by a client to create or replace its backup row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBackup {
    pub user_id: String,
    pub elements: Value,
    pub combinations: Value,
    pub tiles: Value,
}

/// Stored backup row, as returned by the load endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    pub id: i64,
    pub user_id: String,
    pub elements: Value,
    pub combinations: Value,
    pub tiles: Value,
}

/// Save acknowledgment mirroring the endpoint's success body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupAck {
    pub success: bool,
    pub id: i64,
}

/// Stable failure envelope for backup operations.
///
/// `code` is machine-readable and stable; `message` is for humans. A
/// validation envelope corresponds to the endpoint's HTTP 400 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupErrorEnvelope {
    pub code: &'static str,
    pub message: String,
}

impl BackupErrorEnvelope {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for BackupErrorEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "backup failure [{}]: {}", self.code, self.message)
    }
}

impl Error for BackupErrorEnvelope {}

/// Storage contract for the backup collaborator.
///
/// Semantics are last-write-wins per `user_id` with no merge logic; the
/// engine works unchanged whether or not any implementation is wired in.
pub trait BackupStore {
    /// Saves one backup, replacing any previous row for the same user.
    fn save_backup(&mut self, backup: NewBackup) -> BackupResult<BackupAck>;

    /// Loads the most recent backup for a user; `None` when absent.
    fn load_backup(&self, user_id: &str) -> Option<BackupRecord>;
}

/// In-process backup store used by tests and as the reference semantics for
/// any remote implementation.
#[derive(Default)]
pub struct MemoryBackupStore {
    rows: BTreeMap<String, BackupRecord>,
    next_id: i64,
}

impl MemoryBackupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl BackupStore for MemoryBackupStore {
    fn save_backup(&mut self, backup: NewBackup) -> BackupResult<BackupAck> {
        let user_id = backup.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(BackupErrorEnvelope::new(
                "invalid_backup",
                "userId must not be blank",
            ));
        }

        self.next_id += 1;
        let id = self.next_id;
        self.rows.insert(
            user_id.clone(),
            BackupRecord {
                id,
                user_id,
                elements: backup.elements,
                combinations: backup.combinations,
                tiles: backup.tiles,
            },
        );
        Ok(BackupAck { success: true, id })
    }

    fn load_backup(&self, user_id: &str) -> Option<BackupRecord> {
        self.rows.get(user_id.trim()).cloned()
    }
}
