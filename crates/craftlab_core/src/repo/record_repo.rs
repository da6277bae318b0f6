//! Game record repository contracts and implementations.
//!
//! # Responsibility
//! - Provide stable read/replace APIs over the three persisted game records.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every write replaces the whole record payload (no partial updates).
//! - Reads of absent records return `None`, never an error.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECORDS_TABLE: &str = "game_records";

pub type RepoResult<T> = Result<T, RepoError>;

/// Closed set of persisted game records and their storage keys.
///
/// The key strings are the storage contract and must stay stable across
/// versions; persisted state written under them survives upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey {
    Elements,
    Combinations,
    Tiles,
}

impl RecordKey {
    pub const ALL: [RecordKey; 3] = [Self::Elements, Self::Combinations, Self::Tiles];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Elements => "infinite-craft-elements",
            Self::Combinations => "infinite-craft-combinations",
            Self::Tiles => "infinite-craft-tiles",
        }
    }
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic repository error for record persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    Backend(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection has schema version {actual_version}, expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for the three game state records.
///
/// Implementations are synchronous and local; the engine treats a write
/// failure as best-effort (logged, not propagated).
pub trait RecordRepository {
    fn read_record(&self, key: RecordKey) -> RepoResult<Option<String>>;
    fn write_record(&self, key: RecordKey, payload: &str) -> RepoResult<()>;
}

// Shared references are repositories too, so an engine and a test can observe
// the same in-process store.
impl<R: RecordRepository + ?Sized> RecordRepository for &R {
    fn read_record(&self, key: RecordKey) -> RepoResult<Option<String>> {
        (**self).read_record(key)
    }

    fn write_record(&self, key: RecordKey, payload: &str) -> RepoResult<()> {
        (**self).write_record(key, payload)
    }
}

/// SQLite-backed record repository.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    /// Wraps a migrated connection, verifying schema readiness first.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were never applied.
    /// - `MissingRequiredTable` when the records table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [RECORDS_TABLE],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable(RECORDS_TABLE));
        }

        Ok(Self { conn })
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn read_record(&self, key: RecordKey) -> RepoResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM game_records WHERE record_key = ?1;",
                [key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write_record(&self, key: RecordKey, payload: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO game_records (record_key, payload)
             VALUES (?1, ?2)
             ON CONFLICT (record_key) DO UPDATE
             SET payload = excluded.payload,
                 updated_at = (strftime('%s', 'now') * 1000);",
            params![key.as_str(), payload],
        )?;
        Ok(())
    }
}

/// In-process record repository for tests, fakes and the CLI probe.
///
/// Single-threaded by design, matching the engine's concurrency model. The
/// write-failure switch lets tests exercise best-effort persistence without a
/// broken disk.
#[derive(Default)]
pub struct MemoryRecordRepository {
    records: RefCell<BTreeMap<&'static str, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail until switched back.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Pre-populates one record, bypassing the failure switch.
    ///
    /// Test convenience mirroring state left behind by an earlier session.
    pub fn put_record(&self, key: RecordKey, payload: impl Into<String>) {
        self.records.borrow_mut().insert(key.as_str(), payload.into());
    }
}

impl RecordRepository for MemoryRecordRepository {
    fn read_record(&self, key: RecordKey) -> RepoResult<Option<String>> {
        Ok(self.records.borrow().get(key.as_str()).cloned())
    }

    fn write_record(&self, key: RecordKey, payload: &str) -> RepoResult<()> {
        if self.fail_writes.get() {
            return Err(RepoError::Backend(format!(
                "writes disabled for record {key}"
            )));
        }
        self.records
            .borrow_mut()
            .insert(key.as_str(), payload.to_string());
        Ok(())
    }
}
