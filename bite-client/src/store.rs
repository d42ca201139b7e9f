//! Local attendance cache
//!
//! The last baseline confirmed by the remote store is kept locally so the
//! UI can start from it offline. The cache is a single entry holding the
//! ISO date-string list of the persisted [`AttendanceSet`]; it is read at
//! startup and overwritten wholesale after every successful save.

use redb::{Database, ReadableDatabase, TableDefinition};
use shared::AttendanceSet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Table holding the cache: key = "saved_days", value = JSON list of ISO dates
const ATTENDANCE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("attendance_cache");

const SAVED_DAYS_KEY: &str = "saved_days";

/// Cache errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Repository seam for the persisted attendance baseline.
///
/// Injected into the sync flow instead of reaching for ambient state.
pub trait AttendanceStore: Send + Sync {
    /// Last-synced set; the empty set when nothing was cached yet.
    fn load(&self) -> Result<AttendanceSet, StoreError>;

    /// Overwrite the cache with `set`.
    fn store(&self, set: &AttendanceSet) -> Result<(), StoreError>;
}

/// Attendance cache backed by redb
#[derive(Clone)]
pub struct RedbAttendanceStore {
    db: Arc<Database>,
}

impl RedbAttendanceStore {
    /// Open or create the cache database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::create(path)?;

        // Create the table up front so reads never hit a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ATTENDANCE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl AttendanceStore for RedbAttendanceStore {
    fn load(&self) -> Result<AttendanceSet, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ATTENDANCE_TABLE)?;

        match table.get(SAVED_DAYS_KEY)? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(AttendanceSet::new()),
        }
    }

    fn store(&self, set: &AttendanceSet) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(set)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(ATTENDANCE_TABLE)?;
            table.insert(SAVED_DAYS_KEY, bytes.as_slice())?;
        }
        write_txn.commit()?;

        Ok(())
    }
}

/// In-memory attendance cache for tests and in-process use
#[derive(Debug, Default)]
pub struct MemoryAttendanceStore {
    inner: Mutex<AttendanceSet>,
}

impl MemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttendanceStore for MemoryAttendanceStore {
    fn load(&self) -> Result<AttendanceSet, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn store(&self, set: &AttendanceSet) -> Result<(), StoreError> {
        *self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = set.clone();
        Ok(())
    }
}
