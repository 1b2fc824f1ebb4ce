//! redb-based persistence for the durable session subset
//!
//! A single table holds one JSON-serialized [`PersistedSession`] blob under
//! the fixed storage key. Commits are durable as soon as `commit()`
//! returns (redb copy-on-write with atomic pointer swap), so a session
//! written before a crash is intact on the next load.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::PersistedSession;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for the session blob: key = storage name, value = JSON
const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

/// Fixed storage name, carried over from the original web storage key
const STORAGE_KEY: &str = "lebanese-saj-menu-storage";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
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

pub type StorageResult<T> = Result<T, StorageError>;

/// Session storage backed by redb
#[derive(Clone)]
pub struct SessionStorage {
    db: Arc<Database>,
}

impl SessionStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Load the persisted session, `None` when nothing was saved yet
    pub fn load(&self) -> StorageResult<Option<PersistedSession>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(STORAGE_KEY)? {
            Some(value) => {
                let session: PersistedSession = serde_json::from_slice(value.value())?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    /// Save the session, replacing any previous blob
    pub fn save(&self, session: &PersistedSession) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SESSION_TABLE)?;
            let value = serde_json::to_vec(session)?;
            table.insert(STORAGE_KEY, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }
}
