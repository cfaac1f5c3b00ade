//! Durable key-value storage substrate.
//!
//! # Responsibility
//! - Define the narrow blob store contract consumed by collections and the
//!   safe-zone monitor.
//! - Open and configure SQLite connections backing the default store.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Values are opaque serialized blobs; only callers understand them.
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write application data before migrations
//!   succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod sqlite;

pub use open::{open_store, open_store_in_memory};
pub use sqlite::SqliteKvStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Contract every durable store backend satisfies.
///
/// Whole-blob get/set/remove only: no transactions, no key listing, no TTL.
/// Implementations must be safe to share across threads behind an `Arc`.
pub trait KvStore {
    /// Returns the blob stored at `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` at `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the blob at `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
