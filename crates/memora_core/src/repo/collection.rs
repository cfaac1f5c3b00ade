//! Generic durable collection over a single store key.
//!
//! # Responsibility
//! - Load, insert, update, delete and clear an ordered list of records
//!   persisted as one serialized blob.
//! - Serialize concurrent read-modify-write cycles per key.
//!
//! # Invariants
//! - Reads fail closed: absent keys, store read errors and corrupt payloads
//!   all load as an empty collection (logged, never surfaced).
//! - Writes fail open: store and encoding failures surface as errors and
//!   leave persisted state unchanged.
//! - A collection with a comparator is re-sorted after every insert and
//!   update.

use crate::model::record::{Record, ValidationError};
use crate::store::{KvStore, StoreError};
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError};

pub type CollectionResult<T> = Result<T, CollectionError>;

/// Write-side error for collection operations.
#[derive(Debug)]
pub enum CollectionError {
    Validation(ValidationError),
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<ValidationError> for CollectionError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for CollectionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for CollectionError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Process-wide per-key lock registry.
///
/// The store offers no compare-and-swap, so every read-modify-write cycle
/// on a key must hold that key's lock for its full duration. All
/// collections sharing a store must share one registry.
pub struct KeyLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyLocks {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn for_key(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            locks
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }
}

impl Default for KeyLocks {
    fn default() -> Self {
        Self::new()
    }
}

type SortFn<T> = fn(&T, &T) -> Ordering;

/// Ordered list of records persisted under one store key.
pub struct Collection<T, S: KvStore> {
    store: Arc<S>,
    locks: Arc<KeyLocks>,
    key: String,
    sort: Option<SortFn<T>>,
}

impl<T, S: KvStore> Clone for Collection<T, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            locks: Arc::clone(&self.locks),
            key: self.key.clone(),
            sort: self.sort,
        }
    }
}

impl<T, S> Collection<T, S>
where
    T: Record + Serialize + DeserializeOwned,
    S: KvStore,
{
    /// Creates an insertion-ordered collection (new records go to the front).
    pub fn new(store: Arc<S>, locks: Arc<KeyLocks>, key: impl Into<String>) -> Self {
        Self {
            store,
            locks,
            key: key.into(),
            sort: None,
        }
    }

    /// Creates a collection kept sorted by `sort` after every insert and
    /// update.
    pub fn with_sort(
        store: Arc<S>,
        locks: Arc<KeyLocks>,
        key: impl Into<String>,
        sort: SortFn<T>,
    ) -> Self {
        Self {
            store,
            locks,
            key: key.into(),
            sort: Some(sort),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the full collection.
    ///
    /// Fails closed: an absent key, a store read failure or a corrupt blob
    /// all yield an empty list. Failures are logged with the key.
    pub fn load(&self) -> Vec<T> {
        self.read_or_empty()
    }

    /// Prepends `record` and persists the new sequence, returning it.
    pub fn insert_front(&self, record: T) -> CollectionResult<Vec<T>> {
        record.validate()?;
        let lock = self.locks.for_key(&self.key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_or_empty();
        items.insert(0, record);
        self.write(&items)?;
        Ok(items)
    }

    /// Inserts `record` honoring the collection's ordering policy: front
    /// insertion by default, sorted insertion under a comparator.
    pub fn insert(&self, record: T) -> CollectionResult<Vec<T>> {
        record.validate()?;
        let lock = self.locks.for_key(&self.key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_or_empty();
        match self.sort {
            Some(sort) => {
                items.push(record);
                items.sort_by(sort);
            }
            None => items.insert(0, record),
        }
        self.write(&items)?;
        Ok(items)
    }

    /// Applies `apply` to the record with `id` and persists the result.
    ///
    /// Returns `false` without touching the store when no record matches.
    /// The mutated record is re-validated before the write; under a
    /// comparator the sequence is re-sorted first.
    pub fn update_by_id<F>(&self, id: &str, apply: F) -> CollectionResult<bool>
    where
        F: FnOnce(&mut T),
    {
        let lock = self.locks.for_key(&self.key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_or_empty();
        let Some(target) = items.iter_mut().find(|item| item.id() == id) else {
            return Ok(false);
        };
        apply(target);
        target.validate()?;
        if let Some(sort) = self.sort {
            items.sort_by(sort);
        }
        self.write(&items)?;
        Ok(true)
    }

    /// Removes the record with `id` and persists the remaining sequence.
    ///
    /// Returns whether a record was removed. Deleting an absent id is not
    /// an error, including on an empty collection.
    pub fn delete_by_id(&self, id: &str) -> CollectionResult<bool> {
        let lock = self.locks.for_key(&self.key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_or_empty();
        let before = items.len();
        items.retain(|item| item.id() != id);
        let changed = items.len() != before;
        self.write(&items)?;
        Ok(changed)
    }

    /// Replaces the entire sequence, sorting first under a comparator.
    pub fn replace_all(&self, mut records: Vec<T>) -> CollectionResult<()> {
        for record in &records {
            record.validate()?;
        }
        if let Some(sort) = self.sort {
            records.sort_by(sort);
        }
        let lock = self.locks.for_key(&self.key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.write(&records)
    }

    /// Removes the whole collection blob. Idempotent.
    pub fn clear(&self) -> CollectionResult<()> {
        let lock = self.locks.for_key(&self.key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.store.remove(&self.key).map_err(CollectionError::from)
    }

    fn read_or_empty(&self) -> Vec<T> {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!(
                        "event=collection_load module=repo status=corrupt key={} error={}",
                        self.key, err
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=collection_load module=repo status=read_error key={} error={}",
                    self.key, err
                );
                Vec::new()
            }
        }
    }

    fn write(&self, items: &[T]) -> CollectionResult<()> {
        let raw = serde_json::to_string(items)?;
        if let Err(err) = self.store.set(&self.key, &raw) {
            error!(
                "event=collection_write module=repo status=error key={} error={}",
                self.key, err
            );
            return Err(err.into());
        }
        Ok(())
    }
}
