//! Photo memory use-cases.
//!
//! # Responsibility
//! - Validate and stamp new memories before persistence.
//! - Gate deletion behind confirmation.
//!
//! # Invariants
//! - A memory is never persisted without title, description and image.
//! - Deletion reports `true` only after the store confirmed the write.

use crate::model::entries::Memory;
use crate::model::record::non_empty;
use crate::repo::collection::Collection;
use crate::service::confirm::Confirmation;
use crate::service::{long_date, ServiceResult};
use crate::store::KvStore;
use chrono::Local;

pub struct MemoryService<S: KvStore, C: Confirmation> {
    memories: Collection<Memory, S>,
    confirm: C,
}

impl<S: KvStore, C: Confirmation> MemoryService<S, C> {
    pub fn new(memories: Collection<Memory, S>, confirm: C) -> Self {
        Self { memories, confirm }
    }

    /// Creates a memory stamped with a fresh id and today's long-form date,
    /// inserted at the front of the collection.
    ///
    /// # Errors
    /// - `ServiceError::Validation` when any field is blank; the store is
    ///   not touched.
    /// - `ServiceError::Collection` when the write fails; persisted state
    ///   is unchanged.
    pub fn add(&self, title: &str, description: &str, image: &str) -> ServiceResult<Memory> {
        let title = non_empty("title", title)?;
        let description = non_empty("description", description)?;
        let image = non_empty("image", image)?;

        let memory = Memory::new(title, description, image, long_date(&Local::now()));
        self.memories.insert_front(memory.clone())?;
        Ok(memory)
    }

    /// Most-recent-first list of all memories.
    pub fn list(&self) -> Vec<Memory> {
        self.memories.load()
    }

    /// Deletes a memory after confirmation.
    ///
    /// Returns `false` when the user declines or the id is unknown; in
    /// either case nothing changed.
    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        if !self
            .confirm
            .confirm("Delete memory", "Do you want to delete this memory?")
        {
            return Ok(false);
        }
        Ok(self.memories.delete_by_id(id)?)
    }
}
