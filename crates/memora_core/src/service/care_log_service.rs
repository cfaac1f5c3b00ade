//! Caregiver log use-cases.

use crate::model::entries::CareLogEntry;
use crate::model::record::non_empty;
use crate::repo::collection::Collection;
use crate::service::confirm::Confirmation;
use crate::service::{clock_time, short_date, ServiceResult};
use crate::store::KvStore;
use chrono::Local;

pub struct CareLogService<S: KvStore, C: Confirmation> {
    care_log: Collection<CareLogEntry, S>,
    confirm: C,
}

impl<S: KvStore, C: Confirmation> CareLogService<S, C> {
    pub fn new(care_log: Collection<CareLogEntry, S>, confirm: C) -> Self {
        Self { care_log, confirm }
    }

    /// Records an observation stamped with the current date and time.
    pub fn add(&self, category: &str, description: &str) -> ServiceResult<CareLogEntry> {
        let category = non_empty("category", category)?;
        let description = non_empty("description", description)?;

        let now = Local::now();
        let entry = CareLogEntry::new(category, description, short_date(&now), clock_time(&now));
        self.care_log.insert_front(entry.clone())?;
        Ok(entry)
    }

    /// Rewrites category and description of an entry, keeping its original
    /// date and time. Returns `false` when the id is unknown.
    pub fn edit(&self, id: &str, category: &str, description: &str) -> ServiceResult<bool> {
        let category = non_empty("category", category)?;
        let description = non_empty("description", description)?;
        Ok(self.care_log.update_by_id(id, |entry| {
            entry.category = category;
            entry.description = description;
        })?)
    }

    pub fn list(&self) -> Vec<CareLogEntry> {
        self.care_log.load()
    }

    /// Deletes an entry after confirmation; `false` on decline or unknown
    /// id.
    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        if !self
            .confirm
            .confirm("Delete entry", "Do you want to delete this log entry?")
        {
            return Ok(false);
        }
        Ok(self.care_log.delete_by_id(id)?)
    }
}
