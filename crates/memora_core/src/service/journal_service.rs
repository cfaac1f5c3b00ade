//! Journal note use-cases.

use crate::model::entries::JournalNote;
use crate::model::record::non_empty;
use crate::repo::collection::Collection;
use crate::service::confirm::Confirmation;
use crate::service::{long_date, ServiceResult};
use crate::store::KvStore;
use chrono::Local;

pub struct JournalService<S: KvStore, C: Confirmation> {
    journal: Collection<JournalNote, S>,
    confirm: C,
}

impl<S: KvStore, C: Confirmation> JournalService<S, C> {
    pub fn new(journal: Collection<JournalNote, S>, confirm: C) -> Self {
        Self { journal, confirm }
    }

    /// Saves a new note stamped with today's long-form date.
    ///
    /// Blank text is rejected before anything reaches storage.
    pub fn save(&self, text: &str) -> ServiceResult<JournalNote> {
        let text = non_empty("text", text)?;
        let note = JournalNote::new(text, long_date(&Local::now()));
        self.journal.insert_front(note.clone())?;
        Ok(note)
    }

    /// Rewrites the text of an existing note, keeping its date.
    ///
    /// Returns `false` when the id is unknown.
    pub fn save_edit(&self, id: &str, text: &str) -> ServiceResult<bool> {
        let text = non_empty("text", text)?;
        Ok(self.journal.update_by_id(id, |note| note.text = text)?)
    }

    pub fn list(&self) -> Vec<JournalNote> {
        self.journal.load()
    }

    /// Deletes a note after confirmation; `false` on decline or unknown id.
    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        if !self
            .confirm
            .confirm("Delete note", "Are you sure you want to delete this note?")
        {
            return Ok(false);
        }
        Ok(self.journal.delete_by_id(id)?)
    }
}
