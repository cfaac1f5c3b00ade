//! Per-entity repository set with fixed storage keys.
//!
//! One instance per store handle is the intended shape: screens and
//! services receive their collection from here instead of reaching for
//! ambient storage keys.

use crate::model::entries::{Appointment, CareLogEntry, JournalNote, Memory, MemoryCard};
use crate::repo::collection::{Collection, KeyLocks};
use crate::store::KvStore;
use std::cmp::Ordering;
use std::sync::Arc;

pub const MEMORIES_KEY: &str = "imageMemories";
pub const CARDS_KEY: &str = "memoryCards";
pub const JOURNAL_KEY: &str = "journalNotes";
pub const CARE_LOG_KEY: &str = "careLog";
pub const APPOINTMENTS_KEY: &str = "medicalAppointments";

/// The five durable collections, sharing one store and one lock registry.
///
/// Memories, cards, journal notes and care log entries are
/// most-recent-first; appointments stay sorted ascending by timestamp.
pub struct CareRepositories<S: KvStore> {
    pub memories: Collection<Memory, S>,
    pub cards: Collection<MemoryCard, S>,
    pub journal: Collection<JournalNote, S>,
    pub care_log: Collection<CareLogEntry, S>,
    pub appointments: Collection<Appointment, S>,
}

impl<S: KvStore> CareRepositories<S> {
    pub fn new(store: Arc<S>) -> Self {
        let locks = Arc::new(KeyLocks::new());
        Self {
            memories: Collection::new(Arc::clone(&store), Arc::clone(&locks), MEMORIES_KEY),
            cards: Collection::new(Arc::clone(&store), Arc::clone(&locks), CARDS_KEY),
            journal: Collection::new(Arc::clone(&store), Arc::clone(&locks), JOURNAL_KEY),
            care_log: Collection::new(Arc::clone(&store), Arc::clone(&locks), CARE_LOG_KEY),
            appointments: Collection::with_sort(store, locks, APPOINTMENTS_KEY, by_timestamp),
        }
    }
}

fn by_timestamp(a: &Appointment, b: &Appointment) -> Ordering {
    a.timestamp.cmp(&b.timestamp)
}
