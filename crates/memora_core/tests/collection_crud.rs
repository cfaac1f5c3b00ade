use memora_core::{
    open_store_in_memory, Appointment, CareRepositories, Collection, JournalNote, KeyLocks,
    KvStore, Memory, Record,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn repos() -> CareRepositories<memora_core::SqliteKvStore> {
    let store = open_store_in_memory().unwrap();
    CareRepositories::new(Arc::new(store))
}

fn memory(id: &str, title: &str, date: &str) -> Memory {
    Memory {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        image: "file:///photos/sample.jpg".to_string(),
        date: date.to_string(),
    }
}

#[test]
fn insert_front_makes_record_the_first_element() {
    let repos = repos();

    repos
        .memories
        .insert_front(memory("1", "A", "2024-01-01"))
        .unwrap();
    repos
        .memories
        .insert_front(memory("2", "B", "2024-01-02"))
        .unwrap();

    let loaded = repos.memories.load();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, "2");
    assert_eq!(loaded[1].id, "1");
}

#[test]
fn insert_front_round_trip_contains_record_exactly_once() {
    let repos = repos();

    repos
        .memories
        .insert_front(memory("1", "picnic", "2024-03-09"))
        .unwrap();

    let loaded = repos.memories.load();
    assert_eq!(loaded.iter().filter(|m| m.id == "1").count(), 1);
}

#[test]
fn load_on_absent_key_is_empty() {
    let repos = repos();
    assert!(repos.memories.load().is_empty());
}

#[test]
fn update_by_id_is_a_noop_for_unknown_id() {
    let repos = repos();
    repos
        .memories
        .insert_front(memory("1", "A", "2024-01-01"))
        .unwrap();

    let changed = repos
        .memories
        .update_by_id("missing", |m| m.title = "changed".to_string())
        .unwrap();

    assert!(!changed);
    let loaded = repos.memories.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "A");
}

#[test]
fn update_by_id_rewrites_matching_record_in_place() {
    let repos = repos();
    repos
        .memories
        .insert_front(memory("1", "A", "2024-01-01"))
        .unwrap();
    repos
        .memories
        .insert_front(memory("2", "B", "2024-01-02"))
        .unwrap();

    let changed = repos
        .memories
        .update_by_id("1", |m| m.title = "A updated".to_string())
        .unwrap();

    assert!(changed);
    let loaded = repos.memories.load();
    assert_eq!(loaded[0].title, "B");
    assert_eq!(loaded[1].title, "A updated");
}

#[test]
fn delete_by_id_is_a_noop_for_unknown_id() {
    let repos = repos();
    repos
        .memories
        .insert_front(memory("1", "A", "2024-01-01"))
        .unwrap();

    let changed = repos.memories.delete_by_id("missing").unwrap();

    assert!(!changed);
    assert_eq!(repos.memories.load().len(), 1);
}

#[test]
fn delete_by_id_on_empty_collection_returns_empty_without_error() {
    let repos = repos();
    let changed = repos.memories.delete_by_id("anything").unwrap();
    assert!(!changed);
    assert!(repos.memories.load().is_empty());
}

#[test]
fn clear_twice_leaves_collection_empty_both_times() {
    let repos = repos();
    repos
        .memories
        .insert_front(memory("1", "A", "2024-01-01"))
        .unwrap();

    repos.memories.clear().unwrap();
    assert!(repos.memories.load().is_empty());

    repos.memories.clear().unwrap();
    assert!(repos.memories.load().is_empty());
}

#[test]
fn corrupt_blob_loads_as_empty_collection() {
    let store = Arc::new(open_store_in_memory().unwrap());
    let repos = CareRepositories::new(Arc::clone(&store));

    store
        .set(memora_core::repo::care_repos::JOURNAL_KEY, "{not json")
        .unwrap();

    assert!(repos.journal.load().is_empty());
}

#[test]
fn collections_on_distinct_keys_do_not_interfere() {
    let repos = repos();
    repos
        .memories
        .insert_front(memory("1", "A", "2024-01-01"))
        .unwrap();

    assert!(repos.journal.load().is_empty());
    assert!(repos.cards.load().is_empty());
    assert_eq!(repos.memories.load().len(), 1);
}

#[test]
fn replace_all_restores_sort_order_under_a_comparator() {
    let repos = repos();

    let late = Appointment::new("Dr. Soto", "bloodwork", "2026-01-02", "09:00", 2_000);
    let early = Appointment::new("Dr. Reyes", "checkup", "2026-01-01", "08:00", 1_000);
    repos.appointments.replace_all(vec![late, early]).unwrap();

    let listed = repos.appointments.load();
    assert_eq!(listed[0].timestamp, 1_000);
    assert_eq!(listed[1].timestamp, 2_000);
}

#[test]
fn concurrent_inserters_on_one_key_lose_no_records() {
    let store = Arc::new(open_store_in_memory().unwrap());
    let locks = Arc::new(KeyLocks::new());
    let journal: Collection<JournalNote, _> =
        Collection::new(Arc::clone(&store), locks, "journalNotes");

    let threads = 8;
    let per_thread = 5;
    let mut handles = Vec::new();
    for worker in 0..threads {
        let journal = journal.clone();
        handles.push(thread::spawn(move || {
            for i in 0..per_thread {
                journal
                    .insert_front(JournalNote::new(
                        format!("note {worker}-{i}"),
                        "Monday, March 4 2024",
                    ))
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let loaded = journal.load();
    assert_eq!(loaded.len(), threads * per_thread);

    let ids: HashSet<&str> = loaded.iter().map(|note| note.id()).collect();
    assert_eq!(ids.len(), threads * per_thread);
}
