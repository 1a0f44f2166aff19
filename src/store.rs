//! In-memory note storage: a sharded concurrent map plus an atomic id counter.

use crate::model::Note;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrent note store. Ids come from a process-wide counter, strictly
/// increasing from 1, and are never reused after deletion. Absence is a normal
/// result at this layer; the service decides whether it is an error.
#[derive(Debug)]
pub struct NoteStore {
    notes: DashMap<u64, Note>,
    next_id: AtomicU64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Insert a new note under the next id, with createdAt == updatedAt == now.
    pub fn save(&self, title: &str, body: &str) -> Note {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let now = Utc::now();
        let note = Note {
            id,
            title: title.to_owned(),
            body: body.to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.notes.insert(id, note.clone());
        note
    }

    /// Snapshot of all current notes. Iteration order is the map's, not
    /// insertion order.
    pub fn find_all(&self) -> Vec<Note> {
        self.notes.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn find_by_id(&self, id: u64) -> Option<Note> {
        self.notes.get(&id).map(|entry| entry.value().clone())
    }

    /// Replace title and body, bumping updatedAt; id and createdAt are
    /// preserved. The swap runs under the entry lock, so a racing reader or
    /// delete observes the note before or after, never in between.
    pub fn update(&self, id: u64, title: &str, body: &str) -> Option<Note> {
        self.notes.get_mut(&id).map(|mut entry| {
            let note = entry.value_mut();
            note.title = title.to_owned();
            note.body = body.to_owned();
            note.updated_at = Utc::now();
            note.clone()
        })
    }

    /// Remove the note; true iff it existed.
    pub fn delete(&self, id: u64) -> bool {
        self.notes.remove(&id).is_some()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn save_assigns_sequential_ids_from_one() {
        let store = NoteStore::new();
        assert_eq!(store.save("a", "b").id, 1);
        assert_eq!(store.save("c", "d").id, 2);
    }

    #[test]
    fn save_sets_created_equal_to_updated() {
        let store = NoteStore::new();
        let note = store.save("a", "b");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn find_by_id_returns_a_clone_of_the_saved_note() {
        let store = NoteStore::new();
        let saved = store.save("title", "body");
        assert_eq!(store.find_by_id(saved.id).unwrap(), saved);
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn find_all_snapshots_every_note() {
        let store = NoteStore::new();
        store.save("a", "1");
        store.save("b", "2");
        store.save("c", "3");
        let mut ids: Vec<u64> = store.find_all().into_iter().map(|n| n.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn update_replaces_fields_and_preserves_id_and_created_at() {
        let store = NoteStore::new();
        let saved = store.save("old", "old body");
        std::thread::sleep(Duration::from_millis(5));
        let updated = store.update(saved.id, "new", "new body").unwrap();
        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.created_at, saved.created_at);
        assert_eq!(updated.title, "new");
        assert_eq!(updated.body, "new body");
        assert!(updated.updated_at > saved.updated_at);
    }

    #[test]
    fn update_missing_id_returns_none() {
        let store = NoteStore::new();
        assert!(store.update(7, "t", "b").is_none());
    }

    #[test]
    fn delete_is_true_once_then_false() {
        let store = NoteStore::new();
        let id = store.save("a", "b").id;
        assert!(store.delete(id));
        assert!(!store.delete(id));
        assert!(store.find_by_id(id).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = NoteStore::new();
        let first = store.save("a", "b").id;
        assert!(store.delete(first));
        let second = store.save("c", "d").id;
        assert!(second > first);
    }

    #[test]
    fn concurrent_saves_yield_distinct_ids() {
        let store = Arc::new(NoteStore::new());
        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.save("t", "b").id)
            })
            .collect();
        let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        assert_eq!(store.find_all().len(), 32);
    }

    #[test]
    fn concurrent_update_and_delete_leave_the_id_present_or_absent() {
        let store = Arc::new(NoteStore::new());
        let id = store.save("t", "b").id;

        let updater = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.update(id, "new", "new body"))
        };
        let deleter = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.delete(id))
        };
        let updated = updater.join().unwrap();
        let deleted = deleter.join().unwrap();

        // The note existed, so the delete always wins eventually.
        assert!(deleted);
        assert!(store.find_by_id(id).is_none());
        // If the update got in first, it must have swapped both fields.
        if let Some(note) = updated {
            assert_eq!(note.title, "new");
            assert_eq!(note.body, "new body");
        }
    }
}
