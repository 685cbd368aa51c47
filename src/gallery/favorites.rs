// SPDX-License-Identifier: MPL-2.0
//! User-marked images, persisted as a JSON array under [`FAVORITES_KEY`].
//!
//! Every mutation is write-through: the resulting list is serialized and
//! stored first, and memory is only updated once the write succeeded. After
//! any completed call the in-memory list equals the stored one.

use super::record::ImageRecord;
use crate::error::StorageError;
use crate::storage::{KeyValueStore, StorageResult, FAVORITES_KEY};
use std::sync::Arc;

pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    favorites: Vec<ImageRecord>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("favorites", &self.favorites.len())
            .finish()
    }
}

impl FavoritesStore {
    /// Loads the persisted favorites.
    ///
    /// Unreadable or corrupt data yields an empty list and a notification key.
    /// Duplicate ids in stored data are collapsed to their first occurrence.
    pub fn load(store: Arc<dyn KeyValueStore>) -> (Self, Option<String>) {
        let (favorites, warning) = match store.get(FAVORITES_KEY) {
            Ok(None) => (Vec::new(), None),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ImageRecord>>(&raw) {
                Ok(records) => (dedup_by_id(records), None),
                Err(err) => {
                    log::warn!("Stored favorites are corrupt, starting empty: {err}");
                    (
                        Vec::new(),
                        Some("notification-favorites-load-error".to_string()),
                    )
                }
            },
            Err(err) => {
                log::warn!("Cannot read stored favorites, starting empty: {err}");
                (
                    Vec::new(),
                    Some("notification-favorites-load-error".to_string()),
                )
            }
        };

        (Self { store, favorites }, warning)
    }

    pub fn favorites(&self) -> &[ImageRecord] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|record| record.id == id)
    }

    /// Removes `record` if its id is present, appends it otherwise.
    ///
    /// Returns whether the record is a favorite afterwards. On a storage
    /// failure the list is left as it was.
    pub fn toggle_favorite(&mut self, record: &ImageRecord) -> StorageResult<bool> {
        let mut next = self.favorites.clone();
        let now_favorite = match next.iter().position(|r| r.id == record.id) {
            Some(index) => {
                next.remove(index);
                false
            }
            None => {
                next.push(record.clone());
                true
            }
        };

        self.commit(next)?;
        Ok(now_favorite)
    }

    pub fn clear_favorites(&mut self) -> StorageResult<()> {
        self.commit(Vec::new())
    }

    /// Forgets the in-memory list without touching storage.
    ///
    /// Used after the storage itself has been wiped.
    pub fn forget(&mut self) {
        self.favorites.clear();
    }

    fn commit(&mut self, next: Vec<ImageRecord>) -> StorageResult<()> {
        let encoded =
            serde_json::to_string(&next).map_err(|err| StorageError::Encode(err.to_string()))?;

        if let Err(err) = self.store.set(FAVORITES_KEY, &encoded) {
            log::error!("Failed to persist favorites: {err}");
            return Err(err);
        }

        self.favorites = next;
        Ok(())
    }
}

fn dedup_by_id(records: Vec<ImageRecord>) -> Vec<ImageRecord> {
    let mut seen = std::collections::HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn record(id: &str) -> ImageRecord {
        ImageRecord::new(id, format!("https://img.test/{id}.jpg"))
    }

    fn stored(store: &MemoryStore) -> Option<String> {
        store.get(FAVORITES_KEY).unwrap()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let backing = Arc::new(MemoryStore::new());
        let (mut favorites, warning) = FavoritesStore::load(backing.clone());
        assert!(warning.is_none());
        assert!(favorites.is_empty());

        assert!(favorites.toggle_favorite(&record("a")).unwrap());
        assert!(favorites.is_favorite("a"));
        assert_eq!(favorites.favorites(), &[record("a")]);

        assert!(!favorites.toggle_favorite(&record("a")).unwrap());
        assert!(!favorites.is_favorite("a"));
        assert!(favorites.is_empty());
        assert_eq!(stored(&backing).as_deref(), Some("[]"));
    }

    #[test]
    fn toggle_twice_restores_prior_encoding() {
        let backing = Arc::new(MemoryStore::new());
        let (mut favorites, _) = FavoritesStore::load(backing.clone());
        favorites.toggle_favorite(&record("x")).unwrap();
        let before = stored(&backing);

        favorites.toggle_favorite(&record("y")).unwrap();
        favorites.toggle_favorite(&record("y")).unwrap();

        assert_eq!(stored(&backing), before);
        assert_eq!(favorites.favorites(), &[record("x")]);
    }

    #[test]
    fn insertion_order_is_kept() {
        let backing = Arc::new(MemoryStore::new());
        let (mut favorites, _) = FavoritesStore::load(backing);
        for id in ["c", "a", "b"] {
            favorites.toggle_favorite(&record(id)).unwrap();
        }
        favorites.toggle_favorite(&record("a")).unwrap();

        let ids: Vec<_> = favorites.favorites().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn memory_equals_storage_after_each_mutation() {
        let backing = Arc::new(MemoryStore::new());
        let (mut favorites, _) = FavoritesStore::load(backing.clone());

        for id in ["a", "b", "a", "c"] {
            favorites.toggle_favorite(&record(id)).unwrap();
            let persisted: Vec<ImageRecord> =
                serde_json::from_str(&stored(&backing).unwrap()).unwrap();
            assert_eq!(persisted, favorites.favorites());
        }

        favorites.clear_favorites().unwrap();
        assert_eq!(stored(&backing).as_deref(), Some("[]"));
    }

    #[test]
    fn failed_write_leaves_memory_unchanged() {
        let backing = Arc::new(MemoryStore::new());
        let (mut favorites, _) = FavoritesStore::load(backing.clone());
        favorites.toggle_favorite(&record("a")).unwrap();
        backing.set_read_only(true);

        let result = favorites.toggle_favorite(&record("b"));
        assert!(matches!(result, Err(StorageError::Write(_))));
        assert!(!favorites.is_favorite("b"));
        assert_eq!(favorites.len(), 1);

        assert!(favorites.clear_favorites().is_err());
        assert!(favorites.is_favorite("a"));
    }

    #[test]
    fn load_restores_persisted_list() {
        let backing = Arc::new(MemoryStore::new());
        {
            let (mut favorites, _) = FavoritesStore::load(backing.clone());
            favorites.toggle_favorite(&record("a")).unwrap();
            favorites.toggle_favorite(&record("b")).unwrap();
        }

        let (reloaded, warning) = FavoritesStore::load(backing);
        assert!(warning.is_none());
        assert_eq!(reloaded.favorites(), &[record("a"), record("b")]);
    }

    #[test]
    fn corrupt_payload_degrades_to_empty() {
        let backing = Arc::new(MemoryStore::new().with_value(FAVORITES_KEY, "{not json"));
        let (favorites, warning) = FavoritesStore::load(backing);
        assert!(favorites.is_empty());
        assert_eq!(warning.as_deref(), Some("notification-favorites-load-error"));
    }

    #[test]
    fn stored_duplicates_are_collapsed() {
        let payload = serde_json::to_string(&vec![record("a"), record("b"), record("a")]).unwrap();
        let backing = Arc::new(MemoryStore::new().with_value(FAVORITES_KEY, &payload));
        let (favorites, _) = FavoritesStore::load(backing);
        assert_eq!(favorites.len(), 2);
    }
}
