use super::KeyValueStore;
use crate::models::HistoryEntry;

pub const HISTORY_KEY: &str = "ytHistory";
pub const HISTORY_LIMIT: usize = 5;

/// Recently viewed videos, most recent first.
pub struct HistoryStore<S> {
    storage: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Missing or unreadable history is treated as empty.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let Some(raw) = self.storage.get_item(HISTORY_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(entries) => normalize(entries),
            Err(e) => {
                log::warn!("Discarding unreadable history: {e}");
                Vec::new()
            }
        }
    }

    /// Upserts `entry` at the front and returns the list as persisted.
    pub fn record(&self, entry: HistoryEntry) -> Result<Vec<HistoryEntry>, String> {
        let history = push_entry(self.load(), entry);
        self.save(&history)?;
        Ok(history)
    }

    pub fn save(&self, history: &[HistoryEntry]) -> Result<(), String> {
        let json = serde_json::to_string(history)
            .map_err(|e| format!("Failed to serialize history: {e}"))?;
        self.storage.set_item(HISTORY_KEY, &json)
    }

    pub fn clear(&self) -> Result<(), String> {
        self.storage.remove_item(HISTORY_KEY)
    }
}

pub fn push_entry(history: Vec<HistoryEntry>, entry: HistoryEntry) -> Vec<HistoryEntry> {
    let mut updated = Vec::with_capacity(HISTORY_LIMIT);
    updated.push(entry);
    updated.extend(history);
    normalize(updated)
}

// First occurrence of an id wins; list is cut to the limit.
fn normalize(entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    let mut seen: Vec<String> = Vec::with_capacity(HISTORY_LIMIT);
    entries
        .into_iter()
        .filter(|e| {
            if seen.contains(&e.id) {
                false
            } else {
                seen.push(e.id.clone());
                true
            }
        })
        .take(HISTORY_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn entry(id: &str) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            title: format!("Video {id}"),
            thumb: format!("https://i.ytimg.com/vi/{id}/default.jpg"),
        }
    }

    fn ids(history: &[HistoryEntry]) -> Vec<&str> {
        history.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn newest_entry_goes_first_and_list_is_capped() {
        let store = HistoryStore::new(MemoryStorage::default());
        for id in ["a", "b", "c", "d", "e", "f", "g"] {
            store.record(entry(id)).unwrap();
        }
        let history = store.load();
        assert_eq!(ids(&history), vec!["g", "f", "e", "d", "c"]);
    }

    #[test]
    fn duplicate_moves_to_front_without_growing() {
        let store = HistoryStore::new(MemoryStorage::default());
        for id in ["a", "b", "c"] {
            store.record(entry(id)).unwrap();
        }
        let history = store.record(entry("a")).unwrap();
        assert_eq!(ids(&history), vec!["a", "c", "b"]);
    }

    #[test]
    fn never_exceeds_limit_or_repeats_ids() {
        let mut history = Vec::new();
        for i in 0..50 {
            history = push_entry(history, entry(&format!("id{}", i % 7)));
            assert!(history.len() <= HISTORY_LIMIT);
            let mut unique = ids(&history);
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), history.len());
        }
    }

    #[test]
    fn saved_history_reloads_identically() {
        let store = HistoryStore::new(MemoryStorage::default());
        let history = vec![entry("x"), entry("y"), entry("z")];
        store.save(&history).unwrap();
        assert_eq!(store.load(), history);
    }

    #[test]
    fn corrupt_or_missing_history_is_empty() {
        let storage = MemoryStorage::default();
        storage.set_item(HISTORY_KEY, "{not json").unwrap();
        let store = HistoryStore::new(storage);
        assert!(store.load().is_empty());

        let store = HistoryStore::new(MemoryStorage::default());
        assert!(store.load().is_empty());
    }

    #[test]
    fn hand_edited_storage_is_normalized_on_load() {
        let storage = MemoryStorage::default();
        let stored = vec![
            entry("a"),
            entry("a"),
            entry("b"),
            entry("c"),
            entry("d"),
            entry("e"),
            entry("f"),
        ];
        storage
            .set_item(HISTORY_KEY, &serde_json::to_string(&stored).unwrap())
            .unwrap();
        let store = HistoryStore::new(storage);
        assert_eq!(ids(&store.load()), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn clear_removes_everything() {
        let store = HistoryStore::new(MemoryStorage::default());
        store.record(entry("a")).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_empty());
    }
}
