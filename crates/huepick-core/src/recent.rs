//! Recently used colors, most recent first.

use crate::storage::{KeyValueStore, StorageResult};
use std::sync::Arc;

/// Maximum number of recent colors to keep.
pub const MAX_RECENT_COLORS: usize = 8;

/// Key the history is persisted under.
pub const RECENT_COLORS_KEY: &str = "recentColors";

/// A deduplicated, capacity-bounded history of colors.
///
/// Entries are stored exactly as given; the most recently added entry is
/// always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentColors {
    colors: Vec<String>,
    capacity: usize,
}

impl Default for RecentColors {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentColors {
    /// Create an empty history holding up to [`MAX_RECENT_COLORS`] entries.
    pub fn new() -> Self {
        Self::with_capacity(MAX_RECENT_COLORS)
    }

    /// Create an empty history holding up to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: Vec::new(),
            capacity,
        }
    }

    /// Restore a history from previously persisted entries.
    ///
    /// Entries are trusted as-is: they are neither validated nor truncated.
    pub fn from_entries(colors: Vec<String>, capacity: usize) -> Self {
        Self { colors, capacity }
    }

    /// Parse a persisted JSON array of colors.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self, serde_json::Error> {
        let colors: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::from_entries(colors, capacity))
    }

    /// Serialize the history as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.colors)
    }

    /// The history with `color` moved (or inserted) to the front.
    ///
    /// Every existing occurrence of `color` is removed first, and the
    /// result is truncated to the capacity.
    pub fn with_added(&self, color: &str) -> Self {
        let mut colors = Vec::with_capacity(self.colors.len() + 1);
        colors.push(color.to_string());
        colors.extend(self.colors.iter().filter(|c| *c != color).cloned());
        colors.truncate(self.capacity);
        Self {
            colors,
            capacity: self.capacity,
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A [`RecentColors`] history persisted through a [`KeyValueStore`].
///
/// The history is read once on [`load`](Self::load) and rewritten in full
/// on every [`add`](Self::add).
pub struct RecentColorsStore<S: KeyValueStore> {
    /// Storage backend.
    storage: Arc<S>,
    /// Key the history lives under.
    key: String,
    /// Current history.
    history: RecentColors,
}

impl<S: KeyValueStore> RecentColorsStore<S> {
    /// Load the history stored under `key`.
    ///
    /// Never fails: a missing, unreadable or malformed value yields an
    /// empty history.
    pub fn load(storage: Arc<S>, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let history = match storage.get(&key) {
            Ok(Some(json)) => match RecentColors::from_json(&json, capacity) {
                Ok(history) => {
                    log::debug!("Loaded {} recent colors", history.len());
                    history
                }
                Err(e) => {
                    log::warn!("Ignoring malformed recent colors under {:?}: {}", key, e);
                    RecentColors::with_capacity(capacity)
                }
            },
            Ok(None) => RecentColors::with_capacity(capacity),
            Err(e) => {
                log::warn!("Failed to read recent colors: {}", e);
                RecentColors::with_capacity(capacity)
            }
        };

        Self {
            storage,
            key,
            history,
        }
    }

    /// Add `color` to the front of the history and persist the result.
    ///
    /// The in-memory history is updated even if persisting fails; the
    /// storage error is returned to the caller.
    pub fn add(&mut self, color: &str) -> StorageResult<&[String]> {
        self.history = self.history.with_added(color);
        let json = self.history.to_json()?;
        self.storage.set(&self.key, &json)?;
        Ok(self.history.colors())
    }

    pub fn history(&self) -> &RecentColors {
        &self.history
    }

    pub fn colors(&self) -> &[String] {
        self.history.colors()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("offline".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Io("quota exceeded".to_string()))
        }
    }

    fn empty_store() -> RecentColorsStore<MemoryStore> {
        RecentColorsStore::load(Arc::new(MemoryStore::new()), RECENT_COLORS_KEY, MAX_RECENT_COLORS)
    }

    #[test]
    fn test_with_added_prepends() {
        let history = RecentColors::new().with_added("#111111").with_added("#222222");
        assert_eq!(history.colors(), ["#222222", "#111111"]);
    }

    #[test]
    fn test_with_added_does_not_mutate_original() {
        let history = RecentColors::new().with_added("#111111");
        let next = history.with_added("#222222");
        assert_eq!(history.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_with_added_removes_every_duplicate() {
        let history = RecentColors::from_entries(
            vec!["#aaaaaa".into(), "#bbbbbb".into(), "#aaaaaa".into()],
            MAX_RECENT_COLORS,
        );
        let next = history.with_added("#aaaaaa");
        assert_eq!(next.colors(), ["#aaaaaa", "#bbbbbb"]);
    }

    #[test]
    fn test_with_added_is_exact_match() {
        let history = RecentColors::new().with_added("#AAAAAA").with_added("#aaaaaa");
        assert_eq!(history.colors(), ["#aaaaaa", "#AAAAAA"]);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let history = RecentColors::with_capacity(0).with_added("#111111");
        assert!(history.is_empty());
    }

    #[test]
    fn test_scenario_readd_moves_to_front() {
        let mut store = empty_store();
        store.add("#111111").unwrap();
        store.add("#222222").unwrap();
        let colors = store.add("#111111").unwrap();
        assert_eq!(colors, ["#111111", "#222222"]);
    }

    #[test]
    fn test_readd_does_not_grow() {
        let mut store = empty_store();
        for color in ["#111111", "#222222", "#333333"] {
            store.add(color).unwrap();
        }
        store.add("#222222").unwrap();
        assert_eq!(store.colors(), ["#222222", "#333333", "#111111"]);
    }

    #[test]
    fn test_nine_distinct_colors_evicts_oldest() {
        let mut store = empty_store();
        let colors: Vec<String> = (1..=9).map(|i| format!("#{i}{i}{i}{i}{i}{i}")).collect();
        for color in &colors {
            store.add(color).unwrap();
        }

        let expected: Vec<String> = colors.iter().rev().take(8).cloned().collect();
        assert_eq!(store.colors(), expected.as_slice());
        assert!(!store.history().contains("#111111"));
        assert_eq!(store.history().get(0), Some("#999999"));
    }

    #[test]
    fn test_add_persists_full_history() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = RecentColorsStore::load(storage.clone(), RECENT_COLORS_KEY, MAX_RECENT_COLORS);

        store.add("#111111").unwrap();
        store.add("#222222").unwrap();

        let persisted = storage.get(RECENT_COLORS_KEY).unwrap().unwrap();
        assert_eq!(persisted, r##"["#222222","#111111"]"##);
    }

    #[test]
    fn test_load_round_trips_through_storage() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = RecentColorsStore::load(storage.clone(), RECENT_COLORS_KEY, MAX_RECENT_COLORS);
        store.add("#3498db").unwrap();
        store.add("#ff0000").unwrap();

        let reloaded = RecentColorsStore::load(storage, RECENT_COLORS_KEY, MAX_RECENT_COLORS);
        assert_eq!(reloaded.colors(), ["#ff0000", "#3498db"]);
    }

    #[test]
    fn test_load_missing_is_empty() {
        assert!(empty_store().history().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for value in ["not json", "{\"a\":1}", "[1,2,3]", "null"] {
            let storage = Arc::new(MemoryStore::with_entries([(RECENT_COLORS_KEY, value)]));
            let store = RecentColorsStore::load(storage, RECENT_COLORS_KEY, MAX_RECENT_COLORS);
            assert!(store.history().is_empty(), "{value:?} should load as empty");
        }
    }

    #[test]
    fn test_load_trusts_entries_verbatim() {
        let storage = Arc::new(MemoryStore::with_entries([(
            RECENT_COLORS_KEY,
            r##"["red","#ABCDEF","red"]"##,
        )]));
        let store = RecentColorsStore::load(storage, RECENT_COLORS_KEY, MAX_RECENT_COLORS);
        assert_eq!(store.colors(), ["red", "#ABCDEF", "red"]);
    }

    #[test]
    fn test_load_unreadable_storage_is_empty() {
        let store = RecentColorsStore::load(Arc::new(FailingStore), RECENT_COLORS_KEY, MAX_RECENT_COLORS);
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_add_storage_failure_keeps_valid_history() {
        let mut store = RecentColorsStore::load(Arc::new(FailingStore), RECENT_COLORS_KEY, MAX_RECENT_COLORS);

        let result = store.add("#111111");
        assert!(matches!(result, Err(StorageError::Io(_))));
        assert_eq!(store.colors(), ["#111111"]);
    }
}
