use crate::errors::BridgeResult;
use crate::store::KeyValueStoreProvider;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory implementation of the host key/value store.
///
/// # Purpose
/// `InMemoryStore` provides a complete storage facility suitable for testing
/// and for embedding the bridge without a real host store. All data lives in
/// memory in a concurrent map and is lost when the store is dropped.
///
/// # Characteristics
/// - **Thread-Safe**: Fully concurrent with safe data sharing across threads
/// - **Temporary Storage**: Perfect for unit tests and temporary use cases
/// - **No Persistence**: All data is lost when the store is dropped
///
/// # Usage
/// ```text
/// let store = InMemoryStore::new();
/// let kv = KeyValueStore::new(store.clone());
/// kv.write("phrases", "[]").unwrap();
/// assert_eq!(store.size(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<InMemoryStoreInner>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> InMemoryStore {
        InMemoryStore {
            inner: Arc::new(InMemoryStoreInner::new()),
        }
    }

    /// Returns the number of keys currently stored.
    pub fn size(&self) -> usize {
        self.inner.entries.len()
    }

    /// Checks whether a key currently holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.entries.contains_key(key)
    }
}

impl KeyValueStoreProvider for InMemoryStore {
    fn read(&self, key: &str) -> BridgeResult<Option<String>> {
        Ok(self.inner.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn write(&self, key: &str, text: &str) -> BridgeResult<()> {
        self.inner
            .entries
            .insert(key.to_string(), text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryStoreInner {
    entries: DashMap<String, String>,
}

impl InMemoryStoreInner {
    fn new() -> InMemoryStoreInner {
        InMemoryStoreInner {
            entries: DashMap::new(),
        }
    }
}
