use crate::errors::BridgeResult;
use std::ops::Deref;
use std::sync::Arc;

/// Low-level interface to the host-provided key/value storage facility.
///
/// # Purpose
/// Defines the contract that all store implementations must follow. The bridge
/// delegates every persistence operation to a provider; modeling the store as
/// an injected capability rather than a singleton keeps the bridge testable
/// against an in-memory fake.
///
/// # Key Responsibilities
/// - **Reads**: Return the raw text stored under a key, or `None` if the key
///   has never been written
/// - **Writes**: Replace the contents of a key unconditionally
///
/// # Implementations
/// - `InMemoryStore`: In-memory storage for testing/temporary use
///
/// # Thread Safety
/// Implementers must be `Send + Sync` for safe use in concurrent contexts.
pub trait KeyValueStoreProvider: Send + Sync {
    /// Reads the raw text stored under `key`.
    ///
    /// An absent key is not an error; it reads as `None`. The distinction
    /// between "absent" and "present but empty" is preserved.
    ///
    /// # Arguments
    /// * `key` - The slot to read
    ///
    /// # Returns
    /// * `Ok(Some(text))` if the key holds a value
    /// * `Ok(None)` if the key has never been written
    /// * `Err(BridgeError)` if the backend fails
    fn read(&self, key: &str) -> BridgeResult<Option<String>>;

    /// Writes `text` under `key`, overwriting any prior contents.
    ///
    /// Writes are atomic at single-key granularity: a rejected write must
    /// leave the prior contents intact.
    ///
    /// # Arguments
    /// * `key` - The slot to write
    /// * `text` - The raw text to store
    ///
    /// # Returns
    /// * `Ok(())` if the write was accepted
    /// * `Err(BridgeError)` if the backend rejects the write (e.g. quota)
    fn write(&self, key: &str, text: &str) -> BridgeResult<()>;
}

/// High-level handle to the host key/value store.
///
/// # Purpose
/// `KeyValueStore` provides the public API for interacting with a storage
/// facility. It wraps a concrete `KeyValueStoreProvider` implementation using
/// `Arc` for efficient, thread-safe sharing across the application.
///
/// # Characteristics
/// - **Thread-Safe**: Can be safely cloned and shared across threads
/// - **Provider-Agnostic**: Works with any `KeyValueStoreProvider` implementation
/// - **Ergonomic**: Implements `Deref` for seamless access to provider methods
/// - **Lightweight**: Cloning is cheap - only increments the reference count
///
/// # Usage Example
/// ```text
/// let store = KeyValueStore::new(InMemoryStore::new());
/// store.write("phrases", "[\"bonjour\"]").unwrap();
/// let text = store.read("phrases").unwrap();
/// ```
#[derive(Clone)]
pub struct KeyValueStore {
    inner: Arc<dyn KeyValueStoreProvider>,
}

impl KeyValueStore {
    /// Creates a new `KeyValueStore` wrapping a provider implementation.
    ///
    /// # Arguments
    /// * `inner` - A concrete implementation of `KeyValueStoreProvider`
    ///
    /// # Returns
    /// A new `KeyValueStore` that dereferences to `Arc<dyn KeyValueStoreProvider>`
    pub fn new<T: KeyValueStoreProvider + 'static>(inner: T) -> Self {
        KeyValueStore {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for KeyValueStore {
    type Target = Arc<dyn KeyValueStoreProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
impl Default for KeyValueStore {
    fn default() -> Self {
        KeyValueStore::new(crate::store::memory::InMemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{BridgeError, ErrorKind};

    #[derive(Clone)]
    struct MockKeyValueStore;

    impl KeyValueStoreProvider for MockKeyValueStore {
        fn read(&self, key: &str) -> BridgeResult<Option<String>> {
            match key {
                "known" => Ok(Some("[1,2]".to_string())),
                _ => Ok(None),
            }
        }

        fn write(&self, _key: &str, _text: &str) -> BridgeResult<()> {
            Err(BridgeError::new("Write rejected", ErrorKind::StoreWriteError))
        }
    }

    #[test]
    fn test_read_known_key() {
        let store = KeyValueStore::new(MockKeyValueStore);
        assert_eq!(store.read("known").unwrap(), Some("[1,2]".to_string()));
    }

    #[test]
    fn test_read_absent_key() {
        let store = KeyValueStore::new(MockKeyValueStore);
        assert!(store.read("missing").unwrap().is_none());
    }

    #[test]
    fn test_write_failure_surfaces() {
        let store = KeyValueStore::new(MockKeyValueStore);
        let result = store.write("known", "[]");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::StoreWriteError);
    }

    #[test]
    fn test_store_cloning_efficiency() {
        // Cloning shares the same provider through Arc
        let store1 = KeyValueStore::new(MockKeyValueStore);
        let store2 = store1.clone();

        assert!(store1.read("known").unwrap().is_some());
        assert!(store2.read("known").unwrap().is_some());
    }

    #[test]
    fn test_default_is_in_memory() {
        let store = KeyValueStore::default();
        assert!(store.read("anything").unwrap().is_none());
        assert!(store.write("anything", "[]").is_ok());
    }
}
