use crate::bridge::{BridgeBuilder, StorageRequest, StorageResponse, TooltipListener};
use crate::common::{
    atomic, decode_value, default_item_value, encode_value, Atomic, ReadExecutor, WriteExecutor,
    USER_UUID_KEY,
};
use crate::errors::{BridgeError, BridgeResult, ErrorKind};
use crate::store::KeyValueStore;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Bridge between the application's message interface and the host key/value store.
///
/// # Purpose
/// `StorageBridge` mediates all traffic between the application and the host
/// storage facility. It receives typed requests, performs the corresponding
/// operation against the injected [`KeyValueStore`], and produces typed
/// responses. It owns no state of its own beyond the store's key/value
/// contents.
///
/// # Key Responsibilities
/// - **Item persistence**: Encode values to their stored textual form and
///   write them, acknowledging each write
/// - **Item retrieval**: Decode stored text, substituting the empty-list
///   default for keys that were never written
/// - **Identifier management**: Lazily generate, persist and serve the stable
///   per-client identifier under the reserved key
/// - **Tooltip forwarding**: Relay `ShowTooltips` triggers to registered
///   listeners
///
/// # Acknowledgment Policy
/// `SetItem` is always acknowledged. The acknowledgment carries the supplied
/// echo value when one is present and the persisted value otherwise, so the
/// caller can decouple the persisted snapshot from the payload it wants back.
///
/// # Thread Safety
/// The bridge is cheap to clone and safe to share across threads. Its only
/// check-then-act sequence, identifier generation, runs under an internal
/// mutex so racing calls persist exactly one identifier.
///
/// # Usage
/// ```text
/// let bridge = StorageBridge::builder()
///     .store(KeyValueStore::new(InMemoryStore::new()))
///     .build();
///
/// bridge.set_item("phrases", json!(["bonjour"]), None)?;
/// let (key, value) = bridge.get_item("phrases")?;
/// let uuid = bridge.get_or_create_user_uuid()?;
/// ```
#[derive(Clone)]
pub struct StorageBridge {
    inner: Arc<StorageBridgeInner>,
}

impl StorageBridge {
    /// Creates a new bridge over the given store.
    ///
    /// # Arguments
    /// * `store` - The host storage facility the bridge delegates to
    pub fn new(store: KeyValueStore) -> StorageBridge {
        StorageBridge {
            inner: Arc::new(StorageBridgeInner::new(store)),
        }
    }

    /// Returns a builder for configuring a bridge.
    pub fn builder() -> BridgeBuilder {
        BridgeBuilder::new()
    }

    /// Consumes one inbound request and produces its response, if any.
    ///
    /// This is the single dispatch point of the bridging protocol. Requests
    /// are processed to completion one at a time from the caller's
    /// perspective; responses come back in the order their requests were
    /// processed.
    ///
    /// # Returns
    /// * `Ok(Some(response))` for `SetItem`, `GetItem` and `GetUserUuid`
    /// * `Ok(None)` for `SetUserUuid` and `ShowTooltips`
    /// * `Err(BridgeError)` if the operation fails; no response claiming
    ///   success is ever produced for a failed operation
    pub fn dispatch(&self, request: StorageRequest) -> BridgeResult<Option<StorageResponse>> {
        match request {
            StorageRequest::SetItem {
                key,
                value,
                echo_value,
            } => {
                let value = self.inner.set_item(&key, value, echo_value)?;
                Ok(Some(StorageResponse::ItemSet { value }))
            }
            StorageRequest::GetItem { key } => {
                let (key, value) = self.inner.get_item(&key)?;
                Ok(Some(StorageResponse::Item { key, value }))
            }
            StorageRequest::GetUserUuid => {
                let uuid = self.inner.get_or_create_user_uuid()?;
                Ok(Some(StorageResponse::UserUuid { uuid }))
            }
            StorageRequest::SetUserUuid { uuid } => {
                self.inner.set_user_uuid(&uuid)?;
                Ok(None)
            }
            StorageRequest::ShowTooltips => {
                self.inner.show_tooltips()?;
                Ok(None)
            }
        }
    }

    /// Persists `value` under `key` and returns the acknowledgment payload.
    ///
    /// The value is encoded to its stored textual form before the write; an
    /// encoding failure aborts the operation with nothing written. The
    /// returned payload is `echo_value` when supplied and `value` otherwise.
    pub fn set_item(
        &self,
        key: &str,
        value: Value,
        echo_value: Option<Value>,
    ) -> BridgeResult<Value> {
        self.inner.set_item(key, value, echo_value)
    }

    /// Fetches the value stored under `key`, paired with the key itself.
    ///
    /// A key that was never written resolves to the empty-list default. A key
    /// holding text that is not valid encoded data fails with
    /// [`ErrorKind::DecodingError`]; corruption is never masked by the
    /// default.
    pub fn get_item(&self, key: &str) -> BridgeResult<(String, Value)> {
        self.inner.get_item(key)
    }

    /// Returns the stable per-client identifier, creating it if necessary.
    ///
    /// The identifier lives under the reserved `user_uuid` key. On first use a
    /// random version-4 UUID is generated, persisted and returned; thereafter
    /// the persisted token is returned unchanged. The read-check-write
    /// sequence is serialized internally, so concurrent callers all observe
    /// the same single persisted identifier.
    pub fn get_or_create_user_uuid(&self) -> BridgeResult<String> {
        self.inner.get_or_create_user_uuid()
    }

    /// Unconditionally overwrites the identifier slot with `uuid`.
    ///
    /// Supports explicit identifier assignment from an external source,
    /// bypassing the generate-if-absent policy.
    pub fn set_user_uuid(&self, uuid: &str) -> BridgeResult<()> {
        self.inner.set_user_uuid(uuid)
    }

    /// Forwards a tooltip trigger to every registered listener.
    ///
    /// Listener failures are logged and skipped; one failing listener does not
    /// starve the others and the trigger itself always succeeds.
    pub fn show_tooltips(&self) -> BridgeResult<()> {
        self.inner.show_tooltips()
    }

    /// Registers a listener invoked on each `ShowTooltips` request.
    pub fn add_tooltip_listener(&self, listener: TooltipListener) {
        self.inner.add_tooltip_listener(listener)
    }

    /// Returns a handle to the underlying store.
    pub fn store(&self) -> KeyValueStore {
        self.inner.store.clone()
    }
}

#[cfg(test)]
impl Default for StorageBridge {
    fn default() -> Self {
        StorageBridge::new(KeyValueStore::default())
    }
}

struct StorageBridgeInner {
    store: KeyValueStore,
    // serializes the read-check-write sequence of identifier generation
    uuid_guard: Mutex<()>,
    tooltip_listeners: Atomic<Vec<TooltipListener>>,
}

impl StorageBridgeInner {
    fn new(store: KeyValueStore) -> StorageBridgeInner {
        StorageBridgeInner {
            store,
            uuid_guard: Mutex::new(()),
            tooltip_listeners: atomic(Vec::new()),
        }
    }

    fn set_item(&self, key: &str, value: Value, echo_value: Option<Value>) -> BridgeResult<Value> {
        let text = encode_value(&value)?;
        self.store.write(key, &text)?;
        Ok(echo_value.unwrap_or(value))
    }

    fn get_item(&self, key: &str) -> BridgeResult<(String, Value)> {
        let value = match self.store.read(key)? {
            Some(text) => decode_value(&text).map_err(|e| {
                log::error!("Stored text under key {} is not valid encoded data", key);
                BridgeError::new_with_cause(
                    &format!("Corrupt value stored under key {}", key),
                    ErrorKind::DecodingError,
                    e,
                )
            })?,
            None => default_item_value(),
        };
        Ok((key.to_string(), value))
    }

    fn get_or_create_user_uuid(&self) -> BridgeResult<String> {
        let _guard = self.uuid_guard.lock();

        // an empty slot counts as unset
        if let Some(existing) = self.store.read(USER_UUID_KEY)? {
            if !existing.is_empty() {
                return Ok(existing);
            }
        }

        let uuid = Uuid::new_v4().to_string();
        self.store.write(USER_UUID_KEY, &uuid)?;
        Ok(uuid)
    }

    fn set_user_uuid(&self, uuid: &str) -> BridgeResult<()> {
        self.store.write(USER_UUID_KEY, uuid)
    }

    fn show_tooltips(&self) -> BridgeResult<()> {
        let listeners = self.tooltip_listeners.read_with(|listeners| {
            let mut result = Vec::with_capacity(listeners.len());
            result.extend(listeners.iter().cloned());
            result
        });

        for listener in listeners {
            if let Err(e) = listener.notify() {
                log::warn!("Tooltip listener failed: {}", e);
            }
        }
        Ok(())
    }

    fn add_tooltip_listener(&self, listener: TooltipListener) {
        self.tooltip_listeners.write_with(|it| it.push(listener))
    }
}
