use crate::bridge::{StorageBridge, TooltipListener};
use crate::store::memory::InMemoryStore;
use crate::store::KeyValueStore;

/// Builder for creating and configuring a [`StorageBridge`].
///
/// `BridgeBuilder` provides a fluent API for wiring the bridge to its host
/// store and registering tooltip listeners before use.
///
/// # Examples
///
/// ```rust,ignore
/// use keybridge::bridge::{StorageBridge, TooltipListener};
/// use keybridge::store::{memory::InMemoryStore, KeyValueStore};
///
/// let bridge = StorageBridge::builder()
///     .store(KeyValueStore::new(InMemoryStore::new()))
///     .on_show_tooltips(TooltipListener::new(|| Ok(())))
///     .build();
/// ```
#[derive(Default)]
pub struct BridgeBuilder {
    store: Option<KeyValueStore>,
    tooltip_listeners: Vec<TooltipListener>,
}

impl BridgeBuilder {
    /// Creates a new `BridgeBuilder` with default configuration.
    pub fn new() -> Self {
        BridgeBuilder {
            store: None,
            tooltip_listeners: Vec::new(),
        }
    }

    /// Sets the host store the bridge delegates to.
    ///
    /// When no store is configured, `build()` falls back to a fresh
    /// [`InMemoryStore`].
    pub fn store(mut self, store: KeyValueStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Registers a listener invoked on each `ShowTooltips` request.
    ///
    /// May be called multiple times; every registered listener is notified.
    pub fn on_show_tooltips(mut self, listener: TooltipListener) -> Self {
        self.tooltip_listeners.push(listener);
        self
    }

    /// Builds the configured bridge.
    pub fn build(self) -> StorageBridge {
        let store = self
            .store
            .unwrap_or_else(|| KeyValueStore::new(InMemoryStore::new()));
        let bridge = StorageBridge::new(store);
        for listener in self.tooltip_listeners {
            bridge.add_tooltip_listener(listener);
        }
        bridge
    }
}
