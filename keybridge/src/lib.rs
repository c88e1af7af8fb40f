//! # Keybridge - Typed Storage Bridge
//!
//! Keybridge is a small bridge between an application's internal
//! message-passing interface and a host-provided persistent key/value store.
//! It receives typed requests ("store this value under this key", "fetch the
//! value for this key", "get or create a stable per-user identifier"),
//! performs the corresponding operation against the storage facility, and
//! delivers typed responses back to the application.
//!
//! ## Key Features
//!
//! - **Typed protocol**: Requests and responses are explicit tagged messages
//!   consumed by a single dispatch function
//! - **Pluggable storage**: The host store is an injected capability, so the
//!   bridge runs against an in-memory fake in tests
//! - **Default-value policy**: Reads of never-written keys resolve to an
//!   empty list instead of failing; corruption stays observable
//! - **Stable client identifier**: A random token is generated lazily,
//!   persisted under a reserved key and never regenerated
//! - **Clean API**: PIMPL pattern provides stable, encapsulated interface
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keybridge::bridge::{StorageBridge, StorageRequest};
//! use keybridge::store::{memory::InMemoryStore, KeyValueStore};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bridge = StorageBridge::builder()
//!     .store(KeyValueStore::new(InMemoryStore::new()))
//!     .build();
//!
//! // Persist a value and read it back
//! bridge.set_item("phrases", json!(["bonjour"]), None)?;
//! let (key, value) = bridge.get_item("phrases")?;
//!
//! // Or drive the same operations through the message protocol
//! let response = bridge.dispatch(StorageRequest::GetUserUuid)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`bridge`] - Request/response messages, the bridge component and builder
//! - [`common`] - Constants, the value codec and shared utilities
//! - [`errors`] - Error types and result definitions
//! - [`store`] - Host storage abstractions and the in-memory implementation

pub mod bridge;
pub mod common;
pub mod errors;
pub mod store;

#[cfg(test)]
mod tests {
    use crate::common::BRIDGE_VERSION;

    #[test]
    fn test_version_is_set() {
        colog::init();
        log::info!("keybridge {}", BRIDGE_VERSION);
        assert!(!BRIDGE_VERSION.is_empty());
    }
}
