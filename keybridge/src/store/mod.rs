//! Host storage abstractions.
//!
//! This module defines the capability the bridge requires from the host's
//! persistence facility. The storage side is pluggable: any backend exposing
//! string-keyed read/write semantics can be injected.
//!
//! # Store Providers
//!
//! Storage providers implement `KeyValueStoreProvider` and are wrapped in a
//! `KeyValueStore` handle for cheap, thread-safe sharing. The crate ships:
//! - **In-Memory Store**: `store::memory::InMemoryStore` for tests and
//!   host-less use
//!
//! # Contract
//!
//! The host facility is assumed to offer simple get/set-by-string-key
//! semantics with no transactions and no exposed capacity limits. Writes are
//! atomic at single-key granularity; a rejected write leaves the prior
//! contents of the key intact. The bridge is not necessarily the sole writer
//! in practice, so a value may change between two unrelated reads.

mod key_value_store;
pub mod memory;

pub use key_value_store::*;
