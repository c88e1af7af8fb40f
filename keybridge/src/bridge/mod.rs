//! The request/response bridge between the application and the host store.
//!
//! # Protocol
//!
//! The application talks to the bridge in tagged messages. Each inbound
//! [`StorageRequest`] maps to zero or one outbound [`StorageResponse`]:
//!
//! - `SetItem` persists a value and is acknowledged with the echoed value
//! - `GetItem` resolves to the decoded value (or the empty-list default) paired
//!   with the originating key, so concurrent outstanding gets stay correlated
//! - `GetUserUuid` resolves to the stable per-client identifier, generating
//!   and persisting one on first use
//! - `SetUserUuid` and `ShowTooltips` produce no response
//!
//! [`StorageBridge::dispatch`] is the single entry point consuming requests;
//! the typed convenience methods expose the same operations directly.

mod builder;
mod message;
mod storage_bridge;
mod tooltips;

pub use builder::*;
pub use message::*;
pub use storage_bridge::*;
pub use tooltips::*;
