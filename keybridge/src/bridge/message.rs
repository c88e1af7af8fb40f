use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound request messages from the application to the bridge.
///
/// # Purpose
/// Models the message-port style dispatch of the bridging protocol as an
/// explicit tagged type consumed by a single dispatch function. Each variant
/// preserves the one-request-one-response (or one-request-zero-response)
/// contract of the original port.
///
/// # Variants
/// - **SetItem**: Persist `value` under `key`. `echo_value` optionally
///   decouples the acknowledgment payload from what was persisted.
/// - **GetItem**: Fetch the value stored under `key`.
/// - **GetUserUuid**: Fetch the stable per-client identifier, generating and
///   persisting one if absent.
/// - **SetUserUuid**: Unconditionally overwrite the identifier slot.
/// - **ShowTooltips**: Trigger a tooltip enhancement pass; no storage work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorageRequest {
    SetItem {
        key: String,
        value: Value,
        echo_value: Option<Value>,
    },
    GetItem {
        key: String,
    },
    GetUserUuid,
    SetUserUuid {
        uuid: String,
    },
    ShowTooltips,
}

/// Outbound response messages from the bridge to the application.
///
/// `Item` responses carry the originating key so the application can correlate
/// a response with the request that produced it when several gets are
/// outstanding at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorageResponse {
    /// Acknowledges a `SetItem`, carrying the echo value when one was supplied
    /// and the persisted value otherwise.
    ItemSet { value: Value },
    /// Resolves a `GetItem` with the decoded value, or the empty-list default
    /// for a key that was never written.
    Item { key: String, value: Value },
    /// Resolves a `GetUserUuid` with the persisted identifier.
    UserUuid { uuid: String },
}
