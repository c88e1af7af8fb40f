// store constants
pub const USER_UUID_KEY: &str = "user_uuid";

// textual form substituted when a key has never been written
pub const EMPTY_LIST_TEXT: &str = "[]";

// bridge constants
pub const BRIDGE_VERSION: &str = env!("CARGO_PKG_VERSION");
