use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for bridge operations
///
/// This enum represents all possible error types that can occur while bridging
/// requests to the host key/value store. Each error kind describes a specific
/// category of failure, enabling precise error handling.
///
/// # Examples
///
/// ```rust,ignore
/// use keybridge::errors::{BridgeError, ErrorKind, BridgeResult};
///
/// fn example() -> BridgeResult<()> {
///     Err(BridgeError::new("Write rejected", ErrorKind::StoreWriteError))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    // Codec Errors - raised while translating values to/from their stored text
    /// A value could not be serialized to its stored textual form
    EncodingError,
    /// Stored text is not valid encoded data
    DecodingError,

    // Store Errors - raised by the host storage facility
    /// The host store rejected a write (e.g. quota exceeded)
    StoreWriteError,
    /// The host store failed while reading a key
    StoreReadError,

    // Operation Errors
    /// The operation is not valid in the current context
    InvalidOperation,

    // Generic/Internal Errors - used as fallback
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::DecodingError => write!(f, "Decoding error"),
            ErrorKind::StoreWriteError => write!(f, "Store write error"),
            ErrorKind::StoreReadError => write!(f, "Store read error"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom bridge error type.
///
/// `BridgeError` encapsulates error information including the error message, kind, and
/// optional cause. It supports error chaining and backtraces for debugging.
///
/// # Examples
///
/// ```rust,ignore
/// use keybridge::errors::{BridgeError, ErrorKind};
///
/// // Create a simple error
/// let err = BridgeError::new("Write rejected", ErrorKind::StoreWriteError);
///
/// // Create an error with a cause
/// let cause = BridgeError::new("expected value at line 1", ErrorKind::DecodingError);
/// let err = BridgeError::new_with_cause("Stored text is corrupt", ErrorKind::DecodingError, cause);
/// ```
///
/// # Type alias
///
/// The `BridgeResult<T>` type alias is equivalent to `Result<T, BridgeError>` and is used
/// throughout the codebase for operations that can fail.
#[derive(Clone)]
pub struct BridgeError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<BridgeError>>,
    backtrace: Atomic<Backtrace>,
}

impl BridgeError {
    /// Creates a new `BridgeError` with the specified message and error kind.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_kind` - The category of error
    ///
    /// # Returns
    ///
    /// A new `BridgeError` instance.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        BridgeError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `BridgeError` with a cause error.
    ///
    /// This creates an error chain where the cause error is preserved for debugging.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_type` - The category of error
    /// * `cause` - The underlying error that caused this error
    ///
    /// # Returns
    ///
    /// A new `BridgeError` instance with the cause error attached.
    pub fn new_with_cause(message: &str, error_type: ErrorKind, cause: BridgeError) -> Self {
        BridgeError {
            message: message.to_string(),
            error_kind: error_type,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&Box<BridgeError>> {
        self.cause.as_ref()
    }
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for bridge operations.
///
/// `BridgeResult<T>` is shorthand for `Result<T, BridgeError>`.
/// All fallible bridge operations return this type.
pub type BridgeResult<T> = Result<T, BridgeError>;

// From trait implementations for automatic error conversion
impl From<std::string::FromUtf8Error> for BridgeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        BridgeError::new(
            &format!("UTF-8 encoding error: {}", err),
            ErrorKind::EncodingError,
        )
    }
}

impl From<std::fmt::Error> for BridgeError {
    fn from(err: std::fmt::Error) -> Self {
        BridgeError::new(
            &format!("Formatting error: {}", err),
            ErrorKind::InternalError,
        )
    }
}

impl From<String> for BridgeError {
    fn from(msg: String) -> Self {
        BridgeError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for BridgeError {
    fn from(msg: &str) -> Self {
        BridgeError::new(msg, ErrorKind::InternalError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_error_new_creates_error() {
        let error = BridgeError::new("An error occurred", ErrorKind::StoreWriteError);
        assert_eq!(error.message, "An error occurred");
        assert_eq!(error.error_kind, ErrorKind::StoreWriteError);
        assert!(error.cause.is_none());
    }

    #[test]
    fn bridge_error_new_with_cause_creates_error() {
        let cause = BridgeError::new("expected ident at line 1", ErrorKind::DecodingError);
        let error =
            BridgeError::new_with_cause("Stored text is corrupt", ErrorKind::DecodingError, cause);
        assert_eq!(error.message, "Stored text is corrupt");
        assert_eq!(error.error_kind, ErrorKind::DecodingError);
        assert!(error.cause.is_some());
    }

    #[test]
    fn bridge_error_message_returns_message() {
        let error = BridgeError::new("An error occurred", ErrorKind::EncodingError);
        assert_eq!(error.message(), "An error occurred");
    }

    #[test]
    fn bridge_error_kind_returns_kind() {
        let error = BridgeError::new("An error occurred", ErrorKind::EncodingError);
        assert_eq!(error.kind(), &ErrorKind::EncodingError);
    }

    #[test]
    fn bridge_error_cause_returns_none_when_no_cause() {
        let error = BridgeError::new("An error occurred", ErrorKind::StoreReadError);
        assert!(error.cause().is_none());
    }

    #[test]
    fn bridge_error_display_formats_correctly() {
        let error = BridgeError::new("An error occurred", ErrorKind::StoreWriteError);
        let formatted = format!("{}", error);
        assert_eq!(formatted, "An error occurred");
    }

    #[test]
    fn bridge_error_debug_formats_with_cause() {
        let cause = BridgeError::new("quota exceeded", ErrorKind::StoreWriteError);
        let error =
            BridgeError::new_with_cause("Write rejected", ErrorKind::StoreWriteError, cause);
        let formatted = format!("{:?}", error);
        assert!(formatted.contains("Write rejected"));
        assert!(formatted.contains("Caused by:"));
    }

    #[test]
    fn bridge_error_source_returns_cause() {
        let cause = BridgeError::new("quota exceeded", ErrorKind::StoreWriteError);
        let error =
            BridgeError::new_with_cause("Write rejected", ErrorKind::StoreWriteError, cause);
        assert!(error.source().is_some());
    }

    #[test]
    fn bridge_error_source_returns_none_when_no_cause() {
        let error = BridgeError::new("An error occurred", ErrorKind::InternalError);
        assert!(error.source().is_none());
    }

    // Test error comparison for all error kinds
    #[test]
    fn test_error_kind_equality() {
        let error1 = BridgeError::new("Error 1", ErrorKind::DecodingError);
        let error2 = BridgeError::new("Error 2", ErrorKind::DecodingError);
        let error3 = BridgeError::new("Error 3", ErrorKind::EncodingError);

        assert_eq!(error1.kind(), error2.kind());
        assert_ne!(error1.kind(), error3.kind());
    }

    // Test error hierarchy and chaining
    #[test]
    fn test_error_chain_with_different_kinds() {
        let root_cause = BridgeError::new("disk full", ErrorKind::StoreWriteError);
        let top_level = BridgeError::new_with_cause(
            "Cannot persist item",
            ErrorKind::InvalidOperation,
            root_cause,
        );

        assert_eq!(top_level.kind(), &ErrorKind::InvalidOperation);
        assert!(top_level.cause().is_some());

        if let Some(cause_box) = top_level.cause() {
            assert_eq!(cause_box.kind(), &ErrorKind::StoreWriteError);
        }
    }

    // Test From<std::string::FromUtf8Error>
    #[test]
    fn test_from_utf8_error() {
        let invalid_utf8 = vec![0xFF, 0xFE];
        let utf8_err = String::from_utf8(invalid_utf8).unwrap_err();
        let bridge_err: BridgeError = utf8_err.into();

        assert_eq!(bridge_err.kind(), &ErrorKind::EncodingError);
        assert!(bridge_err.message().contains("UTF-8"));
    }

    // Test From<String> and From<&str>
    #[test]
    fn test_from_string() {
        let msg = String::from("test error message");
        let bridge_err: BridgeError = msg.into();

        assert_eq!(bridge_err.kind(), &ErrorKind::InternalError);
        assert_eq!(bridge_err.message(), "test error message");
    }

    #[test]
    fn test_from_str() {
        let bridge_err: BridgeError = "test error message".into();

        assert_eq!(bridge_err.kind(), &ErrorKind::InternalError);
        assert_eq!(bridge_err.message(), "test error message");
    }

    // Test error message preservation across different error kinds
    #[test]
    fn test_error_message_preservation() {
        let messages = vec![
            ("Encoding error message", ErrorKind::EncodingError),
            ("Decoding error message", ErrorKind::DecodingError),
            ("Write error message", ErrorKind::StoreWriteError),
            ("Read error message", ErrorKind::StoreReadError),
        ];

        for (msg, kind) in &messages {
            let error = BridgeError::new(msg, kind.clone());
            assert_eq!(error.message(), *msg);
            assert_eq!(error.kind(), kind);
        }
    }
}
