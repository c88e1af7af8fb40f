use crate::errors::{BridgeError, BridgeResult, ErrorKind};
use serde_json::Value;

/// Encodes a structured value into its stored textual form.
///
/// The stored form is compact JSON. Any value tree made of scalars, arrays and
/// objects round-trips through [`decode_value`] unchanged.
///
/// # Errors
///
/// Returns an error of kind [`ErrorKind::EncodingError`] if the value cannot be
/// serialized. Nothing is written to the store by this function, so a failed
/// encode never leaves partial data behind.
pub fn encode_value(value: &Value) -> BridgeResult<String> {
    serde_json::to_string(value).map_err(|e| {
        BridgeError::new_with_cause(
            "Failed to encode value to stored text",
            ErrorKind::EncodingError,
            BridgeError::new(&e.to_string(), ErrorKind::EncodingError),
        )
    })
}

/// Decodes stored text back into a structured value.
///
/// # Errors
///
/// Returns an error of kind [`ErrorKind::DecodingError`] if the text is not
/// valid encoded data. Callers must not mask this with a default value; a
/// present-but-corrupt slot is a data-corruption condition and stays observable.
pub fn decode_value(text: &str) -> BridgeResult<Value> {
    serde_json::from_str(text).map_err(|e| {
        BridgeError::new_with_cause(
            "Stored text is not valid encoded data",
            ErrorKind::DecodingError,
            BridgeError::new(&e.to_string(), ErrorKind::DecodingError),
        )
    })
}

/// The canonical default substituted when a key has never been written.
///
/// Reads of absent keys resolve to an empty ordered list rather than an error.
pub fn default_item_value() -> Value {
    Value::Array(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::EMPTY_LIST_TEXT;
    use serde_json::json;

    #[test]
    fn test_encode_value_object() {
        let value = json!({"phrases": ["bonjour", "merci"], "count": 2});
        let text = encode_value(&value).unwrap();
        assert!(text.contains("bonjour"));
    }

    #[test]
    fn test_decode_value_restores_structure() {
        let value = json!({"nested": {"list": [1, 2, 3], "flag": true}, "name": null});
        let text = encode_value(&value).unwrap();
        let decoded = decode_value(&text).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_decode_value_rejects_corrupt_text() {
        let result = decode_value("{not valid json");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::DecodingError);
    }

    #[test]
    fn test_decode_value_rejects_empty_text() {
        // An empty slot is distinct from an absent one and must not decode
        let result = decode_value("");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::DecodingError);
    }

    #[test]
    fn test_decode_value_accepts_scalars() {
        assert_eq!(decode_value("42").unwrap(), json!(42));
        assert_eq!(decode_value("\"hello\"").unwrap(), json!("hello"));
        assert_eq!(decode_value("null").unwrap(), Value::Null);
    }

    #[test]
    fn test_default_item_value_is_empty_list() {
        let default = default_item_value();
        assert_eq!(default, json!([]));
        assert_eq!(encode_value(&default).unwrap(), EMPTY_LIST_TEXT);
    }
}
