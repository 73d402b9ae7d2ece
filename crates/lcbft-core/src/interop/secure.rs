//! Hardened JSON decoding for externally supplied payloads.
//!
//! Three stages, all-or-nothing: byte-size ceiling before any decoding,
//! syntax decode with a deny-list sweep over object keys, then typed
//! decoding plus value validation. A payload either becomes a fully
//! validated value or one of the typed error kinds.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LcbftError;
use crate::types::Validate;
use crate::LcbftResult;

/// Hard ceiling on import payloads (10 MiB), checked before decoding.
pub const MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Object keys dropped at every nesting depth. Exported files can come
/// from (and go back to) JavaScript hosts, where assigning these keys
/// pollutes the prototype chain; stripping them here keeps re-exported
/// payloads inert everywhere.
const DENIED_KEYS: &[&str] = &["__proto__", "constructor", "prototype"];

fn strip_denied_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| !DENIED_KEYS.contains(&key.as_str()));
            for nested in map.values_mut() {
                strip_denied_keys(nested);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                strip_denied_keys(item);
            }
        }
        _ => {}
    }
}

/// Size-checked, key-filtered decode to a JSON tree.
pub fn decode(bytes: &[u8]) -> LcbftResult<Value> {
    if bytes.len() > MAX_PAYLOAD_BYTES {
        return Err(LcbftError::PayloadTooLarge {
            size: bytes.len(),
            limit: MAX_PAYLOAD_BYTES,
        });
    }

    let text = std::str::from_utf8(bytes)
        .map_err(|e| LcbftError::MalformedInput(format!("payload is not valid UTF-8: {}", e)))?;
    let mut value: Value =
        serde_json::from_str(text).map_err(|e| LcbftError::MalformedInput(e.to_string()))?;

    strip_denied_keys(&mut value);
    Ok(value)
}

/// Typed decode of an already-sanitized tree. Structural mismatches and
/// failed value checks both surface as `SchemaViolation`.
pub fn typed_from_value<T>(value: Value) -> LcbftResult<T>
where
    T: DeserializeOwned + Validate,
{
    let typed: T =
        serde_json::from_value(value).map_err(|e| LcbftError::SchemaViolation(e.to_string()))?;
    typed.validate()?;
    Ok(typed)
}

/// Full pipeline: ceiling, decode, key filter, typed decode, validation.
pub fn decode_as<T>(bytes: &[u8]) -> LcbftResult<T>
where
    T: DeserializeOwned + Validate,
{
    typed_from_value(decode(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_keys_dropped_at_any_depth() {
        let raw = br#"{"a": {"__proto__": {"polluted": true}, "b": [{"constructor": 1, "keep": 2}]}, "prototype": 3}"#;
        let value = decode(raw).unwrap();
        assert!(value.get("prototype").is_none());
        assert!(value["a"].get("__proto__").is_none());
        assert!(value["a"]["b"][0].get("constructor").is_none());
        assert_eq!(value["a"]["b"][0]["keep"], 2);
    }

    #[test]
    fn oversized_payload_rejected_before_decode() {
        // Not valid JSON; the ceiling must trip before the decoder sees it.
        let payload = vec![b'x'; MAX_PAYLOAD_BYTES + 1];
        match decode(&payload) {
            Err(LcbftError::PayloadTooLarge { size, limit }) => {
                assert_eq!(size, MAX_PAYLOAD_BYTES + 1);
                assert_eq!(limit, MAX_PAYLOAD_BYTES);
            }
            other => panic!("expected PayloadTooLarge, got {:?}", other.err()),
        }
    }

    #[test]
    fn malformed_syntax_reported() {
        assert!(matches!(
            decode(b"{not json"),
            Err(LcbftError::MalformedInput(_))
        ));
    }
}
