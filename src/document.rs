//! JSON document layer
//!
//! Decrypted payloads are JSON objects: string keys mapping to
//! dynamically typed values. No schema is enforced at this level;
//! callers that expect a concrete shape use [`parse_into`].

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A decrypted document: string keys to arbitrary JSON values.
pub type Document = serde_json::Map<String, Value>;

/// Parse plaintext bytes as a JSON object.
///
/// Fails with [`Error::Parse`] if the bytes are not valid UTF-8, not
/// well-formed JSON, or the top-level value is not an object.
pub fn parse(plaintext: &[u8]) -> Result<Document> {
    serde_json::from_slice(plaintext).map_err(Error::Parse)
}

/// Parse plaintext bytes into a caller-provided type.
///
/// Shape mismatches (missing fields, wrong types) surface as
/// [`Error::Parse`] like any other malformed input.
pub fn parse_into<T: DeserializeOwned>(plaintext: &[u8]) -> Result<T> {
    serde_json::from_slice(plaintext).map_err(Error::Parse)
}

/// Remove the named keys from every object reachable from `value`.
///
/// Walks nested objects and arrays in place. Intended for display and
/// logging paths: decrypted documents can embed bulky or sensitive
/// fields (the producing system inlines identity-document scans as
/// base64 image blobs) that must not end up in log output.
pub fn redact(value: &mut Value, keys: &[&str]) {
    match value {
        Value::Object(map) => {
            for key in keys {
                map.remove(*key);
            }
            for nested in map.values_mut() {
                redact(nested, keys);
            }
        }
        Value::Array(items) => {
            for item in items {
                redact(item, keys);
            }
        }
        _ => {}
    }
}
