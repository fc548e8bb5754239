//! Bracketed query-string serialization for content API parameters.
//!
//! The content API reads nested parameters in the `qs` bracket notation:
//!
//! ```text
//! filters[slug][$eq]=casa-lago
//! sort[0]=createdAt%3Adesc
//! populate[areas][populate][list][populate][photos]=true
//! ```
//!
//! Keys are emitted verbatim; only values are percent-encoded.

use serde_json::Value;

/// Serialize a JSON object into a query string (without the leading `?`).
///
/// Arrays use indexed keys, `null` leaves are skipped, and empty objects or
/// arrays produce nothing. A non-object root yields an empty string.
pub fn to_query_string(params: &Value) -> String {
    let mut pairs = Vec::new();
    if let Value::Object(map) = params {
        for (key, value) in map {
            push_pairs(key.clone(), value, &mut pairs);
        }
    }
    pairs.join("&")
}

fn push_pairs(prefix: String, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, nested) in map {
                push_pairs(format!("{prefix}[{key}]"), nested, pairs);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                push_pairs(format!("{prefix}[{index}]"), nested, pairs);
            }
        }
        Value::String(s) => pairs.push(format!("{prefix}={}", urlencoding::encode(s))),
        Value::Bool(b) => pairs.push(format!("{prefix}={b}")),
        Value::Number(n) => pairs.push(format!("{prefix}={n}")),
    }
}
