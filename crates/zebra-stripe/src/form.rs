//! Form encoding for Stripe request parameters.
//!
//! Stripe takes `application/x-www-form-urlencoded` bodies and spells nested
//! structures with brackets: `metadata[plan]=gold`, `items[0][price]=p_1`.

use serde_json::Value;

use zebra_core::SyncParams;

/// Flatten parameters into `(key, value)` pairs ready for `reqwest::RequestBuilder::form`.
///
/// `null` becomes an empty string, which Stripe reads as "unset this field".
#[must_use]
pub fn encode(params: &SyncParams) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        flatten(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => out.push((key, String::new())),
        Value::Bool(b) => out.push((key, b.to_string())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::String(s) => out.push((key, s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten(format!("{key}[{i}]"), item, out);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                flatten(format!("{key}[{child}]"), item, out);
            }
        }
    }
}
