//! Response shapes the backend is known to use
//!
//! List endpoints answer either with a bare array or with `{ "data": [...] }`,
//! single-item endpoints with the item or `{ "data": item }`.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { data } | ListEnvelope::Bare(data) => data,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            ItemEnvelope::Wrapped { data } | ItemEnvelope::Bare(data) => data,
        }
    }
}

/// Best-effort human message from an error body.
///
/// Looks at `message`, then `error` (string), then `error.message`.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .or_else(|| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
