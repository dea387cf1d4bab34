//! Response envelope normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend returns `{ "data": ... }` on some endpoints, `{ "posts":
//! [...] }` on one legacy list route, and a bare array/object elsewhere —
//! sometimes varying between calls to the same route. Everything coming off
//! the wire passes through here exactly once so the rest of the client sees
//! a single shape.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// All accepted wire shapes for a list response.
///
/// Variant order matters: `serde(untagged)` tries top-down, and a bare
/// array can never match the wrapped forms.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// `{ "data": [...] }`
    Wrapped { data: Vec<T> },
    /// `{ "posts": [...] }` — legacy job-list shape.
    Posts { posts: Vec<T> },
    /// `[...]`
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Unwrap to the one in-memory list shape.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Wrapped { data } => data,
            Self::Posts { posts } => posts,
            Self::Bare(items) => items,
        }
    }
}

/// All accepted wire shapes for a single-object response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<T> {
    /// `{ "data": {...} }`
    Wrapped { data: T },
    /// `{...}`
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    /// Unwrap to the inner object.
    #[must_use]
    pub fn into_item(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(item) => item,
        }
    }
}

/// Decode a list body in any accepted envelope.
///
/// # Errors
///
/// Returns the serde error when the body matches no accepted shape.
pub fn decode_list<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_str::<ListEnvelope<T>>(raw).map(ListEnvelope::into_items)
}

/// Decode a single-object body in any accepted envelope.
///
/// # Errors
///
/// Returns the serde error when the body matches no accepted shape.
pub fn decode_item<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str::<ItemEnvelope<T>>(raw).map(ItemEnvelope::into_item)
}
