//! HTTP transport wrapper for all REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request re-reads the credential cookie at send time and attaches it
//! as a bearer header — or omits the header entirely when no usable
//! credential is stored. A 401 comes back to the caller as
//! [`ApiError::Unauthorized`]; this layer never clears session state or
//! navigates, so transient failures cannot cause redirect loops.
//!
//! ERROR HANDLING
//! ==============
//! Failures map onto one taxonomy ([`ApiError`]) that views translate into
//! local error state. GETs retry transient network failures twice with a
//! doubling delay; mutations never retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use session::{ADMIN_TOKEN_COOKIE, SESSION_TOKEN_COOKIE};

#[cfg(feature = "hydrate")]
use super::response;
#[cfg(feature = "hydrate")]
use crate::util::cookies;

/// Failure taxonomy for backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: offline, DNS, aborted connection.
    #[error("network error: {0}")]
    Network(String),
    /// The backend rejected the credential (HTTP 401).
    #[error("not authenticated")]
    Unauthorized,
    /// The resource does not exist (HTTP 404).
    #[error("not found")]
    NotFound,
    /// The backend rejected the request with a message (other 4xx).
    #[error("{0}")]
    Rejected(String),
    /// The backend failed (5xx).
    #[error("server error ({0})")]
    Server(u16),
    /// A success response carried an undecodable body.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// Bounded retry budget for idempotent GETs.
#[cfg(any(test, feature = "hydrate"))]
const MAX_GET_RETRIES: u32 = 2;

/// Which credential cookie authenticates requests to `path`.
///
/// The admin portal holds its credential in a separate cookie so the edge
/// gate can guard `/admin` pages without touching the public session.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_cookie_for(path: &str) -> &'static str {
    if path == "/api/admin" || path.starts_with("/api/admin/") {
        ADMIN_TOKEN_COOKIE
    } else {
        SESSION_TOKEN_COOKIE
    }
}

/// Header value for a stored credential, or `None` when the store holds
/// nothing usable. Placeholder strings a buggy writer can leave behind
/// (`"undefined"`, `"null"`) count as nothing — the header is omitted,
/// never sent as garbage.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(stored: Option<String>) -> Option<String> {
    let raw = stored?;
    if session::is_placeholder(&raw) {
        return None;
    }
    Some(format!("Bearer {}", raw.trim()))
}

/// Pull a human-readable message out of an error body, if there is one.
#[cfg(any(test, feature = "hydrate"))]
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error"] {
        if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
            if !text.trim().is_empty() {
                return Some(text.trim().to_owned());
            }
        }
    }
    None
}

/// Map a non-success status and its body onto the error taxonomy.
#[cfg(any(test, feature = "hydrate"))]
fn error_for_status(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        400..=499 => ApiError::Rejected(
            extract_message(body).unwrap_or_else(|| format!("request rejected ({status})")),
        ),
        _ => ApiError::Server(status),
    }
}

/// Delay before retry `attempt` (0-based), in milliseconds.
#[cfg(any(test, feature = "hydrate"))]
fn backoff_delay_ms(attempt: u32) -> u64 {
    250 << attempt
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

/// One request/response cycle. Success returns the raw body text.
#[cfg(feature = "hydrate")]
async fn dispatch(verb: Verb, path: &str, body: Option<&serde_json::Value>) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let builder = match verb {
        Verb::Get => Request::get(path),
        Verb::Post => Request::post(path),
        Verb::Patch => Request::patch(path),
        Verb::Delete => Request::delete(path),
    };
    let builder = match bearer_value(cookies::read(bearer_cookie_for(path))) {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    };
    let request = match body {
        Some(value) => builder.json(value).map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if (200..300).contains(&status) {
        Ok(text)
    } else {
        Err(error_for_status(status, &text))
    }
}

/// GET with bounded retry on transport failure only.
#[cfg(feature = "hydrate")]
async fn get_text(path: &str) -> Result<String, ApiError> {
    let mut attempt = 0;
    loop {
        match dispatch(Verb::Get, path, None).await {
            Err(ApiError::Network(_)) if attempt < MAX_GET_RETRIES => {
                gloo_timers::future::sleep(std::time::Duration::from_millis(backoff_delay_ms(attempt))).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}

/// `GET path` decoded as a list in any accepted envelope.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = get_text(path).await?;
        response::decode_list(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_render_stub())
    }
}

/// `GET path` decoded as a single object in any accepted envelope.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn get_item<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = get_text(path).await?;
        response::decode_item(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_render_stub())
    }
}

/// `POST path` with a JSON body, response decoded as a single object.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = dispatch(Verb::Post, path, Some(&value)).await?;
        response::decode_item(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_render_stub())
    }
}

/// `POST path` with a JSON body, returning the raw response value.
///
/// The login flow needs the undecoded body to probe the backend's several
/// token field spellings.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn post_raw<B: Serialize>(path: &str, body: &B) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = dispatch(Verb::Post, path, Some(&value)).await?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_render_stub())
    }
}

/// `POST path` with no body, response discarded.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn post_action(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Post, path, None).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_render_stub())
    }
}

/// `PATCH path` with a JSON body, response decoded as a single object.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn patch<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = dispatch(Verb::Patch, path, Some(&value)).await?;
        response::decode_item(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_render_stub())
    }
}

/// `PATCH path` with a JSON body, response discarded.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn patch_action<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        dispatch(Verb::Patch, path, Some(&value)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_render_stub())
    }
}

/// `DELETE path`, response discarded.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(Verb::Delete, path, None).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_render_stub())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_render_stub() -> ApiError {
    ApiError::Network("not available during server render".to_owned())
}
