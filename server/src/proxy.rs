//! `/api` reverse proxy to the upstream REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The edge host never interprets data traffic: method, path, query,
//! bearer header, and body pass through verbatim, and the upstream's
//! status and body come back unchanged. Everything the client defends
//! against (envelope shapes, message bodies) originates upstream.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Largest request body the proxy will buffer.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Shared reqwest client plus the upstream base URL.
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    /// Build the proxy state for an upstream base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(upstream: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, upstream: upstream.trim_end_matches('/').to_owned() })
    }
}

/// Join the upstream base with the incoming path and query.
fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{base}{path}?{q}"),
        _ => format!("{base}{path}"),
    }
}

/// Request headers worth forwarding upstream.
fn forwarded_headers(headers: &HeaderMap) -> Vec<(header::HeaderName, header::HeaderValue)> {
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]
        .into_iter()
        .filter_map(|name| headers.get(&name).map(|value| (name, value.clone())))
        .collect()
}

/// Forward one `/api/*` request to the upstream backend.
pub async fn proxy(State(state): State<ProxyState>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let url = upstream_url(&state.upstream, parts.uri.path(), parts.uri.query());

    let Ok(method) = reqwest::Method::from_bytes(parts.method.as_str().as_bytes()) else {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    };
    let Ok(bytes) = axum::body::to_bytes(body, MAX_BODY_BYTES).await else {
        return StatusCode::PAYLOAD_TOO_LARGE.into_response();
    };

    let mut outgoing = state.client.request(method, &url);
    for (name, value) in forwarded_headers(&parts.headers) {
        outgoing = outgoing.header(name, value);
    }
    if !bytes.is_empty() {
        outgoing = outgoing.body(bytes);
    }

    match outgoing.send().await {
        Ok(upstream_resp) => {
            let status =
                StatusCode::from_u16(upstream_resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            let content_type = upstream_resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(ToOwned::to_owned);
            match upstream_resp.bytes().await {
                Ok(body) => {
                    let mut response = Response::builder().status(status);
                    if let Some(ct) = content_type {
                        response = response.header(header::CONTENT_TYPE, ct);
                    }
                    response
                        .body(Body::from(body))
                        .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
                }
                Err(err) => {
                    tracing::error!(%url, error = %err, "failed reading upstream body");
                    StatusCode::BAD_GATEWAY.into_response()
                }
            }
        }
        Err(err) => {
            tracing::error!(%url, error = %err, "upstream request failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
