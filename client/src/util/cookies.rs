//! Cookie-backed credential storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cookies are the single source of truth for "am I logged in". Multiple
//! tabs and external redirects can change them at any time, so `read` always
//! re-reads `document.cookie` and nothing in the client caches the value.
//! Credentials live in cookies rather than `localStorage` so the edge gate
//! sees them on page requests.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// Read the named cookie from the live `document.cookie` string.
///
/// Returns `None` outside the browser or when the cookie is absent.
pub fn read(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = html_document()?.cookie().ok()?;
        let encoded = parse_cookie_header(&raw, name)?;
        js_sys::decode_uri_component(&encoded)
            .ok()
            .map(|decoded| String::from(decoded))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Persist `value` under `name` with a `Max-Age` of `ttl_days`.
pub fn write(name: &str, value: &str, ttl_days: i64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = html_document() else {
            return;
        };
        let encoded = String::from(js_sys::encode_uri_component(value));
        let _ = doc.set_cookie(&format_set_cookie(name, &encoded, ttl_days));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, value, ttl_days);
    }
}

/// Remove the named cookie.
pub fn clear(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&format_expired_cookie(name));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Extract the (still URI-encoded) value of `name` from a `document.cookie`
/// header string.
#[cfg(any(test, feature = "hydrate"))]
fn parse_cookie_header(header: &str, name: &str) -> Option<String> {
    for pair in header.split(';') {
        let Some((key, value)) = pair.trim().split_once('=') else {
            continue;
        };
        if key == name {
            return Some(value.to_owned());
        }
    }
    None
}

/// Assignment string persisting `encoded` under `name` for `ttl_days`.
#[cfg(any(test, feature = "hydrate"))]
fn format_set_cookie(name: &str, encoded: &str, ttl_days: i64) -> String {
    let max_age = ttl_days.max(0) * 24 * 60 * 60;
    format!("{name}={encoded}; Max-Age={max_age}; Path=/; SameSite=Lax")
}

/// Assignment string expiring the named cookie immediately.
#[cfg(any(test, feature = "hydrate"))]
fn format_expired_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; SameSite=Lax")
}
