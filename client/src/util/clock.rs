//! Browser clock access.
//!
//! Credential expiry decisions take an explicit `now` so they stay pure;
//! this module is the one place that actually asks the environment.

/// Current wall-clock time, seconds since the Unix epoch.
///
/// Returns `0` outside the browser (server renders never evaluate
/// credentials, so the value is unused there).
#[must_use]
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
