//! Edge gate middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits in front of page routing: `/admin` pages require a structurally
//! valid, unexpired credential in the admin cookie, and a set maintenance
//! flag cookie sends every non-admin page to the maintenance notice. API
//! traffic and static assets pass untouched — the backend authorizes data
//! access itself; this gate only keeps page navigation honest.
//!
//! TRADE-OFFS
//! ==========
//! The gate does not hold the backend's signing key, so "valid" here means
//! decodable and unexpired — the same contract the client bootstrap uses.
//! A forged cookie gets the visitor an empty admin shell whose every data
//! call still 401s at the backend.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use session::{ADMIN_TOKEN_COOKIE, MAINTENANCE_COOKIE};

/// What the gate does with a page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Let the request through to SSR / proxy routing.
    Pass,
    /// Admin page without a usable admin credential.
    RedirectAdminLogin,
    /// Maintenance flag is set and this is a public page.
    RedirectMaintenance,
}

/// Paths the gate never touches: data traffic, build assets, probes.
fn is_exempt(path: &str) -> bool {
    path.starts_with("/api/") || path.starts_with("/pkg/") || path == "/healthz" || path == "/favicon.ico"
}

fn is_admin_page(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}

/// Pure gate decision for one request.
pub fn gate_decision(path: &str, admin_token: Option<&str>, maintenance_on: bool, now: i64) -> GateOutcome {
    if is_exempt(path) {
        return GateOutcome::Pass;
    }
    if is_admin_page(path) {
        // The login page itself must stay reachable or the redirect loops.
        if path == "/admin/login" {
            return GateOutcome::Pass;
        }
        return match admin_token {
            Some(raw) if session::evaluate(raw, now).is_ok() => GateOutcome::Pass,
            _ => GateOutcome::RedirectAdminLogin,
        };
    }
    if maintenance_on && path != "/maintenance" {
        return GateOutcome::RedirectMaintenance;
    }
    GateOutcome::Pass
}

/// Axum middleware applying [`gate_decision`] to every request.
pub async fn gate(jar: CookieJar, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let admin_token = jar.get(ADMIN_TOKEN_COOKIE).map(Cookie::value);
    let maintenance_on = jar.get(MAINTENANCE_COOKIE).map(Cookie::value) == Some("on");
    let now = time::OffsetDateTime::now_utc().unix_timestamp();

    match gate_decision(&path, admin_token, maintenance_on, now) {
        GateOutcome::Pass => next.run(req).await,
        GateOutcome::RedirectAdminLogin => {
            tracing::debug!(%path, "admin page without valid credential, redirecting to login");
            Redirect::temporary("/admin/login").into_response()
        }
        GateOutcome::RedirectMaintenance => Redirect::temporary("/maintenance").into_response(),
    }
}
