//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies identical redirect behavior: wait for the
//! bootstrap to resolve, then send anonymous visitors to the matching login
//! route. Login pages apply the inverse, sending confirmed sessions to
//! their role's home. Nothing redirects while the check is still running,
//! which is what prevents both content flashes and redirect loops.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use session::Role;

use crate::state::session::{SessionPhase, SessionState};

/// Whether a protected page should redirect to login: the bootstrap has
/// resolved and found no session.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.phase == SessionPhase::Anonymous
}

/// Whether a login page should redirect away: the bootstrap has confirmed
/// a session.
#[must_use]
pub fn should_redirect_authed(state: &SessionState) -> bool {
    state.is_authenticated()
}

/// Default authenticated destination for a role.
#[must_use]
pub fn default_route_for(role: Role) -> &'static str {
    match role {
        Role::User => "/",
        Role::Company => "/company",
        Role::Admin => "/admin",
    }
}

/// Login route guarding pages of a role.
#[must_use]
pub fn login_route_for(role: Role) -> &'static str {
    match role {
        Role::User => "/login",
        Role::Company => "/company/login",
        Role::Admin => "/admin/login",
    }
}

/// Redirect to `login_path` whenever the bootstrap resolves anonymous.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, login_path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(login_path, NavigateOptions::default());
        }
    });
}

/// Redirect an already-confirmed session away from a login page, to its
/// role's default destination.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_authed(&state) {
            if let Some(role) = state.role() {
                navigate(default_route_for(role), NavigateOptions::default());
            }
        }
    });
}
