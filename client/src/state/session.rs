//! Session state and the credential bootstrap machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! One provider holds the in-memory principal for route guards and
//! role-aware chrome. All writes go through the methods here — `bootstrap`,
//! login follow-up, profile updates, `logout` — never directly from views,
//! so the invariant holds that the in-memory phase is always *derived from*
//! the stored credential, never independent of it.
//!
//! The machine is `Idle → Checking → {Authenticated, Anonymous}`, re-entrant
//! and idempotent: it runs on mount and again on every `refresh_user`. Each
//! run takes a fresh generation number and a superseded run's completion is
//! discarded, so a slow response can never overwrite a newer one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use session::{ADMIN_TOKEN_COOKIE, PROFILE_SNAPSHOT_COOKIE, Role, SESSION_TOKEN_COOKIE, SESSION_TTL_DAYS};

use crate::net::types::Principal;
use crate::util::cookies;

/// Where the bootstrap machine currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing has run yet (server render, or first client tick).
    #[default]
    Idle,
    /// A credential check is in flight; guards show a placeholder.
    Checking,
    /// A valid credential was confirmed against its profile endpoint.
    Authenticated,
    /// No usable credential; the visitor is signed out.
    Anonymous,
}

/// Auth-session state for the current browser user.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Current machine phase.
    pub phase: SessionPhase,
    /// The signed-in identity, while one exists. During `Checking` this may
    /// hold the snapshot-cookie principal for fast paint; the phase alone
    /// decides authentication.
    pub principal: Option<Principal>,
    /// Monotonic run counter; completions carrying a stale value are
    /// discarded.
    generation: u64,
}

impl SessionState {
    /// Whether the machine has confirmed a signed-in identity.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// Whether the machine has reached a terminal phase.
    #[must_use]
    pub fn resolved(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated | SessionPhase::Anonymous)
    }

    /// Role of the signed-in identity, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.principal.as_ref().map(|p| p.role)
    }

    /// Start a credential check, superseding any run still in flight.
    pub fn begin_check(&mut self) -> u64 {
        self.generation += 1;
        self.phase = SessionPhase::Checking;
        self.generation
    }

    /// Claim a generation for a profile mutation without leaving the
    /// current phase.
    pub fn begin_mutation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_current(&self, run: u64) -> bool {
        self.generation == run
    }

    /// Paint a snapshot principal while its run is still checking.
    /// Never changes the phase — a snapshot by itself authenticates nothing.
    pub fn paint_snapshot(&mut self, run: u64, principal: Principal) {
        if self.is_current(run) && self.phase == SessionPhase::Checking && self.principal.is_none() {
            self.principal = Some(principal);
        }
    }

    /// Land a successful check. Returns `false` when the run was superseded
    /// and nothing was applied.
    pub fn finish_authenticated(&mut self, run: u64, principal: Principal) -> bool {
        if !self.is_current(run) {
            return false;
        }
        self.phase = SessionPhase::Authenticated;
        self.principal = Some(principal);
        true
    }

    /// Land a failed or empty check. Returns `false` when the run was
    /// superseded and nothing was applied.
    pub fn finish_anonymous(&mut self, run: u64) -> bool {
        if !self.is_current(run) {
            return false;
        }
        self.phase = SessionPhase::Anonymous;
        self.principal = None;
        true
    }

    /// Replace the principal without touching the phase (profile edits).
    /// Returns `false` when the run was superseded.
    pub fn apply_principal(&mut self, run: u64, principal: Principal) -> bool {
        if !self.is_current(run) {
            return false;
        }
        self.principal = Some(principal);
        true
    }

    /// Drop to `Anonymous` immediately and cancel any in-flight run.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = SessionPhase::Anonymous;
        self.principal = None;
    }
}

/// What a bootstrap run should do for a stored credential and clock.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq)]
pub(crate) enum CheckPlan {
    /// Nothing stored; resolve anonymous without touching cookies.
    Anonymous,
    /// Something stored but unusable (garbage, undecodable, expired);
    /// clear it, then resolve anonymous.
    ClearThenAnonymous,
    /// A usable credential; fetch the role's profile.
    FetchProfile(Role),
}

/// Pure decision for one bootstrap run.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn plan_check(stored: Option<&str>, now: i64) -> CheckPlan {
    let Some(raw) = stored else {
        return CheckPlan::Anonymous;
    };
    match session::evaluate(raw, now) {
        Ok(claims) => CheckPlan::FetchProfile(claims.role),
        Err(_) => CheckPlan::ClearThenAnonymous,
    }
}

/// First credential cookie present, with its name so a failed check clears
/// the right one. The public session wins over the admin portal's.
#[cfg(feature = "hydrate")]
fn stored_credential() -> Option<(&'static str, String)> {
    for name in [SESSION_TOKEN_COOKIE, ADMIN_TOKEN_COOKIE] {
        if let Some(raw) = cookies::read(name) {
            return Some((name, raw));
        }
    }
    None
}

#[cfg(feature = "hydrate")]
fn clear_stored(cookie_name: &str) {
    cookies::clear(cookie_name);
    cookies::clear(PROFILE_SNAPSHOT_COOKIE);
}

/// Principal snapshot from the fast-paint cookie, if present and parsable.
fn read_snapshot() -> Option<Principal> {
    let raw = cookies::read(PROFILE_SNAPSHOT_COOKIE)?;
    serde_json::from_str(&raw).ok()
}

/// Run the bootstrap machine once: read the credential, decode, check
/// expiry, fetch the role's profile, and land in a terminal phase.
///
/// Safe to call at any time; a re-run supersedes the previous one. On the
/// server this only parks the machine in `Checking` so guards render the
/// loading placeholder — hydration re-runs it with cookie access.
pub fn bootstrap(state: RwSignal<SessionState>) {
    let run = state.try_update(SessionState::begin_check).unwrap_or_default();

    if let Some(snapshot) = read_snapshot() {
        state.update(|s| s.paint_snapshot(run, snapshot));
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let resolved = check_credential().await;
        state.update(|s| {
            let _ = match resolved {
                Some(principal) => s.finish_authenticated(run, principal),
                None => s.finish_anonymous(run),
            };
        });
    });
}

/// Re-run the bootstrap after a profile-affecting change (login, profile
/// edit elsewhere). Identical to the mount-time run.
pub fn refresh_user(state: RwSignal<SessionState>) {
    bootstrap(state);
}

#[cfg(feature = "hydrate")]
async fn check_credential() -> Option<Principal> {
    let stored = stored_credential();
    let plan = plan_check(stored.as_ref().map(|(_, raw)| raw.as_str()), crate::util::clock::now_secs());
    match plan {
        CheckPlan::Anonymous => None,
        CheckPlan::ClearThenAnonymous => {
            if let Some((name, _)) = stored {
                clear_stored(name);
            }
            None
        }
        CheckPlan::FetchProfile(role) => match crate::net::api_auth::fetch_principal(role).await {
            Ok(principal) => {
                // Keep the fast-paint snapshot aligned with what the
                // backend just confirmed.
                if let Ok(snapshot) = serde_json::to_string(&principal) {
                    cookies::write(PROFILE_SNAPSHOT_COOKIE, &snapshot, SESSION_TTL_DAYS);
                }
                Some(principal)
            }
            Err(err) => {
                // Routine on return visits with a revoked/expired session;
                // clear silently rather than alerting the user.
                log::warn!("profile fetch failed during bootstrap: {err}");
                if let Some((name, _)) = stored {
                    clear_stored(name);
                }
                None
            }
        },
    }
}

/// Clear every stored credential and drop the in-memory session.
/// Navigation back to a public route is the caller's concern.
pub fn logout(state: RwSignal<SessionState>) {
    cookies::clear(SESSION_TOKEN_COOKIE);
    cookies::clear(ADMIN_TOKEN_COOKIE);
    cookies::clear(PROFILE_SNAPSHOT_COOKIE);
    state.update(SessionState::reset);
}

/// Claim a generation for an in-flight profile submit.
pub fn begin_profile_update(state: RwSignal<SessionState>) -> u64 {
    state.try_update(SessionState::begin_mutation).unwrap_or_default()
}

/// Land a profile submit, unless a later one has superseded it.
pub fn apply_profile_update(state: RwSignal<SessionState>, run: u64, principal: Principal) {
    let applied = state
        .try_update(|s| s.apply_principal(run, principal.clone()))
        .unwrap_or_default();
    if applied {
        if let Ok(snapshot) = serde_json::to_string(&principal) {
            cookies::write(PROFILE_SNAPSHOT_COOKIE, &snapshot, SESSION_TTL_DAYS);
        }
    }
}
