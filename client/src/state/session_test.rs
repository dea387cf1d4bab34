use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};

fn principal(id: &str, role: Role) -> Principal {
    Principal {
        id: id.to_owned(),
        name: "Person".to_owned(),
        email: None,
        role,
        avatar_url: None,
        verified: true,
        company_logo: None,
    }
}

fn token(role: Role, exp: i64) -> String {
    let claims = session::Claims {
        sub: "id-1".to_owned(),
        role,
        exp,
        iat: None,
        email: None,
        name: None,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"k")).unwrap()
}

// =============================================================================
// SessionState machine
// =============================================================================

#[test]
fn starts_idle_with_no_principal() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Idle);
    assert!(state.principal.is_none());
    assert!(!state.resolved());
}

#[test]
fn begin_check_enters_checking() {
    let mut state = SessionState::default();
    state.begin_check();
    assert_eq!(state.phase, SessionPhase::Checking);
    assert!(!state.resolved());
}

#[test]
fn successful_check_authenticates() {
    let mut state = SessionState::default();
    let run = state.begin_check();
    assert!(state.finish_authenticated(run, principal("u1", Role::User)));
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::User));
}

#[test]
fn failed_check_lands_anonymous_and_drops_principal() {
    let mut state = SessionState::default();
    let run = state.begin_check();
    state.paint_snapshot(run, principal("u1", Role::User));
    assert!(state.finish_anonymous(run));
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(state.principal.is_none());
}

#[test]
fn superseded_run_cannot_land() {
    let mut state = SessionState::default();
    let stale = state.begin_check();
    let fresh = state.begin_check();

    assert!(!state.finish_authenticated(stale, principal("old", Role::User)));
    assert!(state.principal.is_none());

    assert!(state.finish_anonymous(fresh));
    assert_eq!(state.phase, SessionPhase::Anonymous);
}

#[test]
fn snapshot_paints_during_checking_but_never_authenticates() {
    let mut state = SessionState::default();
    let run = state.begin_check();
    state.paint_snapshot(run, principal("u1", Role::User));
    assert_eq!(state.phase, SessionPhase::Checking);
    assert!(state.principal.is_some());
    assert!(!state.is_authenticated());
}

#[test]
fn snapshot_does_not_paint_after_resolution() {
    let mut state = SessionState::default();
    let run = state.begin_check();
    state.finish_anonymous(run);
    state.paint_snapshot(run, principal("u1", Role::User));
    assert!(state.principal.is_none());
}

#[test]
fn slow_first_submit_loses_to_the_latest_one() {
    // Two profile submits race; the first resolves last and must not win.
    let mut state = SessionState::default();
    let run = state.begin_check();
    state.finish_authenticated(run, principal("u1", Role::User));

    let first = state.begin_mutation();
    let second = state.begin_mutation();

    let mut newer = principal("u1", Role::User);
    newer.name = "Newer".to_owned();
    assert!(state.apply_principal(second, newer));

    let mut older = principal("u1", Role::User);
    older.name = "Older".to_owned();
    assert!(!state.apply_principal(first, older));

    assert_eq!(state.principal.as_ref().unwrap().name, "Newer");
    assert!(state.is_authenticated());
}

#[test]
fn reset_cancels_in_flight_runs() {
    let mut state = SessionState::default();
    let run = state.begin_check();
    state.reset();
    assert!(!state.finish_authenticated(run, principal("u1", Role::User)));
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(state.principal.is_none());
}

// =============================================================================
// plan_check — credential dispositions
// =============================================================================

#[test]
fn no_stored_credential_plans_anonymous_without_clearing() {
    assert_eq!(plan_check(None, 1_000_000), CheckPlan::Anonymous);
}

#[test]
fn garbage_credentials_plan_clear_then_anonymous() {
    for raw in ["undefined", "null", "", "not.a.jwt"] {
        assert_eq!(plan_check(Some(raw), 1_000_000), CheckPlan::ClearThenAnonymous, "kept {raw:?}");
    }
}

#[test]
fn expired_credential_plans_clear_then_anonymous() {
    // Expired one hour ago.
    let raw = token(Role::User, 1_000_000 - 3600);
    assert_eq!(plan_check(Some(&raw), 1_000_000), CheckPlan::ClearThenAnonymous);
}

#[test]
fn valid_credential_plans_a_profile_fetch_for_its_role() {
    let raw = token(Role::Company, 2_000_000);
    assert_eq!(plan_check(Some(&raw), 1_000_000), CheckPlan::FetchProfile(Role::Company));

    let raw = token(Role::Admin, 2_000_000);
    assert_eq!(plan_check(Some(&raw), 1_000_000), CheckPlan::FetchProfile(Role::Admin));
}
