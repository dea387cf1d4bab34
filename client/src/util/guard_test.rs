use super::*;
use crate::net::types::Principal;

fn authenticated(role: Role) -> SessionState {
    let mut state = SessionState::default();
    let run = state.begin_check();
    state.finish_authenticated(
        run,
        Principal {
            id: "p1".to_owned(),
            name: "Person".to_owned(),
            email: None,
            role,
            avatar_url: None,
            verified: true,
            company_logo: None,
        },
    );
    state
}

fn anonymous() -> SessionState {
    let mut state = SessionState::default();
    let run = state.begin_check();
    state.finish_anonymous(run);
    state
}

fn checking() -> SessionState {
    let mut state = SessionState::default();
    state.begin_check();
    state
}

#[test]
fn anonymous_resolution_triggers_the_unauth_redirect() {
    assert!(should_redirect_unauth(&anonymous()));
}

#[test]
fn no_redirect_while_the_check_is_unresolved() {
    assert!(!should_redirect_unauth(&SessionState::default()));
    assert!(!should_redirect_unauth(&checking()));
    assert!(!should_redirect_authed(&checking()));
}

#[test]
fn authenticated_sessions_do_not_redirect_to_login() {
    assert!(!should_redirect_unauth(&authenticated(Role::User)));
}

#[test]
fn authenticated_sessions_leave_login_pages() {
    assert!(should_redirect_authed(&authenticated(Role::Company)));
    assert!(!should_redirect_authed(&anonymous()));
}

#[test]
fn each_role_has_a_home_and_a_login_route() {
    assert_eq!(default_route_for(Role::User), "/");
    assert_eq!(default_route_for(Role::Company), "/company");
    assert_eq!(default_route_for(Role::Admin), "/admin");
    assert_eq!(login_route_for(Role::User), "/login");
    assert_eq!(login_route_for(Role::Company), "/company/login");
    assert_eq!(login_route_for(Role::Admin), "/admin/login");
}
