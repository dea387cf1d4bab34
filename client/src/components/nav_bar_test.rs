use super::*;
use crate::net::types::Principal;

fn state_for(role: Role) -> SessionState {
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

#[test]
fn signed_out_visitors_see_only_public_links() {
    let links = nav_links(&SessionState::default());
    assert_eq!(links, vec![("/", "Jobs"), ("/market", "Market")]);
}

#[test]
fn users_see_applications_and_orders() {
    let labels: Vec<_> = nav_links(&state_for(Role::User)).into_iter().map(|(_, l)| l).collect();
    assert!(labels.contains(&"My Applications"));
    assert!(labels.contains(&"Orders"));
}

#[test]
fn companies_land_on_their_dashboard() {
    let links = nav_links(&state_for(Role::Company));
    assert_eq!(links[0], ("/company", "Dashboard"));
}

#[test]
fn admins_see_only_back_office_links() {
    let links = nav_links(&state_for(Role::Admin));
    assert!(links.iter().all(|(href, _)| href.starts_with("/admin")));
}
