//! Top navigation chrome, aware of session role and unread counts.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use session::Role;

use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;

/// Primary links for the current session.
fn nav_links(state: &SessionState) -> Vec<(&'static str, &'static str)> {
    match state.role().filter(|_| state.is_authenticated()) {
        Some(Role::User) => vec![
            ("/", "Jobs"),
            ("/market", "Market"),
            ("/applications", "My Applications"),
            ("/market/orders", "Orders"),
            ("/profile", "Profile"),
        ],
        Some(Role::Company) => vec![
            ("/company", "Dashboard"),
            ("/market", "Market"),
            ("/market/orders", "Orders"),
            ("/profile", "Profile"),
        ],
        Some(Role::Admin) => vec![
            ("/admin", "Overview"),
            ("/admin/users", "Accounts"),
            ("/admin/jobs", "Postings"),
        ],
        None => vec![("/", "Jobs"), ("/market", "Market")],
    }
}

/// Top navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::state::session::logout(session_state);
        navigate("/", leptos_router::NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a href="/" class="nav-bar__brand">
                "Gigboard"
            </a>

            <nav class="nav-bar__links">
                {move || {
                    nav_links(&session_state.get())
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="nav-bar__link">
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>

            <span class="nav-bar__spacer"></span>

            <Show when=move || {
                session_state.get().is_authenticated() && notifications.get().unread_total() > 0
            }>
                <a href="/market/orders" class="nav-bar__unread" title="Unread order messages">
                    {move || notifications.get().unread_total()}
                </a>
            </Show>

            <Show
                when=move || session_state.get().is_authenticated()
                fallback=|| {
                    view! {
                        <a href="/login" class="nav-bar__login">
                            "Sign in"
                        </a>
                        <a href="/company/login" class="nav-bar__login nav-bar__login--company">
                            "For employers"
                        </a>
                    }
                }
            >
                <span class="nav-bar__self">
                    {move || session_state.get().principal.map(|p| p.name).unwrap_or_default()}
                </span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
