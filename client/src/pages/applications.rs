//! The signed-in job seeker's applications with their lifecycle badges.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::status_badge::ApplicationBadge;
use crate::net::types::Application;
use crate::state::session::SessionState;
use crate::util::guard;

/// "My Applications" page. Requires a signed-in job seeker.
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(session_state, "/login", navigate);

    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_applications::list_my_applications().await {
                    Ok(items) => {
                        applications.set(items);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Could not load applications: {err}"))),
                }
                loading.set(false);
            });
        }
    };

    // Wait for the session before fetching so the request carries a live
    // credential instead of racing the bootstrap.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !session_state.get().is_authenticated() {
            return;
        }
        requested.set(true);
        load();
    });

    view! {
        <Show
            when=move || session_state.get().is_authenticated()
            fallback=move || {
                view! {
                    <p class="page-placeholder">
                        {move || if session_state.get().resolved() { "Redirecting to login..." } else { "Loading..." }}
                    </p>
                }
            }
        >
            <div class="applications-page">
                <h1>"My Applications"</h1>
                <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />
                <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading applications..."</p> }>
                    <Show
                        when=move || !applications.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="applications-page__empty">
                                    "Nothing yet. " <a href="/">"Browse open roles"</a> " to get started."
                                </p>
                            }
                        }
                    >
                        <ul class="applications-page__list">
                            {move || {
                                applications
                                    .get()
                                    .into_iter()
                                    .map(|app| {
                                        let href = format!("/jobs/{}", app.job_id);
                                        view! {
                                            <li class="application-row">
                                                <a href=href class="application-row__job">
                                                    {app.job_title.clone()}
                                                </a>
                                                <span class="application-row__date">
                                                    {app.submitted_at.clone().unwrap_or_default()}
                                                </span>
                                                <ApplicationBadge status=app.status />
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
