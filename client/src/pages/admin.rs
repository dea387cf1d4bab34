//! Admin back-office landing page with aggregate counters.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::AdminStats;
use crate::state::session::SessionState;
use crate::util::guard;

/// Back-office overview. Requires a signed-in administrator; the edge gate
/// already bounced visitors without an admin cookie before this rendered.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(session_state, "/admin/login", navigate);

    let stats = RwSignal::new(AdminStats::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_admin::fetch_stats().await {
                    Ok(counters) => {
                        stats.set(counters);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Could not load stats: {err}"))),
                }
                loading.set(false);
            });
        }
    };

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
            <div class="admin-page">
                <h1>"Back office"</h1>
                <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />
                <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading stats..."</p> }>
                    <div class="admin-page__tiles">
                        <div class="stat-tile">
                            <span class="stat-tile__value">{move || stats.get().users}</span>
                            <span class="stat-tile__label">"Users"</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-tile__value">{move || stats.get().companies}</span>
                            <span class="stat-tile__label">"Companies"</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-tile__value">{move || stats.get().jobs}</span>
                            <span class="stat-tile__label">"Postings"</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-tile__value">{move || stats.get().orders}</span>
                            <span class="stat-tile__label">"Orders"</span>
                        </div>
                        <div class="stat-tile stat-tile--alert">
                            <span class="stat-tile__value">{move || stats.get().open_disputes}</span>
                            <span class="stat-tile__label">"Open disputes"</span>
                        </div>
                    </div>
                </Show>
                <nav class="admin-page__links">
                    <a href="/admin/users" class="btn">
                        "Manage accounts"
                    </a>
                    <a href="/admin/jobs" class="btn">
                        "Moderate postings"
                    </a>
                </nav>
            </div>
        </Show>
    }
}
