//! Admin posting moderation: review and remove job postings.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::net::types::Job;
use crate::state::session::SessionState;
use crate::util::guard;

/// Posting moderation page. Requires a signed-in administrator.
#[component]
pub fn AdminJobsPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(session_state, "/admin/login", navigate);

    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let remove_target = RwSignal::new(None::<(String, String)>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_admin::list_jobs().await {
                    Ok(items) => {
                        jobs.set(items);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Could not load postings: {err}"))),
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

    let on_remove_confirm = Callback::new(move |()| {
        let Some((id, _)) = remove_target.get_untracked() else {
            return;
        };
        remove_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::remove_job(&id).await {
                Ok(()) => load(),
                Err(err) => error.set(Some(format!("Could not remove the posting: {err}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
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
                <h1>"Postings"</h1>
                <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />
                <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading postings..."</p> }>
                    <ul class="admin-page__list">
                        {move || {
                            jobs.get()
                                .into_iter()
                                .map(|job| {
                                    let target = (job.id.clone(), job.title.clone());
                                    view! {
                                        <li class="moderation-row">
                                            <span class="moderation-row__title">{job.title.clone()}</span>
                                            <span class="moderation-row__company">{job.company_name.clone()}</span>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| remove_target.set(Some(target.clone()))
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>

                {move || {
                    remove_target
                        .get()
                        .map(|(_, title)| {
                            view! {
                                <ConfirmDialog
                                    title="Remove posting"
                                    message=format!("Remove \"{title}\"? Applicants will no longer see it.")
                                    confirm_label="Remove"
                                    danger=true
                                    on_confirm=on_remove_confirm
                                    on_cancel=Callback::new(move |()| remove_target.set(None))
                                />
                            }
                        })
                }}
            </div>
        </Show>
    }
}
