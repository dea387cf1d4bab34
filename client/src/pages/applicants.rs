//! Company view of the applications for one posting, with lifecycle moves.

#[cfg(test)]
#[path = "applicants_test.rs"]
mod applicants_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_banner::ErrorBanner;
use crate::components::status_badge::ApplicationBadge;
use crate::net::types::{Application, ApplicationStatus};
use crate::state::session::SessionState;
use crate::util::guard;

/// Lifecycle moves a company can make from a status.
///
/// Accepted and rejected are terminal; everything else narrows toward one
/// of them.
fn available_transitions(status: ApplicationStatus) -> &'static [(ApplicationStatus, &'static str)] {
    match status {
        ApplicationStatus::Pending => &[
            (ApplicationStatus::Reviewed, "Mark reviewed"),
            (ApplicationStatus::Shortlisted, "Shortlist"),
            (ApplicationStatus::Rejected, "Reject"),
        ],
        ApplicationStatus::Reviewed => &[
            (ApplicationStatus::Shortlisted, "Shortlist"),
            (ApplicationStatus::Rejected, "Reject"),
        ],
        ApplicationStatus::Shortlisted => &[
            (ApplicationStatus::Accepted, "Accept"),
            (ApplicationStatus::Rejected, "Reject"),
        ],
        ApplicationStatus::Accepted | ApplicationStatus::Rejected => &[],
    }
}

/// Applicants page for one posting. Requires a signed-in company.
#[component]
pub fn ApplicantsPage() -> impl IntoView {
    let params = use_params_map();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(session_state, "/company/login", navigate);

    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let job_id = move || params.read().get("id").unwrap_or_default();

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let id = job_id();
            if id.is_empty() {
                return;
            }
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_applications::list_job_applications(&id).await {
                    Ok(items) => {
                        applications.set(items);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Could not load applicants: {err}"))),
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

    // Transition, then refetch: the backend recomputes per-status counts,
    // so patching the row locally would let the list drift.
    let on_transition = Callback::new(move |(id, status): (String, ApplicationStatus)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_applications::set_status(&id, status).await {
                Ok(()) => load(),
                Err(err) => error.set(Some(format!("Could not update the application: {err}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
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
            <div class="applicants-page">
                <h1>"Applicants"</h1>
                <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />
                <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading applicants..."</p> }>
                    <Show
                        when=move || !applications.get().is_empty()
                        fallback=|| view! { <p class="applicants-page__empty">"No applications yet."</p> }
                    >
                        <ul class="applicants-page__list">
                            {move || {
                                applications
                                    .get()
                                    .into_iter()
                                    .map(|app| view! { <ApplicantRow app=app on_transition=on_transition /> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}

/// One applicant with their cover letter and the moves available from the
/// current status.
#[component]
fn ApplicantRow(app: Application, on_transition: Callback<(String, ApplicationStatus)>) -> impl IntoView {
    let app_id = app.id.clone();
    view! {
        <li class="applicant-row">
            <div class="applicant-row__head">
                <span class="applicant-row__name">{app.applicant_name.clone()}</span>
                <ApplicationBadge status=app.status />
            </div>
            <p class="applicant-row__letter">{app.cover_letter.clone()}</p>
            <div class="applicant-row__actions">
                {available_transitions(app.status)
                    .iter()
                    .map(|&(next, label)| {
                        let id = app_id.clone();
                        view! {
                            <button class="btn" on:click=move |_| on_transition.run((id.clone(), next))>
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </li>
    }
}
