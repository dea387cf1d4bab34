//! Job posting detail page with the application form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use session::Role;

use crate::components::error_banner::ErrorBanner;
#[cfg(feature = "hydrate")]
use crate::net::http::ApiError;
use crate::net::types::Job;
use crate::state::session::SessionState;

/// Posting detail; job seekers can apply, everyone else just reads.
#[component]
pub fn JobDetailPage() -> impl IntoView {
    let params = use_params_map();
    let session_state = expect_context::<RwSignal<SessionState>>();

    let job = RwSignal::new(None::<Job>);
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
                match crate::net::api_jobs::fetch_job(&id).await {
                    Ok(item) => {
                        job.set(Some(item));
                        error.set(None);
                    }
                    Err(ApiError::NotFound) => {
                        error.set(Some("This posting no longer exists.".to_owned()));
                    }
                    Err(err) => error.set(Some(format!("Could not load the posting: {err}"))),
                }
                loading.set(false);
            });
        }
    };
    load();

    let is_job_seeker = move || {
        let state = session_state.get();
        state.is_authenticated() && state.role() == Some(Role::User)
    };

    view! {
        <div class="job-detail-page">
            <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />

            <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading posting..."</p> }>
                {move || {
                    job.get()
                        .map(|item| {
                            let apply_id = item.id.clone();
                            view! {
                                <article class="job-detail">
                                    <h1>{item.title.clone()}</h1>
                                    <p class="job-detail__company">{item.company_name.clone()}</p>
                                    <p class="job-detail__meta">
                                        <span>{item.location.clone()}</span>
                                        {item.salary_range.clone().map(|range| view! { <span>{range}</span> })}
                                    </p>
                                    <div class="job-detail__description">{item.description.clone()}</div>

                                    <Show
                                        when=is_job_seeker
                                        fallback=move || {
                                            view! {
                                                <Show when=move || !session_state.get().is_authenticated()>
                                                    <p class="job-detail__login-hint">
                                                        <a href="/login">"Sign in"</a>
                                                        " to apply for this role."
                                                    </p>
                                                </Show>
                                            }
                                        }
                                    >
                                        <ApplicationForm job_id=apply_id.clone() />
                                    </Show>
                                </article>
                            }
                        })
                }}
            </Show>
        </div>
    }
}

/// Cover-letter form submitting one application.
#[component]
fn ApplicationForm(job_id: String) -> impl IntoView {
    let cover_letter = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || submitted.get() {
            return;
        }
        let letter = cover_letter.get().trim().to_owned();
        if letter.is_empty() {
            info.set("Write a short cover letter first.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &job_id;
        }
        #[cfg(feature = "hydrate")]
        {
            let id = job_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_applications::apply(&id, &letter).await {
                    Ok(_) => {
                        submitted.set(true);
                        info.set("Application sent. Track it under My Applications.".to_owned());
                    }
                    Err(ApiError::Rejected(message)) => info.set(message),
                    Err(err) => info.set(format!("Could not send the application: {err}")),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <form class="apply-form" on:submit=on_submit>
            <h2>"Apply for this role"</h2>
            <textarea
                class="apply-form__letter"
                placeholder="Why are you a fit?"
                prop:value=move || cover_letter.get()
                on:input=move |ev| cover_letter.set(event_target_value(&ev))
                disabled=move || submitted.get()
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get() || submitted.get()>
                {move || if submitted.get() { "Application sent" } else { "Send application" }}
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="apply-form__info">{move || info.get()}</p>
            </Show>
        </form>
    }
}
