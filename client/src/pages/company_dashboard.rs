//! Employer dashboard: the company's postings, creation, and teardown.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::net::types::{Job, JobDraft};
use crate::state::session::SessionState;
use crate::util::guard;
use crate::util::validation::validate_job_draft;

/// Company dashboard. Requires a signed-in company.
#[component]
pub fn CompanyDashboardPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(session_state, "/company/login", navigate);

    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let show_post = RwSignal::new(false);
    let delete_job_id = RwSignal::new(None::<String>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_jobs::list_company_jobs().await {
                    Ok(items) => {
                        jobs.set(items);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Could not load your postings: {err}"))),
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

    let on_delete_cancel = Callback::new(move |()| delete_job_id.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_job_id.get_untracked() else {
            return;
        };
        delete_job_id.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_jobs::delete_job(&id).await {
                Ok(()) => load(),
                Err(err) => error.set(Some(format!("Could not delete the posting: {err}"))),
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
            <div class="company-page">
                <header class="company-page__header toolbar">
                    <span class="toolbar__title">"Your postings"</span>
                    <button class="btn toolbar__new" on:click=move |_| show_post.set(true)>
                        "+ Post a job"
                    </button>
                </header>

                <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />

                <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading postings..."</p> }>
                    <Show
                        when=move || !jobs.get().is_empty()
                        fallback=|| view! { <p class="company-page__empty">"No postings yet."</p> }
                    >
                        <ul class="company-page__list">
                            {move || {
                                jobs.get()
                                    .into_iter()
                                    .map(|job| {
                                        let applicants_href = format!("/company/jobs/{}/applicants", job.id);
                                        let job_id = job.id.clone();
                                        view! {
                                            <li class="company-job-row">
                                                <span class="company-job-row__title">{job.title.clone()}</span>
                                                <span class="company-job-row__location">{job.location.clone()}</span>
                                                <a href=applicants_href class="btn">
                                                    "Applicants"
                                                </a>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| delete_job_id.set(Some(job_id.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>

                <Show when=move || show_post.get()>
                    <PostJobDialog
                        on_close=Callback::new(move |()| show_post.set(false))
                        on_created=Callback::new(move |()| load())
                    />
                </Show>
                <Show when=move || delete_job_id.get().is_some()>
                    <ConfirmDialog
                        title="Delete posting"
                        message="This will take the posting down and close its applications.".to_owned()
                        confirm_label="Delete"
                        danger=true
                        on_confirm=on_delete_confirm
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}

/// Modal form for publishing a new posting.
#[component]
fn PostJobDialog(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let salary_range = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        if let Err(message) = validate_job_draft(&title.get(), &location.get(), &description.get()) {
            info.set(message);
            return;
        }
        let draft = JobDraft {
            title: title.get().trim().to_owned(),
            location: location.get().trim().to_owned(),
            category: category.get().trim().to_lowercase(),
            description: description.get().trim().to_owned(),
            salary_range: Some(salary_range.get().trim().to_owned()).filter(|v| !v.is_empty()),
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_jobs::create_job(&draft).await {
                Ok(_) => {
                    on_created.run(());
                    on_close.run(());
                }
                Err(err) => {
                    info.set(format!("Could not publish: {err}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, on_created);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Post a job"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Location"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="engineering"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Salary range (optional)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="€60k–€80k"
                        prop:value=move || salary_range.get()
                        on:input=move |ev| salary_range.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__info">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Publish"
                    </button>
                </div>
            </div>
        </div>
    }
}
