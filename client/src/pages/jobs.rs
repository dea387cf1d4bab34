//! Public landing page: browse and filter job postings.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the anonymous entry point. Filtering is purely client-side over
//! the fetched list; the backend exposes no query parameters worth using.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::job_card::JobCard;
use crate::net::types::Job;

/// Case-insensitive client-side filter over the fetched postings.
fn filter_jobs(jobs: &[Job], keyword: &str, location: &str, category: &str) -> Vec<Job> {
    let keyword = keyword.trim().to_lowercase();
    let location = location.trim().to_lowercase();
    jobs.iter()
        .filter(|job| {
            if !keyword.is_empty() {
                let haystack = format!(
                    "{} {} {}",
                    job.title.to_lowercase(),
                    job.company_name.to_lowercase(),
                    job.description.to_lowercase()
                );
                if !haystack.contains(&keyword) {
                    return false;
                }
            }
            if !location.is_empty() && !job.location.to_lowercase().contains(&location) {
                return false;
            }
            if !category.is_empty() && job.category != category {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Distinct categories present in the fetched postings, sorted.
fn categories_of(jobs: &[Job]) -> Vec<String> {
    let mut categories: Vec<String> =
        jobs.iter().map(|j| j.category.clone()).filter(|c| !c.is_empty()).collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Job-board landing page with keyword/location/category filters.
#[component]
pub fn JobsPage() -> impl IntoView {
    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let keyword = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_jobs::list_jobs().await {
                    Ok(items) => {
                        jobs.set(items);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Could not load jobs: {err}"))),
                }
                loading.set(false);
            });
        }
    };
    load();

    let visible = move || filter_jobs(&jobs.get(), &keyword.get(), &location.get(), &category.get());

    view! {
        <div class="jobs-page">
            <header class="jobs-page__header">
                <h1>"Find your next role"</h1>
                <div class="jobs-page__filters">
                    <input
                        class="filter-input"
                        type="search"
                        placeholder="Keyword"
                        prop:value=move || keyword.get()
                        on:input=move |ev| keyword.set(event_target_value(&ev))
                    />
                    <input
                        class="filter-input"
                        type="search"
                        placeholder="Location"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <select
                        class="filter-input"
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"All categories"</option>
                        {move || {
                            categories_of(&jobs.get())
                                .into_iter()
                                .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
            </header>

            <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />

            <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading jobs..."</p> }>
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="jobs-page__empty">"No postings match your filters."</p> }
                >
                    <div class="jobs-page__grid">
                        {move || visible().into_iter().map(|job| view! { <JobCard job=job /> }).collect::<Vec<_>>()}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
