//! Card for one job posting in list views.

use leptos::prelude::*;

use crate::net::types::Job;

/// Clickable summary card linking to the posting's detail page.
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let href = format!("/jobs/{}", job.id);
    view! {
        <a href=href class="job-card">
            <h3 class="job-card__title">{job.title}</h3>
            <p class="job-card__company">{job.company_name}</p>
            <p class="job-card__meta">
                <span>{job.location}</span>
                {job.salary_range.map(|range| view! { <span class="job-card__salary">{range}</span> })}
            </p>
            <Show when={
                let category = job.category.clone();
                move || !category.is_empty()
            }>
                <span class="job-card__category">{job.category.clone()}</span>
            </Show>
        </a>
    }
}
