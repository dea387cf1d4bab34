//! Dismissible failure banner for data-fetching views.
//!
//! Every view owns its error signal; this renders it uniformly so the user
//! is never left staring at a spinner with no explanation.

use leptos::prelude::*;

/// Failure banner with an optional retry affordance.
#[component]
pub fn ErrorBanner(
    error: RwSignal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__message">{move || error.get().unwrap_or_default()}</span>
                {on_retry.map(|retry| {
                    view! {
                        <button class="btn error-banner__retry" on:click=move |_| retry.run(())>
                            "Retry"
                        </button>
                    }
                })}
                <button class="btn error-banner__dismiss" on:click=move |_| error.set(None)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
