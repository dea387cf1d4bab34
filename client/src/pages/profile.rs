//! Profile editing for the signed-in user or company.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits are deliberately not serialized behind a busy flag: the session
//! store's generation counter guarantees that when two submits race, the
//! latest one is what lands, however the responses are ordered.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use session::Role;

use crate::net::api_auth::ProfileUpdate;
use crate::state::session::SessionState;
use crate::util::guard;

/// Profile page for users and companies.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(session_state, "/login", navigate);

    let name = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
    let company_logo = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    // Seed the form once the principal is available.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        let state = session_state.get();
        if !state.is_authenticated() {
            return;
        }
        if let Some(principal) = state.principal {
            name.set(principal.name);
            avatar_url.set(principal.avatar_url.unwrap_or_default());
            company_logo.set(principal.company_logo.unwrap_or_default());
            seeded.set(true);
        }
    });

    let is_company = move || session_state.get().role() == Some(Role::Company);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            info.set("Name cannot be empty.".to_owned());
            return;
        }
        let Some(role) = session_state.get_untracked().role() else {
            return;
        };
        let update = ProfileUpdate {
            name: name_value,
            avatar_url: Some(avatar_url.get().trim().to_owned()).filter(|v| !v.is_empty()),
            company_logo: Some(company_logo.get().trim().to_owned()).filter(|v| !v.is_empty()),
        };

        saving.set(true);
        info.set(String::new());
        let run = crate::state::session::begin_profile_update(session_state);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_auth::update_profile(role, &update).await {
                Ok(principal) => {
                    crate::state::session::apply_profile_update(session_state, run, principal);
                    info.set("Profile saved.".to_owned());
                }
                Err(err) => info.set(format!("Could not save the profile: {err}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (role, update, run);
        }
    };

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
            <div class="profile-page">
                <h1>"Profile"</h1>
                <form class="profile-form" on:submit=on_submit>
                    <label class="profile-form__label">
                        "Display name"
                        <input
                            class="profile-form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "Avatar URL"
                        <input
                            class="profile-form__input"
                            type="url"
                            prop:value=move || avatar_url.get()
                            on:input=move |ev| avatar_url.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=is_company>
                        <label class="profile-form__label">
                            "Company logo URL"
                            <input
                                class="profile-form__input"
                                type="url"
                                prop:value=move || company_logo.get()
                                on:input=move |ev| company_logo.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <button class="btn btn--primary" type="submit">
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="profile-form__info">{move || info.get()}</p>
                </Show>
            </div>
        </Show>
    }
}
