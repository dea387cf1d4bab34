//! Shared email + password login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user, company, and admin login pages differ only in which endpoint
//! they submit to and where they navigate afterwards; the form itself —
//! field handling, client-side validation, and the classified failure
//! rendering with its recovery actions — is identical and lives here.

use leptos::prelude::*;

use crate::net::api_auth::LoginError;
use crate::util::validation::validate_credentials;

/// Email/password form with per-failure-kind recovery actions.
#[component]
pub fn LoginForm(
    title: &'static str,
    submit_label: &'static str,
    busy: RwSignal<bool>,
    error: RwSignal<Option<LoginError>>,
    on_submit: Callback<(String, String)>,
    on_resend: Callback<String>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_credentials(&email_value, &password_value) {
            info.set(message);
            return;
        }
        info.set(String::new());
        error.set(None);
        on_submit.run((email_value, password_value));
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <form class="login-form" on:submit=submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                {move || {
                    error
                        .get()
                        .map(|err| view! { <LoginFailure error=err email=email on_resend=on_resend /> })
                }}
            </div>
        </div>
    }
}

/// Classified login failure with its recovery action.
#[component]
fn LoginFailure(error: LoginError, email: RwSignal<String>, on_resend: Callback<String>) -> impl IntoView {
    match error {
        LoginError::InvalidCredentials => view! {
            <div class="login-failure">
                <p class="login-message login-message--error">
                    "Invalid email or password. Check them and try again."
                </p>
            </div>
        }
        .into_any(),
        LoginError::UnverifiedEmail => view! {
            <div class="login-failure">
                <p class="login-message login-message--error">"This email address is not verified yet."</p>
                <button
                    class="btn login-failure__action"
                    on:click=move |_| on_resend.run(email.get().trim().to_owned())
                >
                    "Resend verification email"
                </button>
            </div>
        }
        .into_any(),
        LoginError::BlockedAccount => view! {
            <div class="login-failure">
                <p class="login-message login-message--error">"This account has been blocked."</p>
                <a class="btn login-failure__action" href="mailto:support@gigboard.example">
                    "Contact support"
                </a>
            </div>
        }
        .into_any(),
        other => view! {
            <div class="login-failure">
                <p class="login-message login-message--error">{format!("Login failed: {other}")}</p>
            </div>
        }
        .into_any(),
    }
}
