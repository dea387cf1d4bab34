//! Account registration for job seekers and companies.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api_auth::LoginError;
use crate::state::session::SessionState;
use crate::util::guard;
use crate::util::validation::validate_credentials;

/// Which kind of account the form creates.
#[derive(Clone, Copy, PartialEq, Eq)]
enum AccountKind {
    Seeker,
    Company,
}

/// Registration page; on success the new account is logged straight in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_authed_redirect(session_state, navigate);

    let kind = RwSignal::new(AccountKind::Seeker);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if name_value.is_empty() {
            info.set("Enter a name.".to_owned());
            return;
        }
        if let Err(message) = validate_credentials(&email_value, &password_value) {
            info.set(message);
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let selected = kind.get();
            leptos::task::spawn_local(async move {
                let registered = match selected {
                    AccountKind::Seeker => crate::net::api_auth::register(&name_value, &email_value, &password_value).await,
                    AccountKind::Company => {
                        crate::net::api_auth::register_company(&name_value, &email_value, &password_value).await
                    }
                };
                let outcome = match registered {
                    Ok(()) => match selected {
                        AccountKind::Seeker => crate::net::api_auth::login(&email_value, &password_value).await,
                        AccountKind::Company => crate::net::api_auth::login_company(&email_value, &password_value).await,
                    },
                    Err(err) => Err(err),
                };
                match outcome {
                    Ok(()) => crate::state::session::refresh_user(session_state),
                    Err(LoginError::UnverifiedEmail) => {
                        info.set("Account created. Check your inbox to verify your email, then sign in.".to_owned());
                    }
                    Err(err) => info.set(format!("Registration failed: {err}")),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <div class="register-kind">
                    <button
                        class="btn"
                        class:btn--primary=move || kind.get() == AccountKind::Seeker
                        on:click=move |_| kind.set(AccountKind::Seeker)
                    >
                        "I'm looking for work"
                    </button>
                    <button
                        class="btn"
                        class:btn--primary=move || kind.get() == AccountKind::Company
                        on:click=move |_| kind.set(AccountKind::Company)
                    >
                        "I'm hiring"
                    </button>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder=move || {
                            if kind.get() == AccountKind::Company { "Company name" } else { "Your name" }
                        }
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-links">
                    <a href="/login">"Already have an account? Sign in"</a>
                </p>
            </div>
        </div>
    }
}
