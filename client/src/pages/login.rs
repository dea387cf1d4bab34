//! Job-seeker login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting persists the issued credential, then re-runs the session
//! bootstrap; the authed-redirect guard navigates once the bootstrap
//! confirms the principal, so there is exactly one authentication path.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::login_form::LoginForm;
use crate::net::api_auth::LoginError;
use crate::state::session::SessionState;
use crate::util::guard;

/// Login page for job seekers.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_authed_redirect(session_state, navigate);

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<LoginError>);

    let on_submit = Callback::new(move |(email, password): (String, String)| {
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_auth::login(&email, &password).await {
                Ok(()) => crate::state::session::refresh_user(session_state),
                Err(err) => error.set(Some(err)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
        }
    });

    let on_resend = Callback::new(move |email: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(err) = crate::net::api_auth::resend_verification(&email).await {
                log::warn!("resend verification failed: {err}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
        }
    });

    view! {
        <LoginForm
            title="Welcome back"
            submit_label="Sign in"
            busy=busy
            error=error
            on_submit=on_submit
            on_resend=on_resend
        />
        <p class="login-links">
            <a href="/register">"Create an account"</a>
            <a href="/company/login">"Employer sign in"</a>
        </p>
    }
}
