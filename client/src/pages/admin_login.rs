//! Back-office login page.
//!
//! The edge gate sends visitors here for any `/admin` route without a
//! valid admin credential cookie; success stores that cookie and the
//! authed-redirect guard forwards into the back office.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::login_form::LoginForm;
use crate::net::api_auth::LoginError;
use crate::state::session::SessionState;
use crate::util::guard;

/// Login page for administrators.
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_authed_redirect(session_state, navigate);

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<LoginError>);

    let on_submit = Callback::new(move |(email, password): (String, String)| {
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_auth::login_admin(&email, &password).await {
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
            title="Back office"
            submit_label="Sign in"
            busy=busy
            error=error
            on_submit=on_submit
            on_resend=on_resend
        />
    }
}
