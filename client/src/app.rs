//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::admin::AdminDashboardPage;
use crate::pages::admin_jobs::AdminJobsPage;
use crate::pages::admin_login::AdminLoginPage;
use crate::pages::admin_users::AdminUsersPage;
use crate::pages::applicants::ApplicantsPage;
use crate::pages::applications::ApplicationsPage;
use crate::pages::company_dashboard::CompanyDashboardPage;
use crate::pages::company_login::CompanyLoginPage;
use crate::pages::job_detail::JobDetailPage;
use crate::pages::jobs::JobsPage;
use crate::pages::login::LoginPage;
use crate::pages::maintenance::MaintenancePage;
use crate::pages::order_detail::OrderDetailPage;
use crate::pages::orders::OrdersPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::service_detail::ServiceDetailPage;
use crate::pages::services::ServicesPage;
use crate::state::notifications::{self, NotificationsState};
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notification contexts, kicks off the credential
/// bootstrap, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_state = RwSignal::new(SessionState::default());
    let notification_state = RwSignal::new(NotificationsState::default());

    provide_context(session_state);
    provide_context(notification_state);

    // One bootstrap per load; pages re-run it through `refresh_user` after
    // profile-affecting changes.
    session::bootstrap(session_state);
    notifications::spawn_unread_poll(session_state, notification_state);

    view! {
        <Stylesheet id="leptos" href="/pkg/gigboard.css"/>
        <Title text="Gigboard"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=JobsPage/>
                    <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=JobDetailPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("applications") view=ApplicationsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("company"), StaticSegment("login")) view=CompanyLoginPage/>
                    <Route path=StaticSegment("company") view=CompanyDashboardPage/>
                    <Route
                        path=(
                            StaticSegment("company"),
                            StaticSegment("jobs"),
                            ParamSegment("id"),
                            StaticSegment("applicants"),
                        )
                        view=ApplicantsPage
                    />
                    <Route path=StaticSegment("market") view=ServicesPage/>
                    <Route
                        path=(StaticSegment("market"), StaticSegment("services"), ParamSegment("id"))
                        view=ServiceDetailPage
                    />
                    <Route path=(StaticSegment("market"), StaticSegment("orders")) view=OrdersPage/>
                    <Route
                        path=(StaticSegment("market"), StaticSegment("orders"), ParamSegment("id"))
                        view=OrderDetailPage
                    />
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("jobs")) view=AdminJobsPage/>
                    <Route path=StaticSegment("maintenance") view=MaintenancePage/>
                </Routes>
            </main>
        </Router>
    }
}
