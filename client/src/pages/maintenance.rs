//! Maintenance notice page.
//!
//! The edge gate redirects all non-admin routes here while the maintenance
//! flag cookie is set; there is nothing to fetch.

use leptos::prelude::*;

/// Static maintenance notice.
#[component]
pub fn MaintenancePage() -> impl IntoView {
    view! {
        <div class="maintenance-page">
            <h1>"Back soon"</h1>
            <p>"Gigboard is down for scheduled maintenance. Please check back in a little while."</p>
        </div>
    }
}
