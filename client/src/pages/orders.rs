//! Order list for the signed-in account, buyer or seller side.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::status_badge::OrderBadge;
use crate::net::types::Order;
use crate::state::notifications::{self, NotificationsState};
use crate::state::session::SessionState;
use crate::util::guard;

/// Orders page. Requires any signed-in account.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let notification_state = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(session_state, "/login", navigate);

    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_market::list_orders().await {
                    Ok(items) => {
                        orders.set(items);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Could not load orders: {err}"))),
                }
                loading.set(false);
            });
        }
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !session_state.get().is_authenticated() {
            return;
        }
        requested.set(true);
        load();
        notifications::refresh(notification_state);
    });

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
            <div class="orders-page">
                <h1>"Orders"</h1>
                <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />
                <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading orders..."</p> }>
                    <Show
                        when=move || !orders.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="orders-page__empty">
                                    "No orders yet. " <a href="/market">"Browse the marketplace"</a> "."
                                </p>
                            }
                        }
                    >
                        <ul class="orders-page__list">
                            {move || {
                                orders
                                    .get()
                                    .into_iter()
                                    .map(|order| {
                                        let href = format!("/market/orders/{}", order.id);
                                        let order_id = order.id.clone();
                                        view! {
                                            <li class="order-row">
                                                <a href=href class="order-row__title">
                                                    {order.service_title.clone()}
                                                </a>
                                                <span class="order-row__parties">
                                                    {format!("{} → {}", order.buyer_name, order.seller_name)}
                                                </span>
                                                <Show when={
                                                    let order_id = order_id.clone();
                                                    move || notification_state.get().unread_for(&order_id) > 0
                                                }>
                                                    <span class="order-row__unread" title="Unread messages">
                                                        {
                                                            let order_id = order_id.clone();
                                                            move || notification_state.get().unread_for(&order_id)
                                                        }
                                                    </span>
                                                </Show>
                                                <OrderBadge status=order.status />
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
