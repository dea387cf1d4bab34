//! Order detail page: lifecycle actions for buyer and seller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sellers move an order `pending → in_progress → delivered`; buyers close
//! it out (`completed`/`disputed`) or cancel while it is still pending.
//! Every action posts to the backend and refetches the order rather than
//! patching it locally, so the displayed state never drifts from what the
//! backend decided.

#[cfg(test)]
#[path = "order_detail_test.rs"]
mod order_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use session::Role;

use crate::components::error_banner::ErrorBanner;
use crate::components::status_badge::OrderBadge;
#[cfg(feature = "hydrate")]
use crate::net::http::ApiError;
use crate::net::types::{Order, OrderStatus};
use crate::state::session::SessionState;
use crate::util::guard;

/// Lifecycle action a party can take on an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OrderAction {
    Start,
    Deliver,
    Accept,
    Dispute,
    Cancel,
}

impl OrderAction {
    fn label(self) -> &'static str {
        match self {
            Self::Start => "Start work",
            Self::Deliver => "Deliver",
            Self::Accept => "Accept delivery",
            Self::Dispute => "Dispute",
            Self::Cancel => "Cancel order",
        }
    }
}

/// Actions available to a role for an order status.
///
/// Buyers are job-seeker accounts, sellers are companies; admins observe
/// through the back office instead.
fn available_actions(role: Role, status: OrderStatus) -> Vec<OrderAction> {
    match (role, status) {
        (Role::Company, OrderStatus::Pending) => vec![OrderAction::Start],
        (Role::Company, OrderStatus::InProgress) => vec![OrderAction::Deliver],
        (Role::User, OrderStatus::Pending) => vec![OrderAction::Cancel],
        (Role::User, OrderStatus::Delivered) => vec![OrderAction::Accept, OrderAction::Dispute],
        _ => Vec::new(),
    }
}

/// Order detail page. Requires any signed-in account.
#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let params = use_params_map();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(session_state, "/login", navigate);

    let order = RwSignal::new(None::<Order>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let show_deliver = RwSignal::new(false);

    let order_id = move || params.read().get("id").unwrap_or_default();

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let id = order_id();
            if id.is_empty() {
                return;
            }
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_market::fetch_order(&id).await {
                    Ok(item) => {
                        order.set(Some(item));
                        error.set(None);
                    }
                    Err(ApiError::NotFound) => error.set(Some("This order no longer exists.".to_owned())),
                    Err(err) => error.set(Some(format!("Could not load the order: {err}"))),
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
    });

    let on_action = Callback::new(move |action: OrderAction| {
        if action == OrderAction::Deliver {
            show_deliver.set(true);
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let id = order_id();
            leptos::task::spawn_local(async move {
                let result = match action {
                    OrderAction::Start => crate::net::api_market::start_order(&id).await,
                    OrderAction::Accept => crate::net::api_market::accept_delivery(&id).await,
                    OrderAction::Dispute => crate::net::api_market::dispute_order(&id).await,
                    OrderAction::Cancel => crate::net::api_market::cancel_order(&id).await,
                    OrderAction::Deliver => Ok(()),
                };
                match result {
                    Ok(()) => load(),
                    Err(err) => error.set(Some(format!("Could not update the order: {err}"))),
                }
            });
        }
    });

    let on_deliver = Callback::new(move |note: String| {
        show_deliver.set(false);
        #[cfg(feature = "hydrate")]
        {
            let id = order_id();
            leptos::task::spawn_local(async move {
                match crate::net::api_market::deliver_order(&id, &note).await {
                    Ok(()) => load(),
                    Err(err) => error.set(Some(format!("Could not deliver the order: {err}"))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = note;
        }
    });

    let actions = move || {
        let state = session_state.get();
        match (state.role(), order.get()) {
            (Some(role), Some(current)) if state.is_authenticated() => available_actions(role, current.status),
            _ => Vec::new(),
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
            <div class="order-detail-page">
                <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />

                <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading order..."</p> }>
                    {move || {
                        order
                            .get()
                            .map(|item| {
                                let price = format!("${:.2}", item.price);
                                view! {
                                    <article class="order-detail">
                                        <header class="order-detail__head">
                                            <h1>{item.service_title.clone()}</h1>
                                            <OrderBadge status=item.status />
                                        </header>
                                        <p class="order-detail__parties">
                                            {format!("Buyer: {} · Seller: {}", item.buyer_name, item.seller_name)}
                                        </p>
                                        <p class="order-detail__price">{price}</p>
                                        {item
                                            .delivery_note
                                            .clone()
                                            .map(|note| {
                                                view! {
                                                    <div class="order-detail__delivery">
                                                        <h2>"Delivery note"</h2>
                                                        <p>{note}</p>
                                                    </div>
                                                }
                                            })}
                                        <div class="order-detail__actions">
                                            {actions()
                                                .into_iter()
                                                .map(|action| {
                                                    let danger = matches!(
                                                        action,
                                                        OrderAction::Dispute | OrderAction::Cancel
                                                    );
                                                    view! {
                                                        <button
                                                            class=if danger { "btn btn--danger" } else { "btn btn--primary" }
                                                            on:click=move |_| on_action.run(action)
                                                        >
                                                            {action.label()}
                                                        </button>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </article>
                                }
                            })
                    }}
                </Show>

                <Show when=move || show_deliver.get()>
                    <DeliverDialog
                        on_cancel=Callback::new(move |()| show_deliver.set(false))
                        on_deliver=on_deliver
                    />
                </Show>
            </div>
        </Show>
    }
}

/// Modal collecting the delivery note before handing the work over.
#[component]
fn DeliverDialog(on_cancel: Callback<()>, on_deliver: Callback<String>) -> impl IntoView {
    let note = RwSignal::new(String::new());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Deliver order"</h2>
                <label class="dialog__label">
                    "Delivery note"
                    <textarea
                        class="dialog__input dialog__input--area"
                        placeholder="What are you handing over?"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_deliver.run(note.get())>
                        "Deliver"
                    </button>
                </div>
            </div>
        </div>
    }
}
