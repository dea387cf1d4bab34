//! Service listing detail page with the order action.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use session::Role;

use crate::components::error_banner::ErrorBanner;
#[cfg(feature = "hydrate")]
use crate::net::http::ApiError;
use crate::net::types::Service;
use crate::state::session::SessionState;

/// Listing detail; signed-in job seekers can place an order.
#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let service = RwSignal::new(None::<Service>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let ordering = RwSignal::new(false);

    let service_id = move || params.read().get("id").unwrap_or_default();

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let id = service_id();
            if id.is_empty() {
                return;
            }
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_market::fetch_service(&id).await {
                    Ok(item) => {
                        service.set(Some(item));
                        error.set(None);
                    }
                    Err(ApiError::NotFound) => error.set(Some("This listing no longer exists.".to_owned())),
                    Err(err) => error.set(Some(format!("Could not load the listing: {err}"))),
                }
                loading.set(false);
            });
        }
    };
    load();

    let can_order = move || {
        let state = session_state.get();
        state.is_authenticated() && state.role() == Some(Role::User)
    };

    let on_order = move |_| {
        if ordering.get() {
            return;
        }
        ordering.set(true);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
        #[cfg(feature = "hydrate")]
        {
            let id = service_id();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_market::place_order(&id).await {
                    Ok(order) => {
                        navigate(
                            &format!("/market/orders/{}", order.id),
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(err) => {
                        error.set(Some(format!("Could not place the order: {err}")));
                        ordering.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="service-detail-page">
            <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />

            <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading listing..."</p> }>
                {
                    let on_order = on_order.clone();
                    move || {
                        let on_order = on_order.clone();
                        service
                            .get()
                            .map(move |item| {
                            let price = format!("${:.2}", item.price);
                            let delivery = format!("Delivers in {} days", item.delivery_days);
                            view! {
                                <article class="service-detail">
                                    <h1>{item.title.clone()}</h1>
                                    <p class="service-detail__seller">{item.seller_name.clone()}</p>
                                    <p class="service-detail__meta">
                                        <span class="service-detail__price">{price}</span>
                                        <span>{delivery}</span>
                                    </p>
                                    <div class="service-detail__description">{item.description.clone()}</div>

                                    <Show
                                        when=can_order
                                        fallback=move || {
                                            view! {
                                                <Show when=move || !session_state.get().is_authenticated()>
                                                    <p class="service-detail__login-hint">
                                                        <a href="/login">"Sign in"</a>
                                                        " to order this service."
                                                    </p>
                                                </Show>
                                            }
                                        }
                                    >
                                        <button
                                            class="btn btn--primary service-detail__order"
                                            disabled=move || ordering.get()
                                            on:click=on_order.clone()
                                        >
                                            {move || if ordering.get() { "Placing order..." } else { "Order now" }}
                                        </button>
                                    </Show>
                                </article>
                            }
                        })
                    }
                }
            </Show>
        </div>
    }
}
