//! Marketplace landing page: browse service listings.

use leptos::prelude::*;

use session::Role;

use crate::components::error_banner::ErrorBanner;
use crate::components::service_card::ServiceCard;
use crate::net::types::{Service, ServiceDraft};
use crate::state::session::SessionState;
use crate::util::validation::validate_service_draft;

/// Marketplace listings with a keyword filter; sellers can publish.
#[component]
pub fn ServicesPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();

    let services = RwSignal::new(Vec::<Service>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let keyword = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_market::list_services().await {
                    Ok(items) => {
                        services.set(items);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Could not load services: {err}"))),
                }
                loading.set(false);
            });
        }
    };
    load();

    let visible = move || {
        let needle = keyword.get().trim().to_lowercase();
        services
            .get()
            .into_iter()
            .filter(|s| {
                needle.is_empty()
                    || s.title.to_lowercase().contains(&needle)
                    || s.seller_name.to_lowercase().contains(&needle)
                    || s.category.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let can_sell = move || {
        let state = session_state.get();
        state.is_authenticated() && state.role() == Some(Role::Company)
    };

    view! {
        <div class="services-page">
            <header class="services-page__header">
                <h1>"Marketplace"</h1>
                <input
                    class="filter-input"
                    type="search"
                    placeholder="Search services"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <Show when=can_sell>
                    <button class="btn" on:click=move |_| show_create.set(true)>
                        "+ New service"
                    </button>
                </Show>
            </header>

            <ErrorBanner error=error on_retry=Callback::new(move |()| load()) />

            <Show when=move || !loading.get() fallback=|| view! { <p class="page-placeholder">"Loading services..."</p> }>
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="services-page__empty">"No services match."</p> }
                >
                    <div class="services-page__grid">
                        {move || {
                            visible().into_iter().map(|s| view! { <ServiceCard service=s /> }).collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || show_create.get()>
                <CreateServiceDialog
                    on_close=Callback::new(move |()| show_create.set(false))
                    on_created=Callback::new(move |()| load())
                />
            </Show>
        </div>
    }
}

/// Modal form for publishing a service listing.
#[component]
fn CreateServiceDialog(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let delivery_days = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        if let Err(message) = validate_service_draft(&title.get(), &price.get(), &description.get()) {
            info.set(message);
            return;
        }
        let Ok(price_value) = price.get().trim().parse::<f64>() else {
            return;
        };
        let delivery = delivery_days.get().trim().parse::<i64>().unwrap_or(3);
        let draft = ServiceDraft {
            title: title.get().trim().to_owned(),
            price: price_value,
            delivery_days: delivery.max(1),
            category: category.get().trim().to_lowercase(),
            description: description.get().trim().to_owned(),
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_market::create_service(&draft).await {
                Ok(_) => {
                    on_created.run(());
                    on_close.run(());
                }
                Err(err) => {
                    info.set(format!("Could not publish: {err}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, on_created);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New service"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Price"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        step="0.01"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Delivery (days)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || delivery_days.get()
                        on:input=move |ev| delivery_days.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="design"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__info">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Publish"
                    </button>
                </div>
            </div>
        </div>
    }
}
