//! Card for one marketplace service listing.

use leptos::prelude::*;

use crate::net::types::Service;

/// Clickable summary card linking to the listing's detail page.
#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let href = format!("/market/services/{}", service.id);
    let price = format!("${:.2}", service.price);
    let delivery = format!("{}d delivery", service.delivery_days);
    view! {
        <a href=href class="service-card">
            <h3 class="service-card__title">{service.title}</h3>
            <p class="service-card__seller">{service.seller_name}</p>
            <p class="service-card__meta">
                <span class="service-card__price">{price}</span>
                <span class="service-card__delivery">{delivery}</span>
            </p>
        </a>
    }
}
