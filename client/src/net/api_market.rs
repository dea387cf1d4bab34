//! Marketplace calls: service listings, orders, delivery, notifications.

#[cfg(test)]
#[path = "api_market_test.rs"]
mod api_market_test;

use serde::Serialize;

use super::http::{self, ApiError};
use super::types::{Order, OrderNotification, Service, ServiceDraft};

fn service_endpoint(id: &str) -> String {
    format!("/api/marketplace/services/{id}")
}

fn order_endpoint(id: &str) -> String {
    format!("/api/marketplace/orders/{id}")
}

fn order_action_endpoint(id: &str, action: &str) -> String {
    format!("/api/marketplace/orders/{id}/{action}")
}

/// `GET /api/marketplace/services` — all service listings.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn list_services() -> Result<Vec<Service>, ApiError> {
    http::get_list("/api/marketplace/services").await
}

/// `GET /api/marketplace/services/{id}` — one listing.
///
/// # Errors
///
/// Returns [`ApiError`]; [`ApiError::NotFound`] when the listing is gone.
pub async fn fetch_service(id: &str) -> Result<Service, ApiError> {
    http::get_item(&service_endpoint(id)).await
}

/// `POST /api/marketplace/services` — publish a listing (seller).
///
/// # Errors
///
/// Returns [`ApiError`]; validation problems arrive as [`ApiError::Rejected`].
pub async fn create_service(draft: &ServiceDraft) -> Result<Service, ApiError> {
    http::post("/api/marketplace/services", draft).await
}

#[derive(Serialize)]
struct PlaceOrderBody<'a> {
    service_id: &'a str,
}

/// `GET /api/marketplace/orders` — orders the signed-in account is party
/// to, as buyer or seller.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn list_orders() -> Result<Vec<Order>, ApiError> {
    http::get_list("/api/marketplace/orders").await
}

/// `GET /api/marketplace/orders/{id}` — one order.
///
/// # Errors
///
/// Returns [`ApiError`]; [`ApiError::NotFound`] when the order is gone.
pub async fn fetch_order(id: &str) -> Result<Order, ApiError> {
    http::get_item(&order_endpoint(id)).await
}

/// `POST /api/marketplace/orders` — place an order for a service.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn place_order(service_id: &str) -> Result<Order, ApiError> {
    http::post("/api/marketplace/orders", &PlaceOrderBody { service_id }).await
}

/// `POST .../orders/{id}/start` — seller accepts the order and starts work.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn start_order(id: &str) -> Result<(), ApiError> {
    http::post_action(&order_action_endpoint(id, "start")).await
}

#[derive(Serialize)]
struct DeliverBody<'a> {
    note: &'a str,
}

/// `POST .../orders/{id}/deliver` — seller hands over the work.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn deliver_order(id: &str, note: &str) -> Result<(), ApiError> {
    http::post_raw(&order_action_endpoint(id, "deliver"), &DeliverBody { note })
        .await
        .map(|_| ())
}

/// `POST .../orders/{id}/accept` — buyer accepts the delivery, completing
/// the order. Callers refetch the order afterwards.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn accept_delivery(id: &str) -> Result<(), ApiError> {
    http::post_action(&order_action_endpoint(id, "accept")).await
}

/// `POST .../orders/{id}/dispute` — buyer contests the delivery.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn dispute_order(id: &str) -> Result<(), ApiError> {
    http::post_action(&order_action_endpoint(id, "dispute")).await
}

/// `POST .../orders/{id}/cancel` — buyer withdraws a pending order.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn cancel_order(id: &str) -> Result<(), ApiError> {
    http::post_action(&order_action_endpoint(id, "cancel")).await
}

/// `GET /api/marketplace/notifications` — unread chat counts per order.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn list_notifications() -> Result<Vec<OrderNotification>, ApiError> {
    http::get_list("/api/marketplace/notifications").await
}
