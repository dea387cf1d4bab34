//! Unread chat-notification counts for marketplace orders.
//!
//! DESIGN
//! ======
//! The chat transport itself is the backend's concern; the client only
//! surfaces unread counts, polled while a session is live and refreshed
//! when an order view is opened.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

use crate::net::types::OrderNotification;
use crate::state::session::SessionState;

/// Unread-count state shared by the nav badge and order views.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub per_order: Vec<OrderNotification>,
    pub loading: bool,
    pub error: Option<String>,
}

impl NotificationsState {
    /// Total unread messages across all orders (nav badge).
    #[must_use]
    pub fn unread_total(&self) -> i64 {
        self.per_order.iter().map(|n| n.unread).sum()
    }

    /// Unread messages for one order (order list rows).
    #[must_use]
    pub fn unread_for(&self, order_id: &str) -> i64 {
        self.per_order
            .iter()
            .find(|n| n.order_id == order_id)
            .map_or(0, |n| n.unread)
    }
}

/// Poll interval for unread counts.
#[cfg(feature = "hydrate")]
const POLL_SECS: u64 = 30;

/// Fetch counts once and land them in the shared state.
pub fn refresh(notifications: RwSignal<NotificationsState>) {
    #[cfg(feature = "hydrate")]
    {
        notifications.update(|n| n.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api_market::list_notifications().await {
                Ok(items) => notifications.update(|n| {
                    n.per_order = items;
                    n.loading = false;
                    n.error = None;
                }),
                Err(err) => notifications.update(|n| {
                    n.loading = false;
                    n.error = Some(err.to_string());
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notifications;
    }
}

/// Start the background unread-count poll for the lifetime of the owner.
///
/// Only polls while a session is authenticated; failures keep the previous
/// counts and retry on the next tick.
pub fn spawn_unread_poll(session: RwSignal<SessionState>, notifications: RwSignal<NotificationsState>) {
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !session.get_untracked().is_authenticated() {
                    continue;
                }
                if let Ok(items) = crate::net::api_market::list_notifications().await {
                    notifications.update(|n| {
                        n.per_order = items;
                        n.error = None;
                    });
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, notifications);
    }
}
