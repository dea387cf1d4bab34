//! Lifecycle status badges for applications and orders.
//!
//! DESIGN
//! ======
//! One place maps wire statuses onto display labels and modifier classes so
//! every list and detail view renders the same badge for the same state.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::{ApplicationStatus, OrderStatus};

/// Display label for an application status.
#[must_use]
pub fn application_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "Pending",
        ApplicationStatus::Reviewed => "Reviewed",
        ApplicationStatus::Shortlisted => "Shortlisted",
        ApplicationStatus::Accepted => "Accepted",
        ApplicationStatus::Rejected => "Rejected",
    }
}

/// Badge modifier class for an application status.
#[must_use]
pub fn application_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending | ApplicationStatus::Reviewed => "badge--neutral",
        ApplicationStatus::Shortlisted => "badge--info",
        ApplicationStatus::Accepted => "badge--success",
        ApplicationStatus::Rejected => "badge--danger",
    }
}

/// Display label for an order status.
#[must_use]
pub fn order_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pending",
        OrderStatus::InProgress => "In progress",
        OrderStatus::Delivered => "Delivered",
        OrderStatus::Completed => "Completed",
        OrderStatus::Disputed => "Disputed",
        OrderStatus::Cancelled => "Cancelled",
    }
}

/// Badge modifier class for an order status.
#[must_use]
pub fn order_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge--neutral",
        OrderStatus::InProgress | OrderStatus::Delivered => "badge--info",
        OrderStatus::Completed => "badge--success",
        OrderStatus::Disputed => "badge--danger",
        OrderStatus::Cancelled => "badge--muted",
    }
}

/// Badge for a job-application status.
#[component]
pub fn ApplicationBadge(status: ApplicationStatus) -> impl IntoView {
    view! {
        <span class=format!("badge {}", application_class(status))>{application_label(status)}</span>
    }
}

/// Badge for a marketplace-order status.
#[component]
pub fn OrderBadge(status: OrderStatus) -> impl IntoView {
    view! { <span class=format!("badge {}", order_class(status))>{order_label(status)}</span> }
}
