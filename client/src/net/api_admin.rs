//! Admin back-office calls: stats, account moderation, posting moderation.
//!
//! All paths live under `/api/admin/`, so the transport layer attaches the
//! admin credential cookie rather than the public session one.

#[cfg(test)]
#[path = "api_admin_test.rs"]
mod api_admin_test;

use super::http::{self, ApiError};
use super::types::{AdminStats, AdminUser, Job};

fn user_action_endpoint(id: &str, action: &str) -> String {
    format!("/api/admin/users/{id}/{action}")
}

fn job_endpoint(id: &str) -> String {
    format!("/api/admin/jobs/{id}")
}

/// `GET /api/admin/stats` — dashboard counters.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_stats() -> Result<AdminStats, ApiError> {
    http::get_item("/api/admin/stats").await
}

/// `GET /api/admin/users` — every account, user and company.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn list_users() -> Result<Vec<AdminUser>, ApiError> {
    http::get_list("/api/admin/users").await
}

/// `POST /api/admin/users/{id}/block` — block an account.
/// Callers refetch the list afterwards so derived stats stay consistent.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn block_user(id: &str) -> Result<(), ApiError> {
    http::post_action(&user_action_endpoint(id, "block")).await
}

/// `POST /api/admin/users/{id}/unblock` — lift a block.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn unblock_user(id: &str) -> Result<(), ApiError> {
    http::post_action(&user_action_endpoint(id, "unblock")).await
}

/// `GET /api/admin/jobs` — every posting, for moderation.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn list_jobs() -> Result<Vec<Job>, ApiError> {
    http::get_list("/api/admin/jobs").await
}

/// `DELETE /api/admin/jobs/{id}` — remove a posting.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn remove_job(id: &str) -> Result<(), ApiError> {
    http::delete(&job_endpoint(id)).await
}
