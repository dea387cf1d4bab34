//! Job-board CRUD calls.

#[cfg(test)]
#[path = "api_jobs_test.rs"]
mod api_jobs_test;

use super::http::{self, ApiError};
use super::types::{Job, JobDraft};

fn job_endpoint(id: &str) -> String {
    format!("/api/jobs/{id}")
}

/// `GET /api/jobs` — all open postings.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn list_jobs() -> Result<Vec<Job>, ApiError> {
    http::get_list("/api/jobs").await
}

/// `GET /api/jobs/{id}` — one posting.
///
/// # Errors
///
/// Returns [`ApiError`]; [`ApiError::NotFound`] when the posting is gone.
pub async fn fetch_job(id: &str) -> Result<Job, ApiError> {
    http::get_item(&job_endpoint(id)).await
}

/// `GET /api/company/jobs` — the signed-in company's own postings.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn list_company_jobs() -> Result<Vec<Job>, ApiError> {
    http::get_list("/api/company/jobs").await
}

/// `POST /api/jobs` — publish a posting.
///
/// # Errors
///
/// Returns [`ApiError`]; validation problems arrive as [`ApiError::Rejected`].
pub async fn create_job(draft: &JobDraft) -> Result<Job, ApiError> {
    http::post("/api/jobs", draft).await
}

/// `PATCH /api/jobs/{id}` — update a posting.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn update_job(id: &str, draft: &JobDraft) -> Result<Job, ApiError> {
    http::patch(&job_endpoint(id), draft).await
}

/// `DELETE /api/jobs/{id}` — take a posting down.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn delete_job(id: &str) -> Result<(), ApiError> {
    http::delete(&job_endpoint(id)).await
}
