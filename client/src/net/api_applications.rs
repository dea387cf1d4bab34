//! Job-application calls, both applicant-side and company-side.

#[cfg(test)]
#[path = "api_applications_test.rs"]
mod api_applications_test;

use serde::Serialize;

use super::http::{self, ApiError};
use super::types::{Application, ApplicationStatus};

fn job_applications_endpoint(job_id: &str) -> String {
    format!("/api/jobs/{job_id}/applications")
}

fn application_endpoint(id: &str) -> String {
    format!("/api/applications/{id}")
}

#[derive(Serialize)]
struct ApplyBody<'a> {
    cover_letter: &'a str,
}

#[derive(Serialize)]
struct StatusBody {
    status: ApplicationStatus,
}

/// `GET /api/applications` — the signed-in user's applications.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn list_my_applications() -> Result<Vec<Application>, ApiError> {
    http::get_list("/api/applications").await
}

/// `GET /api/jobs/{job_id}/applications` — applicants for one posting
/// (company view).
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn list_job_applications(job_id: &str) -> Result<Vec<Application>, ApiError> {
    http::get_list(&job_applications_endpoint(job_id)).await
}

/// `POST /api/jobs/{job_id}/applications` — apply to a posting.
///
/// # Errors
///
/// Returns [`ApiError`]; a duplicate application arrives as
/// [`ApiError::Rejected`].
pub async fn apply(job_id: &str, cover_letter: &str) -> Result<Application, ApiError> {
    http::post(&job_applications_endpoint(job_id), &ApplyBody { cover_letter }).await
}

/// `PATCH /api/applications/{id}` — move an application through its
/// lifecycle (company view). Callers refetch the list afterwards.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn set_status(id: &str, status: ApplicationStatus) -> Result<(), ApiError> {
    http::patch_action(&application_endpoint(id), &StatusBody { status }).await
}
