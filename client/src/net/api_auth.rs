//! Login, registration, and "who am I" calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend's login responses are not shaped consistently: the issued
//! credential appears under `token`, `data.token`, or `accessToken`
//! depending on the endpoint and deployment vintage, and the embedded
//! profile object is keyed by role. Everything defensive about that lives
//! here; callers see one contract.
//!
//! A login that yields no credential fails loudly *before* any cookie or
//! state is touched — there is no such thing as a partial login.

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use serde::Serialize;

use session::{PROFILE_SNAPSHOT_COOKIE, Role, SESSION_TOKEN_COOKIE, SESSION_TTL_DAYS};

use super::http::{self, ApiError};
use super::types::Principal;
use crate::util::cookies;

/// Login failure, classified for the recovery action the UI offers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Wrong email/password. Recovery: retry.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// The account's email is not verified. Recovery: resend verification.
    #[error("email address not verified")]
    UnverifiedEmail,
    /// The account was blocked by an administrator. Recovery: contact support.
    #[error("account blocked")]
    BlockedAccount,
    /// The backend accepted the login but returned no recognizable
    /// credential field.
    #[error("login response carried no credential")]
    MissingToken,
    /// Anything else from the transport layer.
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Pull the issued credential out of a login response, trying every field
/// spelling the backend has been observed to use.
fn extract_token(body: &serde_json::Value) -> Option<String> {
    let candidates = [
        body.get("token"),
        body.get("data").and_then(|d| d.get("token")),
        body.get("accessToken"),
    ];
    for candidate in candidates.into_iter().flatten() {
        if let Some(raw) = candidate.as_str() {
            if !session::is_placeholder(raw) {
                return Some(raw.to_owned());
            }
        }
    }
    None
}

/// Pull the embedded profile out of a login response, keyed by role or
/// wrapped in `data`. Objects missing a `role` field get `fallback_role`
/// injected — the `admin` login response, for one, does not repeat it.
fn extract_profile(body: &serde_json::Value, fallback_role: Role) -> Option<Principal> {
    let candidates = [
        body.get("user"),
        body.get("company"),
        body.get("admin"),
        body.get("profile"),
        body.get("data"),
    ];
    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_object() {
            continue;
        }
        let mut value = candidate.clone();
        if value.get("role").is_none() {
            if let Some(map) = value.as_object_mut() {
                map.insert("role".to_owned(), serde_json::Value::String(fallback_role.as_str().to_owned()));
            }
        }
        if let Ok(principal) = serde_json::from_value::<Principal>(value) {
            return Some(principal);
        }
    }
    None
}

/// Classify a login rejection by its message text.
///
/// The backend signals unverified and blocked accounts only through the
/// message body, so text matching is the best available discriminator.
fn classify_rejection(message: &str) -> LoginError {
    let lower = message.to_ascii_lowercase();
    if lower.contains("verif") {
        return LoginError::UnverifiedEmail;
    }
    if lower.contains("block") || lower.contains("suspend") {
        return LoginError::BlockedAccount;
    }
    LoginError::InvalidCredentials
}

fn map_login_error(err: ApiError) -> LoginError {
    match err {
        ApiError::Unauthorized => LoginError::InvalidCredentials,
        ApiError::Rejected(message) => classify_rejection(&message),
        other => LoginError::Api(other),
    }
}

async fn submit_login(
    path: &str,
    cookie_name: &str,
    fallback_role: Role,
    email: &str,
    password: &str,
) -> Result<(), LoginError> {
    let raw = http::post_raw(path, &LoginBody { email, password })
        .await
        .map_err(map_login_error)?;

    // No credential, no login — checked before any cookie is written.
    let token = extract_token(&raw).ok_or(LoginError::MissingToken)?;

    cookies::write(cookie_name, &token, SESSION_TTL_DAYS);
    if let Some(profile) = extract_profile(&raw, fallback_role) {
        if let Ok(snapshot) = serde_json::to_string(&profile) {
            cookies::write(PROFILE_SNAPSHOT_COOKIE, &snapshot, SESSION_TTL_DAYS);
        }
    }
    Ok(())
}

/// `POST /api/auth/login` — job-seeker login.
///
/// # Errors
///
/// Returns a classified [`LoginError`] for the UI's recovery actions.
pub async fn login(email: &str, password: &str) -> Result<(), LoginError> {
    submit_login("/api/auth/login", SESSION_TOKEN_COOKIE, Role::User, email, password).await
}

/// `POST /api/company/login` — employer login.
///
/// # Errors
///
/// Returns a classified [`LoginError`] for the UI's recovery actions.
pub async fn login_company(email: &str, password: &str) -> Result<(), LoginError> {
    submit_login("/api/company/login", SESSION_TOKEN_COOKIE, Role::Company, email, password).await
}

/// `POST /api/admin/login` — back-office login; persists the credential in
/// the admin cookie the edge gate checks.
///
/// # Errors
///
/// Returns a classified [`LoginError`] for the UI's recovery actions.
pub async fn login_admin(email: &str, password: &str) -> Result<(), LoginError> {
    submit_login("/api/admin/login", session::ADMIN_TOKEN_COOKIE, Role::Admin, email, password).await
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// `POST /api/auth/register` — create a job-seeker account.
///
/// # Errors
///
/// Returns a classified [`LoginError`]; the caller follows up with a login.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), LoginError> {
    http::post_raw("/api/auth/register", &RegisterBody { name, email, password })
        .await
        .map(|_| ())
        .map_err(map_login_error)
}

/// `POST /api/company/register` — create an employer account.
///
/// # Errors
///
/// Returns a classified [`LoginError`]; the caller follows up with a login.
pub async fn register_company(name: &str, email: &str, password: &str) -> Result<(), LoginError> {
    http::post_raw("/api/company/register", &RegisterBody { name, email, password })
        .await
        .map(|_| ())
        .map_err(map_login_error)
}

/// `POST /api/auth/resend-verification` — re-send the verification email.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn resend_verification(email: &str) -> Result<(), ApiError> {
    http::post_raw("/api/auth/resend-verification", &serde_json::json!({ "email": email }))
        .await
        .map(|_| ())
}

/// The "who am I" endpoint for a role claim.
fn principal_endpoint(role: Role) -> &'static str {
    match role {
        Role::User => "/api/users/me",
        Role::Company => "/api/company/profile",
        Role::Admin => "/api/admin/me",
    }
}

/// Fetch the profile matching the credential's role claim.
///
/// # Errors
///
/// Returns [`ApiError`]; bootstrap treats any failure as session-ending.
pub async fn fetch_principal(role: Role) -> Result<Principal, ApiError> {
    http::get_item(principal_endpoint(role)).await
}

/// Editable profile fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
}

/// `PATCH` the role's profile endpoint, returning the updated principal.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn update_profile(role: Role, update: &ProfileUpdate) -> Result<Principal, ApiError> {
    http::patch(principal_endpoint(role), update).await
}
