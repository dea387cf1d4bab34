//! Shared session-credential model for the browser client and the edge host.
//!
//! This crate owns the cookie names and the claims shape embedded in the
//! backend-issued bearer token. The backend holds the signing key; neither
//! side of this workspace verifies signatures. "Valid" here means the token
//! is structurally decodable and its `exp` claim has not passed — which is
//! exactly the contract the bootstrap and the edge gate need.
//!
//! TRADE-OFFS
//! ==========
//! Expiry is checked against a caller-supplied `now` instead of the system
//! clock so the same code runs on `wasm32-unknown-unknown` (no `SystemTime`)
//! and stays deterministic under test.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Cookie holding the user/company bearer credential.
pub const SESSION_TOKEN_COOKIE: &str = "session_token";

/// Cookie holding the admin-portal bearer credential.
///
/// Kept separate from [`SESSION_TOKEN_COOKIE`] so the edge gate can guard
/// `/admin` routes without touching the public session.
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

/// Non-httpOnly cookie holding a serialized principal snapshot for fast
/// paint before the profile round-trip completes.
pub const PROFILE_SNAPSHOT_COOKIE: &str = "session_user";

/// Ops-set flag cookie; `"on"` sends non-admin page routes to `/maintenance`.
pub const MAINTENANCE_COOKIE: &str = "maintenance_mode";

/// Default credential cookie lifetime in days.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Role discriminator carried in the credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Job seeker / marketplace buyer.
    User,
    /// Employer / marketplace seller.
    Company,
    /// Back-office administrator.
    Admin,
}

impl Role {
    /// Lowercase wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Company => "company",
            Self::Admin => "admin",
        }
    }
}

/// Claims embedded in every credential issued by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the principal's backend identifier.
    pub sub: String,
    /// Role discriminator selecting the "who am I" endpoint.
    pub role: Role,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Issued-at, seconds since the Unix epoch, when the backend sets it.
    #[serde(default)]
    pub iat: Option<i64>,
    /// Account email, when the backend embeds it.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name, when the backend embeds it.
    #[serde(default)]
    pub name: Option<String>,
}

/// Why a stored credential was rejected.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// The string is not a decodable token with the expected claims.
    #[error("credential is not a decodable token: {0}")]
    Malformed(String),
    /// The token decoded but its `exp` claim is in the past.
    #[error("credential expired at {expired_at} (now {now})")]
    Expired {
        /// The `exp` claim value.
        expired_at: i64,
        /// The clock the caller evaluated against.
        now: i64,
    },
}

/// Whether a raw cookie value is one of the garbage placeholders a buggy
/// writer can leave behind (`"undefined"`, `"null"`, empty). Such values
/// must never be sent as a bearer credential.
#[must_use]
pub fn is_placeholder(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed == "undefined" || trimmed == "null"
}

/// Decode the claims payload of `token` without verifying its signature.
///
/// # Errors
///
/// Returns [`CredentialError::Malformed`] when the token is not structurally
/// a JWT or its payload does not carry the expected claims.
pub fn decode_claims(token: &str) -> Result<Claims, CredentialError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    // Expiry is evaluated by `evaluate` against a caller-supplied clock;
    // the library check would reach for the system clock, which does not
    // exist on wasm32.
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims::<&str>(&[]);

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| CredentialError::Malformed(e.to_string()))?;
    Ok(data.claims)
}

/// Decode `token` and reject it when its `exp` claim is at or before `now`
/// (seconds since the Unix epoch).
///
/// # Errors
///
/// Returns [`CredentialError::Malformed`] for undecodable tokens and
/// [`CredentialError::Expired`] for structurally valid but stale ones.
pub fn evaluate(token: &str, now: i64) -> Result<Claims, CredentialError> {
    let claims = decode_claims(token)?;
    if claims.exp <= now {
        return Err(CredentialError::Expired { expired_at: claims.exp, now });
    }
    Ok(claims)
}
