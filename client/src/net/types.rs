//! REST DTOs for the backend boundary.
//!
//! DESIGN
//! ======
//! The backend's response shapes are inconsistent (numbers arrive as floats,
//! optional fields come and go, `logo` vs `companyLogo`), so every type here
//! is defensive: `#[serde(default)]` where absence is routine, aliases where
//! the backend disagrees with itself, and a tolerant integer deserializer
//! for counters.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use session::Role;

/// The authenticated identity held in memory for the page session.
///
/// Rehydrated from the credential on every full load and discarded on
/// logout or 401; never outlives the stored credential.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
    /// Role discriminator; drives navigation and guard destinations.
    pub role: Role,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Whether the account's email is verified.
    #[serde(default)]
    pub verified: bool,
    /// Company logo URL. The backend sends this as `logo` on some
    /// endpoints and `companyLogo` on others; both land here.
    #[serde(default, alias = "logo", alias = "companyLogo")]
    pub company_logo: Option<String>,
}

/// A job posting as listed and displayed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Backend identifier.
    pub id: String,
    /// Posting title.
    pub title: String,
    /// Name of the posting company.
    #[serde(default)]
    pub company_name: String,
    /// Free-form location ("Remote", "Berlin", ...).
    #[serde(default)]
    pub location: String,
    /// Category slug used for filtering.
    #[serde(default)]
    pub category: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Display salary range, if the company shared one.
    #[serde(default)]
    pub salary_range: Option<String>,
    /// ISO 8601 creation timestamp, if the backend sends one.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for creating a job posting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub salary_range: Option<String>,
}

/// Lifecycle of a job application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Shortlisted,
    Accepted,
    Rejected,
}

/// A job application, from either the applicant's or the company's side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Backend identifier.
    pub id: String,
    /// Job applied to.
    pub job_id: String,
    /// Title of the job applied to, when the backend joins it in.
    #[serde(default)]
    pub job_title: String,
    /// Applicant display name (company view).
    #[serde(default)]
    pub applicant_name: String,
    /// Cover letter text.
    #[serde(default)]
    pub cover_letter: String,
    /// Current lifecycle status.
    pub status: ApplicationStatus,
    /// ISO 8601 submission timestamp, if the backend sends one.
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// A marketplace service listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Backend identifier.
    pub id: String,
    /// Listing title.
    pub title: String,
    /// Seller display name.
    #[serde(default)]
    pub seller_name: String,
    /// Price in the platform currency.
    #[serde(default)]
    pub price: f64,
    /// Promised delivery window in days.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub delivery_days: i64,
    /// Category slug used for filtering.
    #[serde(default)]
    pub category: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
}

/// Body for creating a service listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceDraft {
    pub title: String,
    pub price: f64,
    pub delivery_days: i64,
    pub category: String,
    pub description: String,
}

/// Lifecycle of a marketplace order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Delivered,
    Completed,
    Disputed,
    Cancelled,
}

/// A marketplace order between a buyer and a seller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Backend identifier.
    pub id: String,
    /// Service ordered.
    pub service_id: String,
    /// Title of the service ordered, when the backend joins it in.
    #[serde(default)]
    pub service_title: String,
    /// Buyer display name.
    #[serde(default)]
    pub buyer_name: String,
    /// Seller display name.
    #[serde(default)]
    pub seller_name: String,
    /// Agreed price.
    #[serde(default)]
    pub price: f64,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// ISO 8601 order timestamp, if the backend sends one.
    #[serde(default)]
    pub ordered_at: Option<String>,
    /// ISO 8601 delivery timestamp, once delivered.
    #[serde(default)]
    pub delivered_at: Option<String>,
    /// Delivery note the seller attached, once delivered.
    #[serde(default)]
    pub delivery_note: Option<String>,
}

/// Unread chat-message count for one order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderNotification {
    /// Order the messages belong to.
    pub order_id: String,
    /// Number of unread messages.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub unread: i64,
}

/// Aggregate counters for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub users: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub companies: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub jobs: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub orders: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub open_disputes: i64,
}

/// A user account row in the admin back-office.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
    /// Account role.
    pub role: Role,
    /// Whether the account is currently blocked.
    #[serde(default)]
    pub blocked: bool,
}

/// Accept integers that the backend serialized as JSON floats.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
