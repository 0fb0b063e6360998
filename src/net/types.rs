//! Wire DTOs for the subscription service and the persisted session record.
//!
//! DESIGN
//! ======
//! Field names follow the service's camelCase JSON. `User` keeps unknown
//! fields so a record hydrated from storage is reproduced exactly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user as persisted under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Account email, used as the subscription lookup key.
    pub email: String,
    /// Any other fields the login flow stored alongside the user.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), extra: serde_json::Map::new() }
    }
}

/// A paid plan as reported by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub subscription_plan: String,
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub end_date: DateTime<Utc>,
}

/// Response body of `POST /api/check-subscription/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    /// Absent or `null` when the user never subscribed.
    #[serde(default)]
    pub subscription: Option<Subscription>,
    /// Whether the plan is currently in force. Missing or `null` decodes as `false`.
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub active: bool,
}

/// Request body of `POST /api/check-subscription/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckSubscriptionRequest {
    pub email: String,
}

/// Optional body of a failed request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Parse the date shapes the service emits.
///
/// Accepts RFC 3339 timestamps, zone-less `YYYY-MM-DDTHH:MM:SS[.fff]` (read as
/// UTC) and bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_iso_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // No zone given: taken as UTC, not the browser's local time.
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}

fn deserialize_iso_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
}

fn deserialize_null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
