use super::*;
use chrono::TimeZone;

// =============================================================
// User
// =============================================================

#[test]
fn user_keeps_unknown_fields() {
    let raw = r#"{"name":"Ada","email":"ada@x.com","id":"u-1","roles":["reader"]}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@x.com");
    assert_eq!(user.extra.get("id"), Some(&serde_json::json!("u-1")));

    let back: serde_json::Value = serde_json::to_value(&user).unwrap();
    assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
}

#[test]
fn user_requires_email() {
    assert!(serde_json::from_str::<User>(r#"{"name":"Ada"}"#).is_err());
}

// =============================================================
// SubscriptionStatus
// =============================================================

#[test]
fn status_with_subscription_decodes_camel_case() {
    let status: SubscriptionStatus = serde_json::from_value(serde_json::json!({
        "subscription": {
            "subscriptionPlan": "monthly",
            "startDate": "2024-01-01T00:00:00.000Z",
            "endDate": "2024-02-01T00:00:00.000Z"
        },
        "active": true
    }))
    .unwrap();
    let sub = status.subscription.unwrap();
    assert_eq!(sub.subscription_plan, "monthly");
    assert_eq!(sub.start_date, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(sub.end_date, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
    assert!(status.active);
}

#[test]
fn status_null_subscription_and_missing_active() {
    let status: SubscriptionStatus = serde_json::from_str(r#"{"subscription":null}"#).unwrap();
    assert!(status.subscription.is_none());
    assert!(!status.active);
}

#[test]
fn status_null_active_decodes_as_inactive() {
    let status: SubscriptionStatus = serde_json::from_str(r#"{"subscription":null,"active":null}"#).unwrap();
    assert_eq!(status, SubscriptionStatus::default());

    let raw = r#"{"subscription":{"subscriptionPlan":"yearly","startDate":"2024-01-01","endDate":"2025-01-01"},"active":null}"#;
    let status: SubscriptionStatus = serde_json::from_str(raw).unwrap();
    assert!(status.subscription.is_some());
    assert!(!status.active);
}

#[test]
fn status_empty_object_is_unsubscribed() {
    let status: SubscriptionStatus = serde_json::from_str("{}").unwrap();
    assert_eq!(status, SubscriptionStatus::default());
}

#[test]
fn status_with_bad_date_fails() {
    let raw = r#"{"subscription":{"subscriptionPlan":"yearly","startDate":"soon","endDate":"later"},"active":true}"#;
    assert!(serde_json::from_str::<SubscriptionStatus>(raw).is_err());
}

#[test]
fn request_serializes_email_payload() {
    let req = CheckSubscriptionRequest { email: "a@x.com".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "email": "a@x.com" }));
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"User not found"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("User not found"));
    let body: ErrorBody = serde_json::from_str(r#"{"error":true}"#).unwrap();
    assert!(body.message.is_none());
}

// =============================================================
// parse_iso_date
// =============================================================

#[test]
fn parse_iso_date_rfc3339_with_offset() {
    let dt = parse_iso_date("2024-03-10T12:00:00+02:00").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap());
}

#[test]
fn parse_iso_date_naive_is_utc() {
    let dt = parse_iso_date("2024-03-10T12:30:00").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 10, 12, 30, 0).unwrap());
}

#[test]
fn parse_iso_date_bare_date_is_midnight() {
    let dt = parse_iso_date("2024-03-10").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
}

#[test]
fn parse_iso_date_rejects_garbage() {
    assert!(parse_iso_date("").is_none());
    assert!(parse_iso_date("10/03/2024").is_none());
}
