//! REST API helpers for the subscription service.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since the service
//! is only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `Result` instead of panics. The view layer downgrades
//! every error to a display message via [`ApiError::user_message`]; nothing
//! here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SubscriptionStatus;
#[cfg(feature = "csr")]
use super::types::CheckSubscriptionRequest;
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;
use crate::config::ClientConfig;

pub const CHECK_SUBSCRIPTION_PATH: &str = "/api/check-subscription/";

/// Shown when a failed request carries no usable server message.
pub const FALLBACK_STATUS_ERROR: &str = "Could not fetch subscription status.";

/// Errors produced by subscription service calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("status request failed: {status}")]
    Status { status: u16, message: Option<String> },

    /// A 2xx response body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// HTTP is not available in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Message to render in the error panel.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.is_empty() => message.clone(),
            _ => FALLBACK_STATUS_ERROR.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn check_subscription_endpoint(base_url: &str) -> String {
    format!("{}{CHECK_SUBSCRIPTION_PATH}", base_url.trim_end_matches('/'))
}

/// Extract `message` from a failure body, if it is JSON and carries one.
#[cfg(any(test, feature = "csr"))]
fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message)
}

/// Query `POST /api/check-subscription/` for `email`.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the request cannot be sent,
/// [`ApiError::Status`] on a non-2xx response, and [`ApiError::Decode`] when
/// a success body does not parse.
pub async fn check_subscription(config: &ClientConfig, email: &str) -> Result<SubscriptionStatus, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = check_subscription_endpoint(&config.api_base_url);
        let payload = CheckSubscriptionRequest { email: email.to_owned() };
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let message = resp.text().await.ok().and_then(|body| error_message_from_body(&body));
            return Err(ApiError::Status { status: resp.status(), message });
        }
        resp.json::<SubscriptionStatus>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email);
        Err(ApiError::Unavailable)
    }
}
