//! Subscription status lifecycle and the view model derived from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard owns one [`SubscriptionController`] per mount. Each change of
//! the signed-in email starts a new fetch; the controller tags every fetch
//! with a generation number and drops any result whose generation is no longer
//! current, so a slow response for an old identity cannot overwrite a newer
//! one.
//!
//! There is no timeout and no retry. One attempt per identity change.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use super::observer::{ListenerId, Observers};
use crate::net::api::ApiError;
use crate::net::types::{Subscription, SubscriptionStatus};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Fetch lifecycle as seen by the view.
#[derive(Clone, Debug, PartialEq)]
pub enum SubscriptionPhase {
    /// A fetch is pending or about to start.
    Loading,
    /// The fetch failed; carries the message to display.
    Failed(String),
    /// Resolved. `None` when there was no email to look up.
    Loaded(Option<SubscriptionStatus>),
}

/// Label shown on the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateLabel {
    NotSubscribed,
    Active,
    Expired,
}

impl StateLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotSubscribed => "Not Subscribed",
            Self::Active => "Active",
            Self::Expired => "Expired",
        }
    }
}

impl std::fmt::Display for StateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the badge label from a status response.
pub fn state_label(status: Option<&SubscriptionStatus>) -> StateLabel {
    match status {
        Some(SubscriptionStatus { subscription: Some(_), active: true }) => StateLabel::Active,
        Some(SubscriptionStatus { subscription: Some(_), active: false }) => StateLabel::Expired,
        _ => StateLabel::NotSubscribed,
    }
}

/// Whole days left until `end`, rounded up.
///
/// Plain millisecond arithmetic, not calendar days: a plan ending at 00:30
/// tomorrow shows 1 day at 23:00 today.
pub fn days_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (end - now).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

/// Display-ready details of an existing plan.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanDetails {
    pub plan: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub label: StateLabel,
    /// Present only for active plans.
    pub days_remaining: Option<i64>,
}

impl PlanDetails {
    fn new(subscription: &Subscription, label: StateLabel, now: DateTime<Utc>) -> Self {
        Self {
            plan: subscription.subscription_plan.clone(),
            start_date: subscription.start_date,
            end_date: subscription.end_date,
            label,
            days_remaining: (label == StateLabel::Active).then(|| days_remaining(subscription.end_date, now)),
        }
    }
}

/// The four mutually exclusive rendering branches.
#[derive(Clone, Debug, PartialEq)]
pub enum SubscriptionView {
    Loading,
    Error(String),
    Unsubscribed,
    Subscribed(PlanDetails),
}

impl SubscriptionPhase {
    /// Project the phase onto a rendering branch as of `now`.
    pub fn view(&self, now: DateTime<Utc>) -> SubscriptionView {
        match self {
            Self::Loading => SubscriptionView::Loading,
            Self::Failed(message) => SubscriptionView::Error(message.clone()),
            Self::Loaded(status) => {
                let status = status.as_ref();
                match (state_label(status), status.and_then(|s| s.subscription.as_ref())) {
                    (StateLabel::NotSubscribed, _) | (_, None) => SubscriptionView::Unsubscribed,
                    (label, Some(sub)) => SubscriptionView::Subscribed(PlanDetails::new(sub, label, now)),
                }
            }
        }
    }
}

/// Token for one in-flight fetch, issued by [`SubscriptionController::begin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    email: String,
}

impl FetchTicket {
    pub fn email(&self) -> &str {
        &self.email
    }
}

struct ControllerState {
    generation: u64,
    phase: SubscriptionPhase,
}

struct ControllerInner {
    state: Mutex<ControllerState>,
    listeners: Observers<SubscriptionPhase>,
}

/// Owns the subscription fetch lifecycle for one dashboard mount.
#[derive(Clone)]
pub struct SubscriptionController {
    inner: Arc<ControllerInner>,
}

impl Default for SubscriptionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionController {
    /// New controller in the `Loading` phase.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                state: Mutex::new(ControllerState { generation: 0, phase: SubscriptionPhase::Loading }),
                listeners: Observers::default(),
            }),
        }
    }

    pub fn phase(&self) -> SubscriptionPhase {
        self.lock().phase.clone()
    }

    /// Start a new fetch cycle for `email`, superseding any in flight.
    ///
    /// Without a usable email the phase resolves to `Loaded(None)` at once and
    /// no ticket is issued, so no request should be sent.
    pub fn begin(&self, email: Option<&str>) -> Option<FetchTicket> {
        let (ticket, phase) = {
            let mut state = self.lock();
            state.generation += 1;
            match email.filter(|e| !e.is_empty()) {
                Some(email) => {
                    state.phase = SubscriptionPhase::Loading;
                    (Some(FetchTicket { generation: state.generation, email: email.to_owned() }), state.phase.clone())
                }
                None => {
                    state.phase = SubscriptionPhase::Loaded(None);
                    (None, state.phase.clone())
                }
            }
        };
        self.inner.listeners.notify(&phase);
        ticket
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves state untouched when a newer cycle has
    /// started since the ticket was issued.
    pub fn complete(&self, ticket: &FetchTicket, result: Result<SubscriptionStatus, ApiError>) -> bool {
        let phase = {
            let mut state = self.lock();
            if state.generation != ticket.generation {
                leptos::logging::log!(
                    "dropping stale subscription response for {} (generation {} < {})",
                    ticket.email,
                    ticket.generation,
                    state.generation
                );
                return false;
            }
            state.phase = match result {
                Ok(status) => SubscriptionPhase::Loaded(Some(status)),
                Err(e) => {
                    leptos::logging::warn!("subscription status fetch failed: {e}");
                    SubscriptionPhase::Failed(e.user_message())
                }
            };
            state.phase.clone()
        };
        self.inner.listeners.notify(&phase);
        true
    }

    /// Invalidate any in-flight fetch without changing the phase.
    ///
    /// Called on unmount so a late response is ignored.
    pub fn invalidate(&self) {
        self.lock().generation += 1;
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&SubscriptionPhase) + Send + Sync + 'static,
    {
        self.inner.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.listeners.unsubscribe(id)
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
