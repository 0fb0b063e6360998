//! Subscription card: user identity plus the unsubscribed, active or expired panel.
//!
//! DESIGN
//! ======
//! The card takes a fully derived [`PlanDetails`] so it never touches dates
//! or status flags itself beyond formatting.

#[cfg(test)]
#[path = "subscription_card_test.rs"]
mod subscription_card_test;

use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::state::subscription::{PlanDetails, StateLabel};

/// Format a date as `M/D/YYYY`.
pub fn format_display_date(date: DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// CSS classes for the status badge.
pub fn badge_class(label: StateLabel) -> &'static str {
    match label {
        StateLabel::Active => "status-badge status-badge--active",
        StateLabel::Expired => "status-badge status-badge--expired",
        StateLabel::NotSubscribed => "status-badge status-badge--none",
    }
}

/// Card shown once the status has resolved. `plan` is `None` when unsubscribed.
#[component]
pub fn SubscriptionCard(name: String, email: String, plan: Option<PlanDetails>) -> impl IntoView {
    let body = match plan {
        Some(details) => view! { <PlanPanel details/> }.into_any(),
        None => view! { <NotSubscribedPanel/> }.into_any(),
    };

    view! {
        <section class="subscription-card">
            <header class="subscription-card__header">
                <h2>"Your Subscription"</h2>
            </header>
            <div class="subscription-card__body">
                <div class="subscription-card__user">
                    <h3 class="subscription-card__name">{name}</h3>
                    <span class="subscription-card__email">{email}</span>
                </div>
                {body}
            </div>
        </section>
    }
}

#[component]
fn NotSubscribedPanel() -> impl IntoView {
    view! {
        <div class="subscription-card__notice subscription-card__notice--none">
            <p class="subscription-card__notice-title">{StateLabel::NotSubscribed.as_str()}</p>
            <p>"Start a subscription to enjoy premium features."</p>
            <button class="btn btn--primary">"Subscribe Now"</button>
        </div>
    }
}

#[component]
fn PlanPanel(details: PlanDetails) -> impl IntoView {
    let footer = match details.days_remaining {
        Some(days) => view! {
            <div class="subscription-card__remaining">
                <p class="subscription-card__field-label">"Days Remaining"</p>
                <p class="subscription-card__days">{days}</p>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="subscription-card__notice subscription-card__notice--expired">
                <p class="subscription-card__notice-title">"Your subscription has expired."</p>
                <p>"Renew to continue enjoying premium features."</p>
                <button class="btn btn--primary">"Renew Now"</button>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="subscription-card__plan">
            <div class="subscription-card__grid">
                <div class="subscription-card__field">
                    <p class="subscription-card__field-label">"Active Plan"</p>
                    <p class="subscription-card__plan-name">{details.plan}</p>
                </div>
                <div class="subscription-card__field">
                    <p class="subscription-card__field-label">"Status"</p>
                    <span class=badge_class(details.label)>{details.label.as_str()}</span>
                </div>
                <div class="subscription-card__field">
                    <p class="subscription-card__field-label">"Start Date"</p>
                    <p>{format_display_date(details.start_date)}</p>
                </div>
                <div class="subscription-card__field">
                    <p class="subscription-card__field-label">"End Date"</p>
                    <p>{format_display_date(details.end_date)}</p>
                </div>
            </div>
            {footer}
        </div>
    }
}
