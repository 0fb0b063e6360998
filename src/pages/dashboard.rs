//! Dashboard page showing the signed-in user's subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It watches the session email and, on every
//! change, starts a fresh status fetch through a page-scoped
//! [`SubscriptionController`]. Results from superseded fetches, or fetches
//! that finish after the page unmounts, are dropped by the controller.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::Utc;
use leptos::prelude::*;

use crate::components::status_panel::{ErrorPanel, LoadingPanel};
use crate::components::subscription_card::SubscriptionCard;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::subscription::{PlanDetails, SubscriptionController, SubscriptionView};

/// Dashboard page. `children` render below the card once status has resolved.
#[component]
pub fn DashboardPage(#[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();

    let controller = SubscriptionController::new();
    let phase = RwSignal::new(controller.phase());
    let listener = controller.subscribe(move |p| phase.set(p.clone()));
    {
        let controller = controller.clone();
        on_cleanup(move || {
            controller.unsubscribe(listener);
            controller.invalidate();
        });
    }

    // Refetch only when the email itself changes, not on every session write.
    let email = Memo::new(move |_| auth.with(AuthState::email));
    Effect::new(move || {
        start_fetch(&controller, &config, email.get());
    });

    let on_logout = move |_| session.logout();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            {move || match phase.get().view(Utc::now()) {
                SubscriptionView::Loading => view! { <LoadingPanel/> }.into_any(),
                SubscriptionView::Error(message) => view! { <ErrorPanel message/> }.into_any(),
                SubscriptionView::Unsubscribed => resolved_view(auth, None, children.clone()),
                SubscriptionView::Subscribed(details) => resolved_view(auth, Some(details), children.clone()),
            }}
        </div>
    }
}

/// Name and email to show in the card header.
fn card_identity(state: &AuthState) -> (String, String) {
    let email = state.user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    (state.display_name(), email)
}

fn resolved_view(auth: RwSignal<AuthState>, plan: Option<PlanDetails>, extras: Option<ChildrenFn>) -> AnyView {
    let (name, email) = auth.with(card_identity);
    view! {
        <SubscriptionCard name email plan/>
        {extras.map(|children| view! { <div class="dashboard-page__extras">{children()}</div> })}
    }
    .into_any()
}

/// Begin a fetch cycle and, in the browser, issue the request.
fn start_fetch(controller: &SubscriptionController, config: &ClientConfig, email: Option<String>) {
    let Some(ticket) = controller.begin(email.as_deref()) else {
        return;
    };

    #[cfg(feature = "csr")]
    {
        let controller = controller.clone();
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::check_subscription(&config, ticket.email()).await;
            controller.complete(&ticket, result);
        });
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = (ticket, config);
    }
}
