//! Full-width panels for the loading and error branches of the dashboard.

use leptos::prelude::*;

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="status-panel">
            <div class="status-panel__spinner" aria-hidden="true"></div>
            <p class="status-panel__text">"Loading subscription status..."</p>
        </div>
    }
}

/// Error panel. `message` is already user-facing; no diagnostics are shown.
#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--error" role="alert">
            <p class="status-panel__title">"Error Loading Data"</p>
            <p class="status-panel__text">{message}</p>
        </div>
    }
}
