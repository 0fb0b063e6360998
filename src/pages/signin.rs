//! Sign-in landing page, the destination of logout.
//!
//! Credential entry is served by the account service; this route only tells
//! the user where they stand and links back to the dashboard once a session
//! exists again.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Bookshelf"</h1>
                <Show
                    when=move || auth.with(|a| a.user.is_some())
                    fallback=|| view! { <p class="login-message">"You are signed out."</p> }
                >
                    <p class="login-message">
                        "Signed in as "
                        <span>{move || auth.with(AuthState::display_name)}</span>
                    </p>
                    <a href="/" class="login-button">"Go to dashboard"</a>
                </Show>
            </div>
        </div>
    }
}
