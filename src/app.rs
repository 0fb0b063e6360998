//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loved_books::LovedBooksMount;
use crate::config::ClientConfig;
use crate::pages::{dashboard::DashboardPage, signin::SignInPage};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::navigation::BrowserNavigator;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Hydrates the session from `localStorage`, mirrors it into an
/// `RwSignal<AuthState>`, and provides config, session and auth contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionStore::new(Arc::new(BrowserStorage), Arc::new(BrowserNavigator));
    session.initialize();

    let auth = RwSignal::new(AuthState::new(session.user()));
    let listener = session.subscribe(move |user| auth.set(AuthState::new(user.clone())));
    {
        let session = session.clone();
        on_cleanup(move || {
            session.unsubscribe(listener);
        });
    }

    provide_context(config);
    provide_context(session);
    provide_context(auth);

    view! {
        <Title text="Bookshelf"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! {
                        <DashboardPage>
                            <LovedBooksMount/>
                        </DashboardPage>
                    }
                />
            </Routes>
        </Router>
    }
}
