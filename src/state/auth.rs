//! Reactive mirror of the session for the view tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component keeps an `RwSignal<AuthState>` in sync with the
//! [`SessionStore`](super::session::SessionStore) through a session listener.
//! Components read this signal; they never write it directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Snapshot of who is signed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    /// Email to look up, if a user with a non-empty email is signed in.
    pub fn email(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.email.clone()).filter(|e| !e.is_empty())
    }

    pub fn display_name(&self) -> String {
        self.user.as_ref().map(|u| u.name.clone()).unwrap_or_default()
    }
}
