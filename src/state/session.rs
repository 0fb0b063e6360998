//! Session store: who is signed in, persisted across reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the root component and shared with descendants through context.
//! Durable state lives under two storage keys: `token` (opaque) and `user`
//! (JSON record). Hydration runs once at startup; after that the in-memory
//! user is the source of truth and listeners are told about every change.
//!
//! ERROR HANDLING
//! ==============
//! A corrupt `user` record is dropped from storage and logged, never surfaced.
//! `logout` cannot fail; removing absent keys is a no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::observer::{ListenerId, Observers};
use crate::net::types::User;
use crate::util::navigation::{Navigator, SIGN_IN_ROUTE};
use crate::util::storage::{KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

struct SessionInner {
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    user: Mutex<Option<User>>,
    listeners: Observers<Option<User>>,
}

/// Shared handle to the current session. Clones observe the same user.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("user", &*self.lock_user()).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create an empty session over the given storage and navigation capabilities.
    pub fn new(storage: Arc<dyn KeyValueStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                storage,
                navigator,
                user: Mutex::new(None),
                listeners: Observers::default(),
            }),
        }
    }

    /// Hydrate the user from durable storage.
    ///
    /// Missing record: session stays empty. Record that does not parse as a
    /// user: the record is removed and the session stays empty.
    pub fn initialize(&self) {
        let Some(raw) = self.inner.storage.get_item(USER_KEY) else {
            return;
        };
        match serde_json::from_str::<Option<User>>(&raw) {
            Ok(Some(user)) => self.replace_user(Some(user)),
            Ok(None) => {}
            Err(e) => {
                leptos::logging::warn!("discarding unreadable session record: {e}");
                self.inner.storage.remove_item(USER_KEY);
            }
        }
    }

    /// Current user, if signed in.
    pub fn user(&self) -> Option<User> {
        self.lock_user().clone()
    }

    /// Opaque token persisted by the login flow.
    pub fn token(&self) -> Option<String> {
        self.inner.storage.get_item(TOKEN_KEY)
    }

    /// Replace the in-memory user. Does not write to durable storage.
    pub fn set_user(&self, user: Option<User>) {
        self.replace_user(user);
    }

    /// Persist a fresh login and make it the current session.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if either record cannot be written. The
    /// previous token is put back, so storage and memory keep the prior
    /// session unchanged.
    pub fn sign_in(&self, token: &str, user: User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        let previous_token = self.inner.storage.get_item(TOKEN_KEY);
        self.inner.storage.set_item(TOKEN_KEY, token)?;
        if let Err(e) = self.inner.storage.set_item(USER_KEY, &raw) {
            self.restore_token(previous_token.as_deref());
            return Err(e);
        }
        self.replace_user(Some(user));
        Ok(())
    }

    /// Clear durable and in-memory session, then navigate to sign-in.
    pub fn logout(&self) {
        self.inner.storage.remove_item(TOKEN_KEY);
        self.inner.storage.remove_item(USER_KEY);
        self.replace_user(None);
        self.inner.navigator.navigate(SIGN_IN_ROUTE);
    }

    /// Register a listener called with the user after every change.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&Option<User>) + Send + Sync + 'static,
    {
        self.inner.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.listeners.unsubscribe(id)
    }

    /// Put back the token that preceded a failed sign-in. If it cannot be
    /// rewritten, drop it rather than leave the new one behind.
    fn restore_token(&self, previous: Option<&str>) {
        let storage = &self.inner.storage;
        match previous {
            Some(token) if storage.set_item(TOKEN_KEY, token).is_ok() => {}
            _ => storage.remove_item(TOKEN_KEY),
        }
    }

    fn replace_user(&self, user: Option<User>) {
        {
            let mut slot = self.lock_user();
            slot.clone_from(&user);
        }
        self.inner.listeners.notify(&user);
    }

    fn lock_user(&self) -> MutexGuard<'_, Option<User>> {
        self.inner.user.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
