//! Listener registry used by the session and subscription stores.
//!
//! Listeners are cloned out of the lock before they run, so a listener may
//! read back from (or unsubscribe from) the store that notified it.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle returned by [`Observers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<T>)>,
}

pub struct Observers<T> {
    registry: Mutex<Registry<T>>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self { registry: Mutex::new(Registry { next_id: 0, listeners: Vec::new() }) }
    }
}

impl<T> Observers<T> {
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut registry = self.lock();
        let before = registry.listeners.len();
        registry.listeners.retain(|(lid, _)| *lid != id);
        registry.listeners.len() != before
    }

    /// Call every listener with `value`, in subscription order.
    pub fn notify(&self, value: &T) {
        let listeners: Vec<Listener<T>> = self.lock().listeners.iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(value);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry<T>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
