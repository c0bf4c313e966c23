//! Subscribe/notify plumbing shared by the session, modal and toast cells.
//!
//! DESIGN
//! ======
//! Each observable cell owns a `Listeners<T>` registry. A [`Subscription`]
//! keeps only a weak reference to that registry, so consumers never extend
//! the lifetime of the state they observe. Callbacks are snapshotted before
//! being invoked so a listener may read the cell (or drop its own
//! subscription) without deadlocking.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

pub(crate) struct Listeners<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T: 'static> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self { registry: Arc::new(Mutex::new(Registry { next_id: 0, entries: Vec::new() })) }
    }

    pub(crate) fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut registry = lock(&self.registry);
            registry.next_id += 1;
            let id = registry.next_id;
            registry.entries.push((id, Arc::new(callback)));
            id
        };

        let weak: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    lock(&registry).entries.retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    /// Invoke every registered callback with `value`, in subscription order.
    pub(crate) fn notify(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = lock(&self.registry)
            .entries
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(value);
        }
    }

    pub(crate) fn clear(&self) {
        lock(&self.registry).entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        lock(&self.registry).entries.len()
    }
}

/// Handle to a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Keep the listener registered for the lifetime of the observed cell.
    pub fn detach(mut self) {
        self.release = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
