//! Login-modal visibility state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `SessionStore`. Gated actions never open the modal directly; they
//! go through `SessionStore::require_authentication`, which calls
//! [`ModalController::open`]. Opening is debounced by the boolean itself, so
//! any number of rapid callers still produce a single visible modal.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::sync::{Arc, Mutex};

use crate::error::AuthError;
use crate::observer::{Listeners, Subscription, lock};

/// Snapshot of the login modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    /// Inline error from the most recent failed submit.
    pub error: Option<AuthError>,
    /// True while a credential submit is in flight.
    pub submitting: bool,
}

/// Shared handle to the single login modal.
#[derive(Clone)]
pub struct ModalController {
    state: Arc<Mutex<ModalState>>,
    listeners: Arc<Listeners<ModalState>>,
}

impl ModalController {
    pub(crate) fn new() -> Self {
        Self { state: Arc::new(Mutex::new(ModalState::default())), listeners: Arc::new(Listeners::new()) }
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        *lock(&self.state)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        lock(&self.state).is_open
    }

    /// Show the modal. Returns `true` only if it was previously closed.
    pub fn open(&self) -> bool {
        let opened = self.update(|s| {
            if s.is_open {
                return false;
            }
            s.is_open = true;
            true
        });
        if opened {
            log::debug!("login modal opened");
        }
        opened
    }

    /// Hide the modal and reset its transient form state.
    pub fn close(&self) {
        self.update(|s| {
            let changed = s.is_open || s.error.is_some() || s.submitting;
            *s = ModalState::default();
            changed
        });
    }

    /// Mark a credential submit as in flight.
    ///
    /// Returns `false` if a submit is already pending, so the form can ignore
    /// repeated clicks.
    pub fn begin_submit(&self) -> bool {
        self.update(|s| {
            if s.submitting {
                return false;
            }
            s.submitting = true;
            s.error = None;
            true
        })
    }

    /// Record a failed submit. The modal keeps its visibility.
    pub fn fail(&self, error: AuthError) {
        self.update(|s| {
            s.submitting = false;
            s.error = Some(error);
            true
        });
    }

    pub fn clear_error(&self) {
        self.update(|s| s.error.take().is_some());
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ModalState) + Send + Sync + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub(crate) fn clear_listeners(&self) {
        self.listeners.clear();
    }

    /// Apply `f` under the lock; notify listeners afterwards if it reports a change.
    fn update(&self, f: impl FnOnce(&mut ModalState) -> bool) -> bool {
        let (changed, snapshot) = {
            let mut state = lock(&self.state);
            let changed = f(&mut state);
            (changed, *state)
        };
        if changed {
            self.listeners.notify(&snapshot);
        }
        changed
    }
}

impl std::fmt::Debug for ModalController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController").field("state", &self.state()).finish()
    }
}
