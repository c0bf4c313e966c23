//! Authoritative session state and its transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` exists per client. Every gated affordance asks
//! [`SessionStore::require_authentication`] before acting; every themed
//! surface subscribes and re-derives its `ThemeMode`. Nothing else writes the
//! flag.
//!
//! CONCURRENCY
//! ===========
//! Transitions are applied under a single mutex and listeners run after the
//! lock is released. `authenticate` awaits the identity collaborator without
//! holding the lock, then applies its outcome in one step, so mutations are
//! serialized in the order their completions are processed.
//!
//! STARTUP RESTORE
//! ===============
//! While a restore is pending the store reports the fail-closed value and
//! `is_ready() == false`. A restore is identified by a [`RestoreTicket`];
//! finishing a stale ticket (superseded by a login/logout, or after
//! `teardown`) is ignored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::AuthError;
use crate::guard::{GuardDecision, RouteGuard};
use crate::identity::{Credentials, IdentityError, IdentityVerifier};
use crate::modal::ModalController;
use crate::observer::{Listeners, Subscription, lock};
use crate::theme::{ThemeMode, derive_mode};
use crate::toast::{DEFAULT_TOAST_TTL_MS, ToastController, ToastKind};

/// Toast shown after a successful login.
pub const WELCOME_MESSAGE: &str = "Welcome back! You're online.";

/// Whether the current visitor is logged in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Restoring,
    Ready,
}

/// Identifies one startup restore attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "pass the ticket to finish_restore"]
pub struct RestoreTicket {
    generation: u64,
}

struct Cell {
    session: Session,
    phase: Phase,
    generation: u64,
    torn_down: bool,
}

impl Cell {
    fn visible(&self) -> Session {
        match self.phase {
            Phase::Ready => self.session,
            Phase::Restoring => Session { is_authenticated: false },
        }
    }
}

struct Shared {
    cell: Mutex<Cell>,
    listeners: Listeners<Session>,
    modal: ModalController,
    toasts: ToastController,
}

/// Cheap-to-clone handle to the single session cell.
#[derive(Clone)]
pub struct SessionStore {
    shared: Arc<Shared>,
}

impl SessionStore {
    /// Store backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            shared: Arc::new(Shared {
                cell: Mutex::new(Cell {
                    session: Session::default(),
                    phase: Phase::Ready,
                    generation: 0,
                    torn_down: false,
                }),
                listeners: Listeners::new(),
                modal: ModalController::new(),
                toasts: ToastController::new(clock),
            }),
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    #[must_use]
    pub fn get_state(&self) -> Session {
        lock(&self.shared.cell).visible()
    }

    /// `false` only while a startup restore is pending.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        lock(&self.shared.cell).phase == Phase::Ready
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        derive_mode(&self.get_state())
    }

    #[must_use]
    pub fn modal(&self) -> &ModalController {
        &self.shared.modal
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastController {
        &self.shared.toasts
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Verify `credentials` and, on success, move to `Authenticated`.
    ///
    /// Success closes the modal and, when the session actually changed,
    /// enqueues the welcome toast. Failure leaves
    /// the session untouched and records the error inline on the modal.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for malformed or rejected credentials,
    /// [`AuthError::NetworkFailure`] when the collaborator is unreachable.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
        verifier: &dyn IdentityVerifier,
    ) -> Result<Session, AuthError> {
        match Self::verify(credentials, verifier).await {
            Ok(()) => {
                if self.transition(true) {
                    log::info!("session authenticated");
                    self.shared
                        .toasts
                        .enqueue_kind(WELCOME_MESSAGE, ToastKind::Success, DEFAULT_TOAST_TTL_MS);
                }
                self.shared.modal.close();
                Ok(self.get_state())
            }
            Err(err) => {
                log::warn!("authentication failed: {err}");
                self.shared.modal.fail(err);
                Err(err)
            }
        }
    }

    async fn verify(credentials: &Credentials, verifier: &dyn IdentityVerifier) -> Result<(), AuthError> {
        let normalized = credentials.normalized()?;
        let verdict = verifier.verify(&normalized).await?;
        if verdict.ok {
            Ok(())
        } else {
            if let Some(reason) = verdict.reason.as_deref() {
                log::debug!("identity rejected credentials: {reason}");
            }
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Move to `Unauthenticated`. Idempotent; never touches the modal.
    pub fn deauthenticate(&self) {
        if self.transition(false) {
            log::info!("session deauthenticated");
        }
    }

    /// Answer "may I proceed?" and prompt for login when the answer is no.
    pub fn require_authentication(&self) -> bool {
        let authenticated = self.get_state().is_authenticated;
        if !authenticated {
            self.shared.modal.open();
        }
        authenticated
    }

    /// Consult `guard` for `route` and apply its decision: redirect first,
    /// then request the modal.
    pub fn navigate<F>(&self, route: &str, guard: &RouteGuard, redirect: F) -> GuardDecision
    where
        F: FnOnce(&str),
    {
        let decision = guard.evaluate(&self.get_state(), route);
        if decision.redirect {
            if let Some(target) = decision.target_route.as_deref() {
                log::debug!("route guard redirecting {route} -> {target}");
                redirect(target);
            }
        }
        if decision.should_prompt_auth {
            self.shared.modal.open();
        }
        decision
    }

    /// Set the flag, supersede any pending restore, and notify on change.
    /// Returns whether anything observable changed.
    fn transition(&self, authenticated: bool) -> bool {
        let (changed, snapshot) = {
            let mut cell = lock(&self.shared.cell);
            let before = cell.visible();
            let was_restoring = cell.phase == Phase::Restoring;
            cell.generation += 1;
            cell.phase = Phase::Ready;
            cell.session.is_authenticated = authenticated;
            (was_restoring || before != cell.session, cell.session)
        };
        if changed {
            self.shared.listeners.notify(&snapshot);
        }
        changed
    }

    // =========================================================================
    // STARTUP RESTORE
    // =========================================================================

    /// Enter the restoring phase. Any earlier ticket becomes stale.
    pub fn begin_restore(&self) -> RestoreTicket {
        let (ticket, snapshot, notify) = {
            let mut cell = lock(&self.shared.cell);
            cell.generation += 1;
            let notify = cell.phase == Phase::Ready && !cell.torn_down;
            cell.phase = Phase::Restoring;
            (RestoreTicket { generation: cell.generation }, cell.visible(), notify)
        };
        if notify {
            self.shared.listeners.notify(&snapshot);
        }
        ticket
    }

    /// Apply a restore outcome if `ticket` is still current.
    ///
    /// Errors fail closed to `Unauthenticated`. Returns whether the outcome
    /// was applied.
    pub fn finish_restore(&self, ticket: RestoreTicket, outcome: Result<bool, IdentityError>) -> bool {
        let authenticated = match outcome {
            Ok(flag) => flag,
            Err(err) => {
                log::warn!("session restore failed, continuing signed out: {err}");
                false
            }
        };

        let snapshot = {
            let mut cell = lock(&self.shared.cell);
            if cell.torn_down || cell.phase != Phase::Restoring || cell.generation != ticket.generation {
                log::debug!("ignoring stale session restore");
                return false;
            }
            cell.phase = Phase::Ready;
            cell.session.is_authenticated = authenticated;
            cell.session
        };
        self.shared.listeners.notify(&snapshot);
        // Prompts raised while the restore was pending are moot once it
        // resolves signed in.
        if authenticated {
            self.shared.modal.close();
        }
        true
    }

    /// Run `restore` to completion and apply its outcome.
    pub async fn restore<F>(&self, restore: F) -> bool
    where
        F: Future<Output = Result<bool, IdentityError>>,
    {
        let ticket = self.begin_restore();
        let outcome = restore.await;
        self.finish_restore(ticket, outcome)
    }

    /// Client unmount: ignore pending restores and drop every listener.
    pub fn teardown(&self) {
        {
            let mut cell = lock(&self.shared.cell);
            cell.torn_down = true;
            cell.generation += 1;
            if cell.phase == Phase::Restoring {
                cell.phase = Phase::Ready;
                cell.session.is_authenticated = false;
            }
        }
        self.shared.listeners.clear();
        self.shared.modal.clear_listeners();
        self.shared.toasts.clear_listeners();
        log::debug!("session store torn down");
    }

    // =========================================================================
    // OBSERVATION
    // =========================================================================

    /// Register `callback` to run after every observable session change.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.shared.listeners.subscribe(callback)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.get_state())
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}
