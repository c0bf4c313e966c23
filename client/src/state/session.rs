//! Reactive bindings around the `presence` session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `SessionContext` and provides it via context. The store
//! stays the single source of truth; the signals here are mirrors written
//! only by store subscriptions, so components re-render on every transition
//! and never hold a copy of the flag that could go stale.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use presence::{
    AuthError, Credentials, ModalState, RouteGuard, Session, SessionStore, ThemeMode, Toast, derive_mode,
};

use crate::net::identity::HttpIdentity;
use crate::util::clock::BrowserClock;

/// Session store plus the signals mirroring it.
#[derive(Clone)]
pub struct SessionContext {
    pub store: SessionStore,
    pub session: RwSignal<Session>,
    pub ready: RwSignal<bool>,
    pub modal: RwSignal<ModalState>,
    pub toasts: RwSignal<Vec<Toast>>,
    pub guard: Arc<RouteGuard>,
}

impl SessionContext {
    #[must_use]
    pub fn new(guard: RouteGuard) -> Self {
        let store = SessionStore::with_clock(Arc::new(BrowserClock));
        let ctx = Self {
            session: RwSignal::new(store.get_state()),
            ready: RwSignal::new(store.is_ready()),
            modal: RwSignal::new(store.modal().state()),
            toasts: RwSignal::new(store.toasts().visible()),
            guard: Arc::new(guard),
            store,
        };
        ctx.mirror();
        ctx
    }

    /// Wire store notifications into the signals. Listeners live as long as
    /// the store; `SessionStore::teardown` releases them on unmount.
    fn mirror(&self) {
        let (session, ready, reader) = (self.session, self.ready, self.store.clone());
        self.store
            .subscribe(move |next| {
                session.set(*next);
                ready.set(reader.is_ready());
            })
            .detach();

        let modal = self.modal;
        self.store.modal().subscribe(move |next| modal.set(*next)).detach();

        let toasts = self.toasts;
        self.store.toasts().subscribe(move |next| toasts.set(next.clone())).detach();
    }

    /// Begin the startup credential restore. The browser resolves it against
    /// `/api/auth/me`; server rendering leaves it pending so session-dependent
    /// markup renders in its fail-closed form.
    pub fn start_restore(&self) {
        let ticket = self.store.begin_restore();
        #[cfg(feature = "hydrate")]
        {
            let store = self.store.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::identity::restore_session().await;
                store.finish_restore(ticket, outcome);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }

    /// Tracked read of the current theme.
    pub fn theme(&self) -> ThemeMode {
        derive_mode(&self.session.get())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_authenticated
    }

    /// Gate an action: `true` means proceed, `false` means the login modal
    /// has been requested instead.
    pub fn require_authentication(&self) -> bool {
        self.store.require_authentication()
    }

    /// Submit credentials through the HTTP identity collaborator.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] the modal is already displaying inline.
    pub async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        self.store.authenticate(&credentials, &HttpIdentity).await
    }

    /// End the server session, then flip the local flag regardless of the
    /// server's answer.
    pub async fn logout(&self) {
        crate::net::api::logout().await;
        self.store.deauthenticate();
    }
}

/// Create the app-wide `SessionContext`, start its restore, and provide it.
pub fn provide_session_context(guard: RouteGuard) -> SessionContext {
    let session = SessionContext::new(guard);
    session.start_restore();
    provide_context(session.clone());
    session
}

/// Fetch the `SessionContext` provided by `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// CSS modifier for a themed block, e.g. `card card--online`.
#[must_use]
pub fn themed_class(base: &str, mode: ThemeMode) -> String {
    format!("{base} {base}--{}", mode.as_str())
}
