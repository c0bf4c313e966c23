//! Route-guard wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation is offered to the session's `RouteGuard`. The active
//! policy decides; this module only translates a redirect into router
//! navigation, and the store opens the login modal afterwards when asked.
//!
//! The guard stays quiet while the startup restore is pending and runs again
//! once it resolves, so a visitor with a valid cookie is never bounced by the
//! fail-closed placeholder state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;
use presence::{GuardDecision, RouteGuard, SessionStore};

use crate::state::session::SessionContext;

/// Evaluate `route` unless the session is still restoring.
pub fn guard_when_ready<F>(
    store: &SessionStore,
    guard: &RouteGuard,
    ready: bool,
    route: &str,
    redirect: F,
) -> Option<GuardDecision>
where
    F: FnOnce(&str),
{
    ready.then(|| store.navigate(route, guard, redirect))
}

/// Evaluate the guard on every pathname change and when the restore settles.
pub fn install_route_guard<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        let ready = session.ready.get();
        session.session.track();
        let navigate = navigate.clone();
        guard_when_ready(&session.store, &session.guard, ready, &path, move |target| {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    });
}
