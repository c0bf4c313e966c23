//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the database pool, the cookie policy, the server-side route
//! guard, and the optional outbound integrations. Integrations sit behind
//! trait objects so handlers never know whether mail or chat is wired up.

use std::sync::Arc;

use presence::RouteGuard;
use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;
use crate::services::contact::{ContactMailer, ResendMailer};
use crate::services::telegram::{ChatNotifier, TelegramClient};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub cookie_secure: bool,
    pub guard: Arc<RouteGuard>,
    pub mailer: Option<Arc<dyn ContactMailer>>,
    pub notifier: Option<Arc<dyn ChatNotifier>>,
    /// Limits contact submissions and chat notifications per client.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: &ServerConfig) -> Self {
        let mailer = config
            .resend
            .clone()
            .map(|cfg| Arc::new(ResendMailer::new(cfg)) as Arc<dyn ContactMailer>);
        let notifier = config
            .telegram
            .clone()
            .map(|cfg| Arc::new(TelegramClient::new(cfg)) as Arc<dyn ChatNotifier>);
        Self {
            pool,
            cookie_secure: config.cookie_secure,
            guard: Arc::new(RouteGuard::from_kind(config.guard_policy)),
            mailer,
            notifier,
            rate_limiter: RateLimiter::default(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
