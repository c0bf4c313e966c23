//! In-memory rate limiting for the public write endpoints.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by client address. Two limits are enforced on contact submissions
//! and chat notifications:
//! - Per-client: 5 requests per 10 minutes
//! - Global: 60 requests per 10 minutes
//!
//! TRADE-OFFS
//! ==========
//! Counters live in process memory, so a restart forgets them and several
//! replicas each enforce their own budget. Good enough to stop a form from
//! being used as a mail cannon.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

pub(crate) const DEFAULT_PER_CLIENT_LIMIT: usize = 5;
pub(crate) const DEFAULT_GLOBAL_LIMIT: usize = 60;
pub(crate) const DEFAULT_WINDOW: Duration = Duration::from_secs(600);

#[derive(Clone, Copy, Debug)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub global_limit: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { per_client_limit: DEFAULT_PER_CLIENT_LIMIT, global_limit: DEFAULT_GLOBAL_LIMIT, window: DEFAULT_WINDOW }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-client rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerClientExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    client_requests: HashMap<String, VecDeque<Instant>>,
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both per-client and global limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns which limit the request would exceed; nothing is recorded.
    pub fn check_and_record(&self, client: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    fn check_and_record_at(&self, client: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let cfg = self.config;
        let window_secs = cfg.window.as_secs();

        prune_window(&mut inner.global_requests, now, cfg.window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded { limit: cfg.global_limit, window_secs });
        }

        let client_deque = inner.client_requests.entry(client.to_owned()).or_default();
        prune_window(client_deque, now, cfg.window);
        if client_deque.len() >= cfg.per_client_limit {
            return Err(RateLimitError::PerClientExceeded { limit: cfg.per_client_limit, window_secs });
        }

        client_deque.push_back(now);
        inner.global_requests.push_back(now);
        Ok(())
    }

    /// Forget clients whose windows are empty.
    pub fn sweep(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let window = self.config.window;
        inner.client_requests.retain(|_, deque| {
            prune_window(deque, now, window);
            !deque.is_empty()
        });
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).client_requests.len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
