//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Each entry carries its own `created_at_ms + ttl_ms` deadline measured from
//! enqueue time, so expiry never depends on queue position. [`ToastController::visible`]
//! filters by deadline on every read; [`ToastController::expire`] physically
//! prunes and is driven by a timer in the client. Entries are kept in
//! insertion order and removal uses `retain`, so survivors never reorder.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::observer::{Listeners, Subscription, lock};

/// Lifetime of a toast when the caller does not pick one.
pub const DEFAULT_TOAST_TTL_MS: i64 = 3_000;

/// Stable identifier for a queued toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(pub u64);

/// Visual flavour of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub created_at_ms: i64,
    pub ttl_ms: i64,
}

impl Toast {
    #[must_use]
    pub fn expires_at_ms(&self) -> i64 {
        self.created_at_ms.saturating_add(self.ttl_ms)
    }

    #[must_use]
    pub fn is_alive_at(&self, now_ms: i64) -> bool {
        now_ms < self.expires_at_ms()
    }
}

#[derive(Default)]
struct Queue {
    next_id: u64,
    entries: Vec<Toast>,
}

/// Shared handle to the toast queue.
#[derive(Clone)]
pub struct ToastController {
    queue: Arc<Mutex<Queue>>,
    clock: Arc<dyn Clock>,
    listeners: Arc<Listeners<Vec<Toast>>>,
}

impl ToastController {
    pub(crate) fn new(clock: Arc<dyn Clock>) -> Self {
        Self { queue: Arc::new(Mutex::new(Queue::default())), clock, listeners: Arc::new(Listeners::new()) }
    }

    /// Append an info toast with an explicit lifetime.
    pub fn enqueue(&self, message: impl Into<String>, ttl_ms: i64) -> ToastId {
        self.enqueue_kind(message, ToastKind::Info, ttl_ms)
    }

    pub fn enqueue_default(&self, message: impl Into<String>) -> ToastId {
        self.enqueue_kind(message, ToastKind::Info, DEFAULT_TOAST_TTL_MS)
    }

    pub fn enqueue_kind(&self, message: impl Into<String>, kind: ToastKind, ttl_ms: i64) -> ToastId {
        let created_at_ms = self.clock.now_ms();
        let (id, snapshot) = {
            let mut queue = lock(&self.queue);
            queue.next_id += 1;
            let id = ToastId(queue.next_id);
            queue.entries.push(Toast { id, message: message.into(), kind, created_at_ms, ttl_ms: ttl_ms.max(0) });
            (id, queue.entries.clone())
        };
        log::debug!("toast {} enqueued ttl={ttl_ms}ms", id.0);
        self.listeners.notify(&snapshot);
        id
    }

    /// Remove a toast before its deadline. Unknown ids are ignored.
    pub fn dismiss(&self, id: ToastId) {
        let snapshot = {
            let mut queue = lock(&self.queue);
            let before = queue.entries.len();
            queue.entries.retain(|t| t.id != id);
            (queue.entries.len() != before).then(|| queue.entries.clone())
        };
        if let Some(snapshot) = snapshot {
            self.listeners.notify(&snapshot);
        }
    }

    /// Drop every entry whose deadline has passed. Returns the removed ids.
    pub fn expire(&self) -> Vec<ToastId> {
        let now = self.clock.now_ms();
        let (removed, snapshot) = {
            let mut queue = lock(&self.queue);
            let removed: Vec<ToastId> = queue
                .entries
                .iter()
                .filter(|t| !t.is_alive_at(now))
                .map(|t| t.id)
                .collect();
            if !removed.is_empty() {
                queue.entries.retain(|t| t.is_alive_at(now));
            }
            (removed, queue.entries.clone())
        };
        if !removed.is_empty() {
            self.listeners.notify(&snapshot);
        }
        removed
    }

    /// Toasts alive right now, oldest first.
    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        let now = self.clock.now_ms();
        lock(&self.queue)
            .entries
            .iter()
            .filter(|t| t.is_alive_at(now))
            .cloned()
            .collect()
    }

    /// Earliest deadline among queued toasts, if any.
    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<i64> {
        lock(&self.queue).entries.iter().map(Toast::expires_at_ms).min()
    }

    #[must_use]
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Vec<Toast>) + Send + Sync + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub(crate) fn clear_listeners(&self) {
        self.listeners.clear();
    }
}

impl std::fmt::Debug for ToastController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastController")
            .field("queued", &lock(&self.queue).entries.len())
            .finish_non_exhaustive()
    }
}
