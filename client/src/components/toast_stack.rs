//! Transient notification stack.
//!
//! DESIGN
//! ======
//! The store's toast queue is the source of truth. In the browser an effect
//! arms a one-shot timer for the earliest deadline whenever the queue
//! changes; the timer calls `expire`, which prunes and re-publishes the
//! queue, which re-arms the next timer. Stray timers are harmless because
//! `expire` is idempotent.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;
use presence::ToastId;

use crate::state::session::use_session;

/// Milliseconds from `now_ms` until `deadline_ms`, clamped for a browser
/// timer.
#[must_use]
pub fn expiry_delay_ms(deadline_ms: i64, now_ms: i64) -> u32 {
    let delta = deadline_ms.saturating_sub(now_ms).max(0);
    u32::try_from(delta).unwrap_or(u32::MAX)
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let session = use_session();
    let toasts = session.toasts;

    #[cfg(feature = "hydrate")]
    {
        let controller = session.store.toasts().clone();
        Effect::new(move || {
            if toasts.with(Vec::is_empty) {
                return;
            }
            let Some(deadline) = controller.next_deadline_ms() else {
                return;
            };
            let delay = expiry_delay_ms(deadline, controller.now_ms());
            let controller = controller.clone();
            gloo_timers::callback::Timeout::new(delay, move || {
                controller.expire();
            })
            .forget();
        });
    }

    let on_dismiss = Callback::new({
        let controller = session.store.toasts().clone();
        move |id: ToastId| controller.dismiss(id)
    });

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str()) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| on_dismiss.run(id)
                                title="Dismiss"
                                aria-label="Dismiss notification"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
