//! Header badge showing the online/offline presence and the sign-in toggle.

#[cfg(test)]
#[path = "session_badge_test.rs"]
mod session_badge_test;

use leptos::prelude::*;
use presence::{ThemeMode, derive_mode};

use crate::state::session::{themed_class, use_session};

/// Human label for a presence mode.
#[must_use]
pub fn status_label(mode: ThemeMode) -> &'static str {
    mode.pick("Online", "Offline")
}

#[component]
pub fn SessionBadge() -> impl IntoView {
    let session = use_session();
    let state = session.session;
    let ready = session.ready;

    let on_sign_in = Callback::new({
        let store = session.store.clone();
        move |()| {
            store.modal().open();
        }
    });
    let on_sign_out = Callback::new({
        let session = session.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move { session.logout().await });
            }
            #[cfg(not(feature = "hydrate"))]
            session.store.deauthenticate();
        }
    });

    view! {
        <div class=move || themed_class("session-badge", derive_mode(&state.get()))>
            <Show
                when=move || ready.get()
                fallback=|| view! { <span class="session-badge__status session-badge__status--pending">"..."</span> }
            >
                <span class="session-badge__dot"></span>
                <span class="session-badge__status">{move || status_label(derive_mode(&state.get()))}</span>
                <Show
                    when=move || state.get().is_authenticated
                    fallback=move || {
                        view! {
                            <button class="session-badge__action" on:click=move |_| on_sign_in.run(())>
                                "Sign in"
                            </button>
                        }
                    }
                >
                    <button class="session-badge__action" on:click=move |_| on_sign_out.run(())>
                        "Sign out"
                    </button>
                </Show>
            </Show>
        </div>
    }
}
