//! Landing page.
//!
//! The hero reads the derived theme so the whole block flips between the
//! offline and online palettes the moment the session changes.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use presence::{DEFAULT_TOAST_TTL_MS, ToastKind};

use crate::components::gated_button::GatedButton;
use crate::state::session::{themed_class, use_session};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let hero_ctx = session.clone();
    let tagline_ctx = session.clone();

    let on_ping = Callback::new({
        let toasts = session.store.toasts().clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let toasts = toasts.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::notify_chat("A signed-in visitor waved from the homepage.").await {
                        Ok(()) => {
                            toasts.enqueue_kind("The studio has been pinged.", ToastKind::Success, DEFAULT_TOAST_TTL_MS);
                        }
                        Err(e) => {
                            log::warn!("studio ping failed: {e}");
                            toasts.enqueue_kind("Could not reach the studio.", ToastKind::Error, DEFAULT_TOAST_TTL_MS);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &toasts;
        }
    });

    view! {
        <section class=move || themed_class("hero", hero_ctx.theme())>
            <h1 class="hero__title">"We design sites that feel awake."</h1>
            <p class="hero__tagline">
                {move || {
                    tagline_ctx
                        .theme()
                        .pick("You're online. Everything here is live for you.", "Browse freely. Sign in to light things up.")
                }}
            </p>
            <div class="hero__actions">
                <a class="hero__cta" href="/projects">"See our work"</a>
                <GatedButton label="Ping the studio" on_allowed=on_ping class="hero__cta hero__cta--gated"/>
            </div>
        </section>
    }
}
