//! Button whose action requires a signed-in visitor.

use leptos::prelude::*;

use crate::state::session::{themed_class, use_session};

/// Runs `on_allowed` when signed in; otherwise opens the login modal and
/// does nothing else.
#[component]
pub fn GatedButton(
    #[prop(into)] label: String,
    on_allowed: Callback<()>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let session = use_session();
    let base = class.unwrap_or_else(|| "gated-button".to_owned());
    let on_click = {
        let store = session.store.clone();
        move |_| {
            if store.require_authentication() {
                on_allowed.run(());
            }
        }
    };
    let class_ctx = session.clone();
    let title_ctx = session;

    view! {
        <button
            class=move || themed_class(&base, class_ctx.theme())
            title=move || if title_ctx.is_authenticated() { "" } else { "Sign in to continue" }
            on:click=on_click
        >
            {label}
        </button>
    }
}
