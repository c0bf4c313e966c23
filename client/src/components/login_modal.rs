//! Login modal driven by the session store's modal controller.
//!
//! DESIGN
//! ======
//! Visibility, the inline error, and the submitting flag all come from
//! `ModalState`; the component only owns the typed field values. A failed
//! attempt keeps the modal open with the error under the form, and success
//! closes it from inside the store.

use leptos::prelude::*;
use presence::Credentials;

use crate::state::session::use_session;

#[component]
pub fn LoginModal() -> impl IntoView {
    let session = use_session();
    let modal = session.modal;
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_close = Callback::new({
        let store = session.store.clone();
        move |()| store.modal().close()
    });
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    let clear_error = Callback::new({
        let store = session.store.clone();
        move |()| store.modal().clear_error()
    });
    let on_submit = Callback::new({
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if !session.store.modal().begin_submit() {
                return;
            }
            let credentials = Credentials::new(email.get_untracked(), password.get_untracked());

            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    if session.login(credentials).await.is_ok() {
                        password.set(String::new());
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = credentials;
        }
    });

    view! {
        <Show when=move || modal.get().is_open>
            <div class="login-modal__backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="login-modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="login-modal-title"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <div class="login-modal__header">
                        <h2 id="login-modal-title">"Sign in"</h2>
                        <button class="login-modal__close" on:click=move |_| on_close.run(()) title="Close">
                            "✕"
                        </button>
                    </div>
                    <form class="login-form" on:submit=move |ev| on_submit.run(ev)>
                        <input
                            class="login-input"
                            type="email"
                            autocomplete="username"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                clear_error.run(());
                            }
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                clear_error.run(());
                            }
                        />
                        <Show when=move || modal.get().error.is_some()>
                            <p class="login-message login-message--error" role="alert">
                                {move || modal.get().error.map(|e| e.inline_message())}
                            </p>
                        </Show>
                        <button class="login-button" type="submit" disabled=move || modal.get().submitting>
                            {move || if modal.get().submitting { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
