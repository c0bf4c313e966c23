//! Contact page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Open to everyone regardless of session. The draft is persisted on every
//! keystroke so a reload (or a detour through the login modal) does not lose
//! a half-written message. Delivery feedback goes through the shared toast
//! queue.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use presence::{DEFAULT_TOAST_TTL_MS, ToastKind};

use crate::state::session::use_session;
use crate::util::contact::{self, ContactDraft, MAX_MESSAGE_CHARS};

#[component]
pub fn ContactPage() -> impl IntoView {
    let session = use_session();
    let draft = RwSignal::new(ContactDraft::default());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(saved) = contact::load_draft() {
            draft.set(saved);
        }
    });

    let edit = move |apply: fn(&mut ContactDraft, String), value: String| {
        draft.update(|d| apply(d, value));
        contact::save_draft(Some(&draft.get_untracked()));
        error.set(None);
    };

    let on_submit = Callback::new({
        let toasts = session.store.toasts().clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let request = match contact::validate(&draft.get_untracked()) {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let toasts = toasts.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::send_contact(&request).await {
                        Ok(()) => {
                            contact::save_draft(None);
                            draft.set(ContactDraft::default());
                            toasts.enqueue_kind(
                                "Thanks! We'll be in touch shortly.",
                                ToastKind::Success,
                                DEFAULT_TOAST_TTL_MS,
                            );
                        }
                        Err(e) => {
                            log::warn!("contact submit failed: {e}");
                            toasts.enqueue_kind(
                                "Your message could not be sent. Please try again.",
                                ToastKind::Error,
                                DEFAULT_TOAST_TTL_MS,
                            );
                        }
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&toasts, request);
        }
    });

    view! {
        <section class="contact-page">
            <h1>"Tell us about your project"</h1>
            <form class="contact-form" on:submit=move |ev| on_submit.run(ev)>
                <div class="contact-form__row">
                    <input
                        class="contact-input"
                        placeholder="First name"
                        autocomplete="given-name"
                        prop:value=move || draft.get().first_name
                        on:input=move |ev| edit(|d, v| d.first_name = v, event_target_value(&ev))
                    />
                    <input
                        class="contact-input"
                        placeholder="Last name"
                        autocomplete="family-name"
                        prop:value=move || draft.get().last_name
                        on:input=move |ev| edit(|d, v| d.last_name = v, event_target_value(&ev))
                    />
                </div>
                <input
                    class="contact-input"
                    type="email"
                    placeholder="you@company.com"
                    autocomplete="email"
                    prop:value=move || draft.get().email
                    on:input=move |ev| edit(|d, v| d.email = v, event_target_value(&ev))
                />
                <textarea
                    class="contact-input contact-input--message"
                    placeholder="What are you building?"
                    maxlength=MAX_MESSAGE_CHARS.to_string()
                    prop:value=move || draft.get().message
                    on:input=move |ev| edit(|d, v| d.message = v, event_target_value(&ev))
                ></textarea>
                <Show when=move || error.get().is_some()>
                    <p class="contact-form__error" role="alert">{move || error.get()}</p>
                </Show>
                <button class="contact-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </section>
    }
}
