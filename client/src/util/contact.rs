//! Contact form validation and draft persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact form is independent of the session: anyone may write to the
//! studio. Validation is pure so the page and its tests share one rule set;
//! drafts survive reloads through hydrate-only `localStorage` glue.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::net::types::ContactRequest;

#[cfg(feature = "hydrate")]
const DRAFT_STORAGE_KEY: &str = "agency_site_contact_draft";

/// Upper bound on the free-text message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4_000;

/// Raw form input as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// Trim the draft and check every field.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate(draft: &ContactDraft) -> Result<ContactRequest, &'static str> {
    let first_name = draft.first_name.trim();
    let last_name = draft.last_name.trim();
    let email = draft.email.trim();
    let message = draft.message.trim();

    if first_name.is_empty() || last_name.is_empty() {
        return Err("Please tell us your first and last name.");
    }
    if !looks_like_email(email) {
        return Err("Please enter a valid email address.");
    }
    if message.is_empty() {
        return Err("Please include a short message.");
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err("Your message is too long.");
    }

    Ok(ContactRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    })
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') && !domain.contains('@')
}

/// One-line summary posted to the studio chat after a successful submit.
#[must_use]
pub fn chat_summary(request: &ContactRequest) -> String {
    format!("New enquiry from {} {} <{}>", request.first_name, request.last_name, request.email)
}

/// Load the saved draft, if any.
pub fn load_draft() -> Option<ContactDraft> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(DRAFT_STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save the draft; `None` clears it.
pub fn save_draft(draft: Option<&ContactDraft>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let result = match draft {
            Some(draft) => match serde_json::to_string(draft) {
                Ok(raw) => storage.set_item(DRAFT_STORAGE_KEY, &raw),
                Err(_) => return,
            },
            None => storage.remove_item(DRAFT_STORAGE_KEY),
        };
        if result.is_err() {
            log::debug!("contact draft not persisted");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
    }
}
