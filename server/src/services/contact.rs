//! Contact-form delivery.
//!
//! SYSTEM CONTEXT
//! ==============
//! `POST /api/contact` lands here. The enquiry is validated with the same
//! rules the browser form uses, mailed to the studio inbox through Resend,
//! and then announced in the studio chat.
//!
//! ERROR HANDLING
//! ==============
//! Mail delivery decides the outcome. The chat announcement is best effort:
//! its failure is logged and never turns a delivered enquiry into an error.

use async_trait::async_trait;
use client::net::types::ContactRequest;
use client::util::contact::{ContactDraft, chat_summary, validate};
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use super::telegram::ChatNotifier;
use crate::config::ResendConfig;

const CONTACT_EMAIL_TEMPLATE: &str = include_str!("../../templates/contact_email.html");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("contact delivery is not configured")]
    NotConfigured,
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Delivers a validated enquiry to the studio.
#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn deliver(&self, request: &ContactRequest) -> Result<(), ContactError>;
}

pub struct ResendMailer {
    config: ResendConfig,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: ResendConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ContactMailer for ResendMailer {
    async fn deliver(&self, request: &ContactRequest) -> Result<(), ContactError> {
        let resend = Resend::new(&self.config.api_key);
        let to = [self.config.to.as_str()];
        let subject = contact_subject(request);
        let html = render_contact_email(request);

        let email = CreateEmailBaseOptions::new(&self.config.from, to, &subject).with_html(&html);
        resend
            .emails
            .send(email)
            .await
            .map_err(|e| ContactError::Delivery(e.to_string()))?;
        Ok(())
    }
}

/// Validate with the browser's rules and return the trimmed request.
///
/// # Errors
///
/// Returns [`ContactError::Invalid`] with the message the form would show.
pub fn normalize_request(request: &ContactRequest) -> Result<ContactRequest, ContactError> {
    let draft = ContactDraft {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email: request.email.clone(),
        message: request.message.clone(),
    };
    validate(&draft).map_err(ContactError::Invalid)
}

/// Validate, deliver, then announce.
///
/// # Errors
///
/// Returns an error if validation or mail delivery fails.
pub async fn submit(
    request: &ContactRequest,
    mailer: Option<&dyn ContactMailer>,
    notifier: Option<&dyn ChatNotifier>,
) -> Result<(), ContactError> {
    let request = normalize_request(request)?;
    let mailer = mailer.ok_or(ContactError::NotConfigured)?;
    mailer.deliver(&request).await?;

    if let Some(notifier) = notifier {
        if let Err(e) = notifier.notify(&chat_summary(&request)).await {
            tracing::warn!(error = %e, "contact chat notification failed");
        }
    }
    Ok(())
}

#[must_use]
pub fn contact_subject(request: &ContactRequest) -> String {
    format!("New enquiry from {} {}", request.first_name, request.last_name)
}

#[must_use]
pub fn render_contact_email(request: &ContactRequest) -> String {
    let name = format!("{} {}", request.first_name, request.last_name);
    CONTACT_EMAIL_TEMPLATE
        .replace("{{NAME}}", &escape_html(&name))
        .replace("{{EMAIL}}", &escape_html(&request.email))
        .replace("{{MESSAGE}}", &escape_html(&request.message))
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
