//! Studio chat notifications through the Telegram Bot API.
//!
//! DESIGN
//! ======
//! `ChatNotifier` is the seam route handlers and the contact service depend
//! on; `TelegramClient` is the production implementation. Every Bot API
//! reply is wrapped in `{ ok, result, description? }` and a non-`ok`
//! envelope is an error even when HTTP says 200.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::TelegramConfig;

/// Bot API limit for a single text message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4_096;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotifyError {
    #[error("chat notifications are not configured")]
    NotConfigured,
    #[error("message is empty")]
    Empty,
    #[error("message exceeds {MAX_MESSAGE_CHARS} characters")]
    TooLong,
    #[error("telegram request failed: {0}")]
    Request(String),
    #[error("telegram api error: {0}")]
    Api(String),
}

/// Something that can post a line of text to the studio chat.
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

/// Trim and bound a message before sending.
///
/// # Errors
///
/// Returns [`NotifyError::Empty`] or [`NotifyError::TooLong`].
pub fn prepare_message(text: &str) -> Result<&str, NotifyError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NotifyError::Empty);
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(NotifyError::TooLong);
    }
    Ok(text)
}

/// Bot API reply envelope. `result` is not read.
#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    disable_web_page_preview: bool,
}

pub struct TelegramClient {
    http: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramClient {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.config.api_base, self.config.bot_token, method)
    }
}

#[async_trait]
impl ChatNotifier for TelegramClient {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let text = prepare_message(text)?;
        let body = SendMessageRequest { chat_id: &self.config.chat_id, text, disable_web_page_preview: true };
        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.without_url().to_string()))?;

        let payload: TelegramResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::Request(e.without_url().to_string()))?;
        check_envelope(payload)
    }
}

fn check_envelope(payload: TelegramResponse) -> Result<(), NotifyError> {
    if payload.ok {
        return Ok(());
    }
    Err(NotifyError::Api(payload.description.unwrap_or_else(|| "Telegram API error".to_owned())))
}

#[cfg(test)]
#[path = "telegram_test.rs"]
mod tests;
