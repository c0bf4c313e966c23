//! Contact and chat-notification routes.
//!
//! Both endpoints are open to anonymous visitors, so both are rate limited
//! per client address before any outbound call is made.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use client::net::types::{Ack, ChatNotification, ContactRequest};

use crate::services::contact::{self, ContactError};
use crate::services::telegram::{self, NotifyError};
use crate::state::AppState;

/// Client key for rate limiting: first `X-Forwarded-For` hop, else the peer.
pub(crate) fn client_key(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| peer.ip().to_string())
}

fn ack_error(status: StatusCode, reason: impl Into<String>) -> (StatusCode, Json<Ack>) {
    (status, Json(Ack { ok: false, reason: Some(reason.into()) }))
}

fn ack_ok() -> (StatusCode, Json<Ack>) {
    (StatusCode::OK, Json(Ack { ok: true, reason: None }))
}

fn throttle(state: &AppState, headers: &HeaderMap, peer: SocketAddr) -> Result<(), (StatusCode, Json<Ack>)> {
    let key = client_key(headers, peer);
    state.rate_limiter.check_and_record(&key).map_err(|e| {
        tracing::warn!(client = %key, error = %e, "rate limited");
        ack_error(StatusCode::TOO_MANY_REQUESTS, "Too many requests. Please try again later.")
    })
}

pub(crate) fn contact_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContactError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}

pub(crate) fn notify_status(err: &NotifyError) -> StatusCode {
    match err {
        NotifyError::Empty | NotifyError::TooLong => StatusCode::UNPROCESSABLE_ENTITY,
        NotifyError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        NotifyError::Request(_) | NotifyError::Api(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/contact`: validate, mail the studio, announce in chat.
pub async fn submit(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(request): Json<ContactRequest>,
) -> (StatusCode, Json<Ack>) {
    if let Err(rejection) = throttle(&state, &headers, peer) {
        return rejection;
    }

    match contact::submit(&request, state.mailer.as_deref(), state.notifier.as_deref()).await {
        Ok(()) => ack_ok(),
        Err(e) => {
            let status = contact_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "contact submission failed");
            }
            ack_error(status, e.to_string())
        }
    }
}

/// `POST /api/notify`: post a line to the studio chat.
pub async fn notify(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(body): Json<ChatNotification>,
) -> (StatusCode, Json<Ack>) {
    if let Err(rejection) = throttle(&state, &headers, peer) {
        return rejection;
    }

    let result = match (&state.notifier, telegram::prepare_message(&body.message)) {
        (_, Err(e)) => Err(e),
        (None, Ok(_)) => Err(NotifyError::NotConfigured),
        (Some(notifier), Ok(text)) => notifier.notify(text).await,
    };

    match result {
        Ok(()) => ack_ok(),
        Err(e) => {
            let status = notify_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "chat notification failed");
            }
            ack_error(status, e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
