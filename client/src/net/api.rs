//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready strings instead of panics,
//! so a failed fetch degrades the page without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use presence::{Credentials, Verification};

use super::types::{ContactRequest, ProjectCard};
#[cfg(feature = "hydrate")]
use super::types::{Ack, ChatNotification, SessionInfo};

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Map a `GET /api/auth/me` status to the restore outcome.
#[cfg(any(test, feature = "hydrate"))]
fn session_status_outcome(status: u16) -> Result<Option<bool>, String> {
    match status {
        200 => Ok(None),
        401 | 403 => Ok(Some(false)),
        other => Err(request_failed_message("session check", other)),
    }
}

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "not available on server";

/// Submit credentials to `POST /api/auth/login`.
///
/// A `401` still carries a `{ ok: false, reason }` body and is returned as
/// `Ok`; only transport or unexpected-status failures are errors.
///
/// # Errors
///
/// Returns an error string if the request cannot be completed.
pub async fn login(credentials: &Credentials) -> Result<Verification, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() && resp.status() != 401 {
            return Err(request_failed_message("login", resp.status()));
        }
        resp.json::<Verification>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(UNAVAILABLE.to_owned())
    }
}

/// Ask `GET /api/auth/me` whether the session cookie is still valid.
///
/// # Errors
///
/// Returns an error string on transport failure or an unexpected status.
pub async fn fetch_session() -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if let Some(flag) = session_status_outcome(resp.status())? {
            return Ok(flag);
        }
        let info: SessionInfo = resp.json().await.map_err(|e| e.to_string())?;
        Ok(info.authenticated)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(UNAVAILABLE.to_owned())
    }
}

/// End the session with `POST /api/auth/logout`. Best effort.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Path for the project listing; drafts are only honored for signed-in
/// callers.
fn projects_path(include_drafts: bool) -> &'static str {
    if include_drafts { "/api/projects?all=true" } else { "/api/projects" }
}

/// Fetch showcase projects from `GET /api/projects`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_projects(include_drafts: bool) -> Result<Vec<ProjectCard>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(projects_path(include_drafts))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("project listing", resp.status()));
        }
        resp.json::<Vec<ProjectCard>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = projects_path(include_drafts);
        Err(UNAVAILABLE.to_owned())
    }
}

/// Send the contact form to `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn send_contact(request: &ContactRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/contact")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("contact", resp.status()));
        }
        let ack: Ack = resp.json().await.map_err(|e| e.to_string())?;
        if !ack.ok {
            return Err(ack.reason.unwrap_or_else(|| "contact failed".to_owned()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(UNAVAILABLE.to_owned())
    }
}

/// Post a short message to the studio chat via `POST /api/notify`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn notify_chat(message: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = ChatNotification { message: message.to_owned() };
        let resp = gloo_net::http::Request::post("/api/notify")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("notify", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(UNAVAILABLE.to_owned())
    }
}
