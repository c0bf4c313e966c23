//! Auth routes: credential login, session restore, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These endpoints back the browser's identity collaborator. Login answers
//! `{ ok, reason? }` (401 on rejection, so the body is still readable), the
//! restore probe answers 200 or 401, and logout always succeeds.

use axum::extract::{FromRef, OptionalFromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::SessionInfo;
use presence::{Credentials, Verification};
use time::Duration;

use crate::services::{identity, session};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const SESSION_MAX_AGE_DAYS: i64 = 30;

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

pub(crate) fn token_from_jar(jar: &CookieJar) -> Option<&str> {
    jar.get(COOKIE_NAME).map(Cookie::value).filter(|token| !token.is_empty())
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        <Self as OptionalFromRequestParts<S>>::from_request_parts(parts, state)
            .await?
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(token) = token_from_jar(&jar) else {
            return Ok(None);
        };

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token).await.map_err(|e| {
            tracing::error!(error = %e, "session validation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

        Ok(user.map(|user| Self { user, token: token.to_owned() }))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

fn rejected() -> Response {
    (StatusCode::UNAUTHORIZED, Json(Verification::rejected(identity::REJECT_REASON))).into_response()
}

/// `POST /api/auth/login`: check credentials, start a session.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(credentials): Json<Credentials>) -> Response {
    let Ok(credentials) = credentials.normalized() else {
        return rejected();
    };

    let user_id = match identity::verify_credentials(&state.pool, &credentials).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            tracing::info!(email = %credentials.email, "login rejected");
            return rejected();
        }
        Err(e) => {
            tracing::error!(error = %e, "credential lookup failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "credential lookup failed").into_response();
        }
    };

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };

    tracing::info!(email = %credentials.email, "login accepted");
    let jar = jar.add(session_cookie(token, state.cookie_secure));
    (jar, Json(Verification::accepted())).into_response()
}

/// `GET /api/auth/me`: restore probe; 401 when there is no live session.
pub async fn me(auth: AuthUser) -> Json<SessionInfo> {
    Json(SessionInfo { authenticated: true, email: Some(auth.user.email) })
}

/// `POST /api/auth/logout`: delete the session if any, clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = token_from_jar(&jar) {
        if let Err(e) = session::delete_session(&state.pool, token).await {
            tracing::warn!(error = %e, "session delete failed");
        }
    }

    let jar = jar.add(cleared_cookie(state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
