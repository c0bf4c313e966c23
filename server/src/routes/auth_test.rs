use axum::body::to_bytes;
use axum::http::header::SET_COOKIE;
use uuid::Uuid;

use super::*;
use crate::state::test_helpers::test_app_state;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax() {
    let cookie = session_cookie("abc".into(), true);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::days(30)));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.secure(), Some(false));
}

#[test]
fn token_from_jar_ignores_missing_and_empty() {
    assert_eq!(token_from_jar(&CookieJar::new()), None);
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, ""));
    assert_eq!(token_from_jar(&jar), None);
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, "tok"));
    assert_eq!(token_from_jar(&jar), Some("tok"));
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn login_rejects_malformed_credentials_without_db() {
    let response = login(
        State(test_app_state()),
        CookieJar::new(),
        Json(Credentials::new("not-an-email", "secret")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert_eq!(body_json(response).await, serde_json::json!({ "ok": false, "reason": "invalid_credentials" }));
}

#[tokio::test]
async fn login_rejects_blank_password_without_db() {
    let response =
        login(State(test_app_state()), CookieJar::new(), Json(Credentials::new("ops@studio.example", "  "))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_reports_email() {
    let auth = AuthUser {
        user: session::SessionUser { id: Uuid::nil(), email: "ops@studio.example".into() },
        token: "tok".into(),
    };
    let Json(info) = me(auth).await;
    assert!(info.authenticated);
    assert_eq!(info.email.as_deref(), Some("ops@studio.example"));
}

#[tokio::test]
async fn logout_without_cookie_clears_and_returns_no_content() {
    let response = logout(State(test_app_state()), CookieJar::new()).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("session_token="));
    assert!(set_cookie.contains("Max-Age=0"));
}
