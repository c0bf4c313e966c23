//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. Page requests pass through the server-side
//! route guard first, so a strict policy redirects before any markup is
//! rendered; the browser guard then opens the login modal.

pub mod auth;
pub mod contact;
pub mod projects;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum_extra::extract::cookie::CookieJar;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use presence::Session;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::session;
use crate::state::AppState;

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/projects", get(projects::list))
        .route("/api/contact", post(contact::submit))
        .route("/api/notify", post(contact::notify))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Apply the configured route guard to a page request.
async fn guard_pages(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if !state.guard.evaluate(&Session::default(), &path).redirect {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    let is_authenticated = match auth::token_from_jar(&jar) {
        None => false,
        Some(token) => match session::validate_session(&state.pool, token).await {
            Ok(user) => user.is_some(),
            Err(e) => {
                tracing::error!(error = %e, "session validation failed");
                false
            }
        },
    };

    let decision = state.guard.evaluate(&Session { is_authenticated }, &path);
    match decision.target_route {
        Some(target) if decision.redirect => Redirect::to(&target).into_response(),
        _ => next.run(request).await,
    }
}

/// API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone())
        .layer(middleware::from_fn_with_state(state.clone(), guard_pages));

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
