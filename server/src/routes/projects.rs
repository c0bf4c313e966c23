//! Project listing route.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::ProjectCard;
use serde::Deserialize;

use super::auth::AuthUser;
use crate::services::projects;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    all: bool,
}

/// `GET /api/projects`: active projects; `?all=true` adds drafts for
/// signed-in callers and is ignored otherwise.
pub async fn list(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ProjectCard>>, StatusCode> {
    let include_drafts = projects::drafts_allowed(query.all, auth.is_some());
    projects::list_projects(&state.pool, include_drafts)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "project listing failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
