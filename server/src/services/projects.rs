//! Showcase project listing.
//!
//! Rows come back in `sort_order`, then title, so editors control the grid
//! order with a single integer. Inactive rows are drafts and only appear for
//! signed-in staff who ask for them.

use client::net::types::ProjectCard;
use sqlx::{PgPool, Row};

/// Fetch the listing. `include_drafts` also returns inactive rows.
pub async fn list_projects(pool: &PgPool, include_drafts: bool) -> Result<Vec<ProjectCard>, sqlx::Error> {
    let rows = sqlx::query(
        r"SELECT id, title, summary, image_url, url, tags, active
          FROM projects
          WHERE active OR $1
          ORDER BY sort_order ASC, title ASC",
    )
    .bind(include_drafts)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| ProjectCard {
            id: r.get("id"),
            title: r.get("title"),
            summary: r.get("summary"),
            image_url: r.get("image_url"),
            url: r.get("url"),
            tags: clean_tags(r.get("tags")),
            active: r.get("active"),
        })
        .collect())
}

/// Trim tags and drop blanks and case-insensitive repeats, keeping the
/// first spelling.
#[must_use]
pub fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|seen| seen.eq_ignore_ascii_case(tag)) {
            continue;
        }
        out.push(tag.to_owned());
    }
    out
}

/// Drafts are only honored for an authenticated caller.
#[must_use]
pub fn drafts_allowed(requested: bool, authenticated: bool) -> bool {
    requested && authenticated
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
