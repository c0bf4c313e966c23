//! Project-showcase list state.
//!
//! DESIGN
//! ======
//! The showcase is independent of the session core; it only ever reads the
//! listing endpoint, and tag filtering is a pure projection over the loaded
//! items.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::BTreeSet;

use crate::net::types::ProjectCard;

/// Shared project list state.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<ProjectCard>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    /// Active tag filter; `None` shows everything.
    pub tag: Option<String>,
}

impl ProjectsState {
    /// Items matching the active tag filter, in listing order.
    #[must_use]
    pub fn filtered(&self) -> Vec<ProjectCard> {
        filter_by_tag(&self.items, self.tag.as_deref())
    }

    /// Distinct tags across all items, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[must_use]
pub fn filter_by_tag(items: &[ProjectCard], tag: Option<&str>) -> Vec<ProjectCard> {
    match tag {
        None => items.to_vec(),
        Some(tag) => items
            .iter()
            .filter(|p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
            .cloned()
            .collect(),
    }
}
