use super::*;

fn project(id: &str, tags: &[&str]) -> ProjectCard {
    ProjectCard {
        id: id.to_owned(),
        title: format!("Project {id}"),
        summary: String::new(),
        image_url: None,
        url: None,
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        active: true,
    }
}

#[test]
fn projects_state_default_is_empty() {
    let state = ProjectsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.loaded);
    assert!(state.error.is_none());
    assert!(state.tag.is_none());
}

#[test]
fn filter_without_tag_returns_everything_in_order() {
    let items = vec![project("a", &["web"]), project("b", &[])];
    let ids: Vec<_> = filter_by_tag(&items, None).into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn filter_matches_tag_case_insensitively() {
    let items = vec![project("a", &["Web"]), project("b", &["branding"]), project("c", &["web", "app"])];
    let ids: Vec<_> = filter_by_tag(&items, Some("web")).into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn tags_are_distinct_and_sorted() {
    let state = ProjectsState {
        items: vec![project("a", &["web", "app"]), project("b", &["app", "branding"])],
        ..ProjectsState::default()
    };
    assert_eq!(state.tags(), vec!["app", "branding", "web"]);
}

#[test]
fn filtered_uses_active_tag() {
    let state = ProjectsState {
        items: vec![project("a", &["web"]), project("b", &["print"])],
        tag: Some("print".to_owned()),
        ..ProjectsState::default()
    };
    assert_eq!(state.filtered().len(), 1);
    assert_eq!(state.filtered()[0].id, "b");
}
