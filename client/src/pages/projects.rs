//! Project showcase page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listing state lives in the app-wide `RwSignal<ProjectsState>` so returning
//! to the page does not flash an empty grid. The listing is refetched when
//! the session flips, because signed-in visitors may opt into drafts.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::gated_button::GatedButton;
use crate::components::project_card::ProjectCard;
use crate::state::projects::ProjectsState;
use crate::state::session::use_session;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let session = use_session();
    let signed_in = session.session;
    let query = use_query_map();
    let show_drafts = RwSignal::new(query.get_untracked().get("all").is_some_and(|v| v == "true"));

    Effect::new(move || {
        let include_drafts = show_drafts.get() && signed_in.get().is_authenticated;
        projects.update(|s| {
            s.loading = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_projects(include_drafts).await {
                Ok(items) => projects.update(|s| {
                    s.items = items;
                    s.loaded = true;
                    s.loading = false;
                }),
                Err(e) => {
                    log::warn!("project listing failed: {e}");
                    projects.update(|s| {
                        s.error = Some(e);
                        s.loading = false;
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = include_drafts;
    });

    let on_tag = Callback::new(move |tag: String| {
        projects.update(|s| {
            s.tag = if s.tag.as_deref() == Some(tag.as_str()) { None } else { Some(tag) };
        });
    });
    let on_toggle_drafts = Callback::new(move |()| show_drafts.update(|v| *v = !*v));

    view! {
        <section class="projects-page">
            <div class="projects-page__header">
                <h1>"Selected work"</h1>
                <GatedButton
                    label="Toggle drafts"
                    on_allowed=on_toggle_drafts
                    class="projects-page__drafts"
                />
            </div>
            <div class="projects-page__filters">
                <button
                    class="tag-chip"
                    class:tag-chip--active=move || projects.get().tag.is_none()
                    on:click=move |_| projects.update(|s| s.tag = None)
                >
                    "All"
                </button>
                <For
                    each=move || projects.get().tags()
                    key=Clone::clone
                    children=move |tag| {
                        let active_tag = tag.clone();
                        let label = tag.clone();
                        view! {
                            <button
                                class="tag-chip"
                                class:tag-chip--active=move || projects.get().tag.as_deref() == Some(active_tag.as_str())
                                on:click=move |_| on_tag.run(tag.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
            <Show when=move || projects.get().error.is_some()>
                <p class="projects-page__error">{move || projects.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || projects.get().loaded || !projects.get().loading
                fallback=|| view! { <p class="projects-page__loading">"Loading projects..."</p> }
            >
                <div class="projects-page__grid">
                    <For
                        each=move || projects.get().filtered()
                        key=|project| project.id.clone()
                        children=move |project| view! { <ProjectCard project=project on_tag=on_tag/> }
                    />
                </div>
            </Show>
        </section>
    }
}
