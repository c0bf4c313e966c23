//! Showcase card for one project.
//!
//! DESIGN
//! ======
//! Cards follow the session theme through a modifier class, and the accent
//! stripe uses the theme palette directly so it matches the header dot.

use leptos::prelude::*;

use crate::net::types;
use crate::state::session::{themed_class, use_session};
use crate::util::theme::accent_color;

#[component]
pub fn ProjectCard(project: types::ProjectCard, #[prop(optional)] on_tag: Option<Callback<String>>) -> impl IntoView {
    let session = use_session();
    let class_ctx = session.clone();
    let accent_ctx = session;
    let types::ProjectCard { title, summary, image_url, url, tags, .. } = project;
    let alt = title.clone();

    view! {
        <article class=move || themed_class("project-card", class_ctx.theme())>
            <span
                class="project-card__accent"
                style=move || format!("background: {}", accent_color(accent_ctx.theme()))
            ></span>
            {image_url.map(|src| view! { <img class="project-card__image" src=src alt=alt loading="lazy"/> })}
            <h3 class="project-card__title">{title}</h3>
            <p class="project-card__summary">{summary}</p>
            <ul class="project-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| {
                        let label = tag.clone();
                        view! {
                            <li>
                                <button
                                    class="project-card__tag"
                                    on:click=move |_| {
                                        if let Some(on_tag) = on_tag {
                                            on_tag.run(tag.clone());
                                        }
                                    }
                                >
                                    {label}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {url.map(|href| {
                view! {
                    <a class="project-card__link" href=href target="_blank" rel="noopener noreferrer">
                        "View project"
                    </a>
                }
            })}
        </article>
    }
}
