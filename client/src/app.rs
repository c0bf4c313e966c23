//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use presence::{GuardPolicyKind, RouteGuard};

use crate::components::{login_modal::LoginModal, session_badge::SessionBadge, toast_stack::ToastStack};
use crate::pages::{contact::ContactPage, home::HomePage, projects::ProjectsPage};
use crate::state::projects::ProjectsState;
use crate::state::session::{provide_session_context, use_session};
use crate::util::{guard, theme};

/// Guard policy baked in at build time via `SITE_GUARD_POLICY`
/// (`permissive` or `strict`). Unknown values fall back to permissive.
fn configured_guard_policy() -> GuardPolicyKind {
    option_env!("SITE_GUARD_POLICY")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="offline">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the single session store, starts the credential restore, and
/// mounts the app-wide login modal and toast stack.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session_context(RouteGuard::from_kind(configured_guard_policy()));
    provide_context(RwSignal::new(ProjectsState::default()));

    theme::install_theme_sync(session.session);
    on_cleanup(move || session.store.teardown());

    view! {
        <Stylesheet id="leptos" href="/pkg/agency-site.css"/>
        <Title text="Northlight Studio"/>

        <Router>
            <RouteGuardHost/>
            <header class="site-header">
                <a class="site-header__brand" href="/">"Northlight"</a>
                <nav class="site-header__nav">
                    <a href="/projects">"Work"</a>
                    <a href="/contact">"Contact"</a>
                </nav>
                <SessionBadge/>
            </header>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <LoginModal/>
            <ToastStack/>
        </Router>
    }
}

/// Installs the route guard inside the router so location hooks resolve.
#[component]
fn RouteGuardHost() -> impl IntoView {
    guard::install_route_guard(use_session(), leptos_router::hooks::use_navigate());
}
