//! Online/offline theme application.
//!
//! Writes the derived `ThemeMode` to a `data-theme` attribute on the `<html>`
//! element so the stylesheet can flip the whole visual identity at once.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The attribute is re-derived from the session signal on every change and
//! never persisted: a stored theme could disagree with the session after a
//! restore. SSR paths safely no-op and the shell ships `offline`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;
use presence::{Session, ThemeMode, derive_mode};

/// Attribute name read by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Apply the theme attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Re-apply the theme whenever the mirrored session changes.
pub fn install_theme_sync(session: RwSignal<Session>) {
    Effect::new(move || apply(derive_mode(&session.get())));
}

/// Accent color for inline SVG and canvas consumers that cannot use CSS
/// variables.
#[must_use]
pub fn accent_color(mode: ThemeMode) -> &'static str {
    mode.pick("#39ff88", "#8a8f98")
}
