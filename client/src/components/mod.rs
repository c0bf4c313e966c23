//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the `SessionContext` from Leptos context. None of them
//! keeps its own copy of the authentication flag: they render from the
//! mirrored signals and send every change back through the store.

pub mod gated_button;
pub mod login_modal;
pub mod project_card;
pub mod session_badge;
pub mod toast_stack;
