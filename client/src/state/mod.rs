//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` binds the framework-agnostic session core into signals;
//! `projects` holds showcase data that never depends on who is signed in.

pub mod projects;
pub mod session;
