//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic, persistence and outbound calls so
//! route handlers can stay focused on protocol translation and auth plumbing.

pub mod contact;
pub mod identity;
pub mod password;
pub mod projects;
pub mod session;
pub mod telegram;
