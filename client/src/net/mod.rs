//! Networking modules for the REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `identity` adapts them to the session core's
//! identity boundary, and `types` defines the shared JSON schema.

pub mod api;
pub mod identity;
pub mod types;
