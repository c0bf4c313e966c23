//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages never decide access themselves; gated actions go
//! through `GatedButton` and navigation through the route guard.

pub mod contact;
pub mod home;
pub mod projects;
