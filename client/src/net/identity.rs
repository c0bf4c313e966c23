//! HTTP-backed identity collaborator for the session core.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `IdentityError::Transport`, which the core
//! reports as `AuthError::NetworkFailure`. A rejected login is a normal
//! `Verification { ok: false }`, not an error.

use async_trait::async_trait;
use presence::{Credentials, IdentityError, IdentityVerifier, Verification};

/// Verifies credentials against `POST /api/auth/login`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpIdentity;

#[async_trait(?Send)]
impl IdentityVerifier for HttpIdentity {
    async fn verify(&self, credentials: &Credentials) -> Result<Verification, IdentityError> {
        super::api::login(credentials).await.map_err(IdentityError::Transport)
    }
}

/// Resolve the startup restore from the session cookie.
///
/// # Errors
///
/// Returns a transport error when the session endpoint cannot be reached;
/// the store treats that as signed out.
pub async fn restore_session() -> Result<bool, IdentityError> {
    super::api::fetch_session().await.map_err(IdentityError::Transport)
}
