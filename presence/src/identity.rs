//! Boundary to the identity collaborator that checks credentials.
//!
//! The core only consumes success/failure; how credentials are checked (HTTP
//! call, local table, test double) lives behind [`IdentityVerifier`].

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Login form input.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Trim and lowercase the email and require a non-empty password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the email is not of the
    /// form `local@domain` or the password is blank.
    pub fn normalized(&self) -> Result<Self, AuthError> {
        let email = self.email.trim().to_ascii_lowercase();
        let mut parts = email.split('@');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
        );
        if !well_formed || self.password.trim().is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(Self { email, password: self.password.clone() })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Collaborator response: `{ ok, reason? }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Verification {
    #[must_use]
    pub fn accepted() -> Self {
        Self { ok: true, reason: None }
    }

    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self { ok: false, reason: Some(reason.into()) }
    }
}

/// Failure to obtain a verdict at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity transport failed: {0}")]
    Transport(String),
}

impl From<IdentityError> for AuthError {
    fn from(_: IdentityError) -> Self {
        Self::NetworkFailure
    }
}

/// Checks credentials against whatever backs identity.
///
/// Futures are not required to be `Send`: the browser client runs them on
/// the single-threaded event loop.
#[async_trait(?Send)]
pub trait IdentityVerifier {
    async fn verify(&self, credentials: &Credentials) -> Result<Verification, IdentityError>;
}
