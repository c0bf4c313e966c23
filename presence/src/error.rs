//! Authentication failure taxonomy surfaced by `SessionStore::authenticate`.

use serde::{Deserialize, Serialize};

/// Why a login attempt did not transition the session.
///
/// Recovered locally by the login modal, which shows
/// [`AuthError::inline_message`] next to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum AuthError {
    /// The identity collaborator rejected the credentials, or they were malformed.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The identity collaborator could not be reached.
    #[error("network failure")]
    NetworkFailure,
}

impl AuthError {
    /// Message rendered inline in the login modal.
    #[must_use]
    pub fn inline_message(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "That email and password don't match our records.",
            Self::NetworkFailure => "We couldn't reach the server. Check your connection and try again.",
        }
    }
}
