//! Online/offline visual identity derived from the session flag.
//!
//! Never stored. Consumers call [`derive_mode`] on every session change so a
//! stale cached mode cannot outlive a login or logout.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Online,
    Offline,
}

impl ThemeMode {
    /// Value written to the root `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    /// Choose between two palette values.
    #[must_use]
    pub fn pick<T>(self, online: T, offline: T) -> T {
        match self {
            Self::Online => online,
            Self::Offline => offline,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Online` iff the visitor is authenticated.
#[must_use]
pub fn derive_mode(session: &Session) -> ThemeMode {
    if session.is_authenticated { ThemeMode::Online } else { ThemeMode::Offline }
}
