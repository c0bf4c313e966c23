//! Server configuration loaded from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` through `dotenvy`, then builds one `ServerConfig`.
//! Required values fail startup; optional integrations (mail delivery, chat
//! notifications, the staff seed account) resolve to `None` when their
//! variables are missing so the site still serves without them.
//!
//! DESIGN
//! ======
//! Every loader reads through a lookup closure instead of `std::env`
//! directly, which keeps tests free of process-global env mutation.

use std::str::FromStr;

use presence::GuardPolicyKind;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Read a variable from the process environment.
#[must_use]
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_empty(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}

/// Parse the usual spellings of a boolean flag.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: FromStr>(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match non_empty(lookup, key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

// =============================================================================
// SERVER CONFIG
// =============================================================================

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Mark cookies `Secure`. Defaults to on when `SITE_URL` is https.
    pub cookie_secure: bool,
    pub guard_policy: GuardPolicyKind,
    pub resend: Option<ResendConfig>,
    pub telegram: Option<TelegramConfig>,
    pub staff_seed: Option<StaffSeed>,
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    /// Load from an arbitrary key/value source.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a value fails to parse.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = non_empty(lookup, "DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or(lookup, "PORT", DEFAULT_PORT)?;
        let db_max_connections = parse_or(lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let guard_policy = parse_or(lookup, "GUARD_POLICY", GuardPolicyKind::default())?;

        let cookie_secure = match non_empty(lookup, "COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => non_empty(lookup, "SITE_URL").is_some_and(|url| url.starts_with("https://")),
        };

        Ok(Self {
            database_url,
            port,
            db_max_connections,
            cookie_secure,
            guard_policy,
            resend: ResendConfig::from_lookup(lookup),
            telegram: TelegramConfig::from_lookup(lookup),
            staff_seed: StaffSeed::from_lookup(lookup),
        })
    }
}

// =============================================================================
// OPTIONAL INTEGRATIONS
// =============================================================================

/// Contact-form delivery through Resend.
#[derive(Clone)]
pub struct ResendConfig {
    pub api_key: String,
    pub from: String,
    /// Studio inbox that receives enquiries.
    pub to: String,
}

impl ResendConfig {
    /// Load from `RESEND_API_KEY`, `RESEND_FROM`, `CONTACT_INBOX`.
    /// Returns `None` if any are missing (contact delivery disabled).
    #[must_use]
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Option<Self> {
        Some(Self {
            api_key: non_empty(lookup, "RESEND_API_KEY")?,
            from: non_empty(lookup, "RESEND_FROM")?,
            to: non_empty(lookup, "CONTACT_INBOX")?,
        })
    }
}

impl std::fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendConfig")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

/// Studio chat notifications through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base: String,
}

impl TelegramConfig {
    /// Load from `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID` and the optional
    /// `TELEGRAM_API_BASE`. Returns `None` if token or chat are missing.
    #[must_use]
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Option<Self> {
        Some(Self {
            bot_token: non_empty(lookup, "TELEGRAM_BOT_TOKEN")?,
            chat_id: non_empty(lookup, "TELEGRAM_CHAT_ID")?,
            api_base: non_empty(lookup, "TELEGRAM_API_BASE")
                .map_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_owned(), |base| base.trim_end_matches('/').to_owned()),
        })
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

/// Staff account created or refreshed at startup.
#[derive(Clone)]
pub struct StaffSeed {
    pub email: String,
    pub password: String,
}

impl StaffSeed {
    /// Load from `STAFF_EMAIL` and `STAFF_PASSWORD`.
    #[must_use]
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Option<Self> {
        Some(Self { email: non_empty(lookup, "STAFF_EMAIL")?, password: lookup("STAFF_PASSWORD")? })
    }
}

impl std::fmt::Debug for StaffSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaffSeed").field("email", &self.email).finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
