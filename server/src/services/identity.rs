//! Credential checks against the `users` table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the server half of the identity collaborator. It answers a
//! yes/no for normalized credentials; the route turns that into the
//! `{ ok, reason? }` body the browser session store consumes. Staff
//! accounts are provisioned from configuration at startup.

use presence::Credentials;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::password::{self, PasswordError};

/// Machine-readable rejection reason sent back to the browser.
pub const REJECT_REASON: &str = "invalid_credentials";

#[derive(Debug, thiserror::Error)]
pub enum IdentityStoreError {
    #[error("invalid email")]
    InvalidEmail,
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Return the user id when the credentials match a stored account.
///
/// `credentials` must already be normalized.
pub async fn verify_credentials(pool: &PgPool, credentials: &Credentials) -> Result<Option<Uuid>, sqlx::Error> {
    let row = sqlx::query("SELECT id, password_hash, salt FROM users WHERE email = $1")
        .bind(&credentials.email)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        // Hash anyway so unknown emails cost the same as wrong passwords.
        let _ = password::hash_password("", &credentials.password);
        return Ok(None);
    };

    let salt: String = row.get("salt");
    let stored: String = row.get("password_hash");
    if password::verify_password(&salt, &credentials.password, &stored) {
        Ok(Some(row.get("id")))
    } else {
        Ok(None)
    }
}

/// Create the account or reset its password.
pub async fn upsert_staff(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, IdentityStoreError> {
    let normalized = Credentials::new(email, password)
        .normalized()
        .map_err(|_| IdentityStoreError::InvalidEmail)?;
    password::check_strength(password)?;

    let salt = password::generate_salt();
    let hash = password::hash_password(&salt, password);
    let row = sqlx::query(
        r"INSERT INTO users (email, password_hash, salt)
          VALUES ($1, $2, $3)
          ON CONFLICT (email) DO UPDATE SET password_hash = EXCLUDED.password_hash, salt = EXCLUDED.salt
          RETURNING id",
    )
    .bind(&normalized.email)
    .bind(hash)
    .bind(salt)
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
