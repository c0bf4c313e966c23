//! Salted password hashing for staff accounts.
//!
//! Hashes are `sha256(salt ":" password)` in hex with a random per-user salt.
//! Comparison runs over every byte so timing does not leak the match length.

use rand::Rng;
use sha2::{Digest, Sha256};

use super::session::bytes_to_hex;

const SALT_LEN: usize = 16;
pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password is empty")]
    Empty,
    #[error("password must be at least {MIN_PASSWORD_CHARS} characters")]
    TooShort,
}

/// Reject passwords that are unfit to store.
///
/// # Errors
///
/// Returns [`PasswordError`] describing the first rule broken.
pub fn check_strength(password: &str) -> Result<(), PasswordError> {
    if password.trim().is_empty() {
        return Err(PasswordError::Empty);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

/// Generate a random 16-byte hex salt.
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; SALT_LEN] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Check `password` against a stored salt and hash.
#[must_use]
pub fn verify_password(salt: &str, password: &str, expected_hash: &str) -> bool {
    let actual = hash_password(salt, password);
    if actual.len() != expected_hash.len() {
        return false;
    }
    actual
        .bytes()
        .zip(expected_hash.bytes())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
