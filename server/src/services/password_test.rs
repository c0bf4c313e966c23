use super::*;

#[test]
fn generate_salt_is_32_hex_chars() {
    let salt = generate_salt();
    assert_eq!(salt.len(), 32);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_salt_two_calls_differ() {
    assert_ne!(generate_salt(), generate_salt());
}

#[test]
fn hash_password_is_stable_per_salt() {
    let a = hash_password("salt", "correct horse");
    let b = hash_password("salt", "correct horse");
    let c = hash_password("pepper", "correct horse");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 64);
}

#[test]
fn verify_password_accepts_match() {
    let salt = generate_salt();
    let hash = hash_password(&salt, "correct horse");
    assert!(verify_password(&salt, "correct horse", &hash));
}

#[test]
fn verify_password_rejects_wrong_password() {
    let salt = generate_salt();
    let hash = hash_password(&salt, "correct horse");
    assert!(!verify_password(&salt, "battery staple", &hash));
    assert!(!verify_password(&salt, "Correct horse", &hash));
}

#[test]
fn verify_password_rejects_truncated_hash() {
    let hash = hash_password("salt", "correct horse");
    assert!(!verify_password("salt", "correct horse", &hash[..10]));
    assert!(!verify_password("salt", "correct horse", ""));
}

#[test]
fn check_strength_rules() {
    assert_eq!(check_strength(""), Err(PasswordError::Empty));
    assert_eq!(check_strength("    "), Err(PasswordError::Empty));
    assert_eq!(check_strength("short"), Err(PasswordError::TooShort));
    assert_eq!(check_strength("long enough"), Ok(()));
}
