use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn upsert_staff_rejects_malformed_email_before_touching_db() {
    let state = test_app_state();
    let err = upsert_staff(&state.pool, "not-an-email", "long enough").await.unwrap_err();
    assert!(matches!(err, IdentityStoreError::InvalidEmail));
}

#[tokio::test]
async fn upsert_staff_rejects_weak_password_before_touching_db() {
    let state = test_app_state();
    let err = upsert_staff(&state.pool, "ops@studio.example", "short").await.unwrap_err();
    assert!(matches!(err, IdentityStoreError::Password(PasswordError::TooShort)));
}

