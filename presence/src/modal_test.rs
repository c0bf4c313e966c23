use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counting(modal: &ModalController) -> (Arc<AtomicUsize>, Subscription) {
    let hits = Arc::new(AtomicUsize::new(0));
    let sub = {
        let hits = Arc::clone(&hits);
        modal.subscribe(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    (hits, sub)
}

// =============================================================
// open / close
// =============================================================

#[test]
fn starts_closed() {
    let modal = ModalController::new();
    assert_eq!(modal.state(), ModalState::default());
    assert!(!modal.is_open());
}

#[test]
fn open_is_idempotent() {
    let modal = ModalController::new();
    let (hits, _sub) = counting(&modal);

    assert!(modal.open());
    assert!(!modal.open());
    assert!(!modal.open());

    assert!(modal.is_open());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn close_when_already_closed_is_silent() {
    let modal = ModalController::new();
    let (hits, _sub) = counting(&modal);
    modal.close();
    modal.close();
    assert!(!modal.is_open());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn close_resets_error_and_submit() {
    let modal = ModalController::new();
    modal.open();
    assert!(modal.begin_submit());
    modal.fail(AuthError::NetworkFailure);
    modal.close();
    assert_eq!(modal.state(), ModalState::default());
}

#[test]
fn clones_share_state() {
    let modal = ModalController::new();
    let other = modal.clone();
    modal.open();
    assert!(other.is_open());
}

// =============================================================
// submit lifecycle
// =============================================================

#[test]
fn begin_submit_rejects_second_submit() {
    let modal = ModalController::new();
    modal.open();
    assert!(modal.begin_submit());
    assert!(!modal.begin_submit());
    assert!(modal.state().submitting);
}

#[test]
fn fail_keeps_modal_open_with_inline_error() {
    let modal = ModalController::new();
    modal.open();
    modal.begin_submit();
    modal.fail(AuthError::InvalidCredentials);

    let state = modal.state();
    assert!(state.is_open);
    assert!(!state.submitting);
    assert_eq!(state.error, Some(AuthError::InvalidCredentials));
}

#[test]
fn begin_submit_clears_previous_error() {
    let modal = ModalController::new();
    modal.open();
    modal.fail(AuthError::InvalidCredentials);
    assert!(modal.begin_submit());
    assert_eq!(modal.state().error, None);
}

#[test]
fn clear_error_only_notifies_when_error_present() {
    let modal = ModalController::new();
    let (hits, _sub) = counting(&modal);
    modal.clear_error();
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    modal.fail(AuthError::NetworkFailure);
    modal.clear_error();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(modal.state().error, None);
}
