use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::clock::ManualClock;

fn controller() -> (Arc<ManualClock>, ToastController) {
    let clock = Arc::new(ManualClock::new(1_000));
    let toasts = ToastController::new(Arc::clone(&clock) as Arc<dyn Clock>);
    (clock, toasts)
}

fn messages(toasts: &[Toast]) -> Vec<&str> {
    toasts.iter().map(|t| t.message.as_str()).collect()
}

// =============================================================
// TTL window
// =============================================================

#[test]
fn toast_present_just_before_ttl_and_gone_just_after() {
    let (clock, toasts) = controller();
    toasts.enqueue("saved", 500);

    clock.advance(499);
    assert_eq!(messages(&toasts.visible()), vec!["saved"]);

    clock.advance(2);
    assert!(toasts.visible().is_empty());
}

#[test]
fn default_ttl_is_applied() {
    let (clock, toasts) = controller();
    let id = toasts.enqueue_default("hello");
    let entry = toasts.visible().into_iter().find(|t| t.id == id).unwrap();
    assert_eq!(entry.ttl_ms, DEFAULT_TOAST_TTL_MS);
    assert_eq!(entry.created_at_ms, 1_000);

    clock.advance(DEFAULT_TOAST_TTL_MS);
    assert!(toasts.visible().is_empty());
}

#[test]
fn negative_ttl_is_clamped_to_zero() {
    let (_clock, toasts) = controller();
    toasts.enqueue("gone", -10);
    assert!(toasts.visible().is_empty());
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn entries_render_oldest_first() {
    let (clock, toasts) = controller();
    toasts.enqueue("one", 10_000);
    clock.advance(10);
    toasts.enqueue("two", 10_000);
    clock.advance(10);
    toasts.enqueue("three", 10_000);
    assert_eq!(messages(&toasts.visible()), vec!["one", "two", "three"]);
}

#[test]
fn expiry_of_middle_entry_keeps_relative_order() {
    let (clock, toasts) = controller();
    let a = toasts.enqueue("a", 1_000);
    let b = toasts.enqueue("b", 100);
    let c = toasts.enqueue("c", 1_000);

    clock.advance(200);
    assert_eq!(toasts.expire(), vec![b]);

    let ids: Vec<ToastId> = toasts.visible().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn ttl_measured_from_enqueue_not_position() {
    let (clock, toasts) = controller();
    toasts.enqueue("first", 300);
    clock.advance(200);
    toasts.enqueue("second", 300);

    clock.advance(150);
    assert_eq!(toasts.expire().len(), 1);
    assert_eq!(messages(&toasts.visible()), vec!["second"]);

    clock.advance(200);
    assert_eq!(toasts.expire().len(), 1);
    assert!(toasts.visible().is_empty());
}

// =============================================================
// dismiss / deadlines / notifications
// =============================================================

#[test]
fn dismiss_removes_entry_and_unknown_id_is_noop() {
    let (_clock, toasts) = controller();
    let id = toasts.enqueue("bye", 5_000);
    toasts.dismiss(ToastId(999));
    assert_eq!(toasts.visible().len(), 1);
    toasts.dismiss(id);
    assert!(toasts.visible().is_empty());
    toasts.dismiss(id);
}

#[test]
fn next_deadline_tracks_earliest_expiry() {
    let (_clock, toasts) = controller();
    assert_eq!(toasts.next_deadline_ms(), None);
    toasts.enqueue("long", 5_000);
    toasts.enqueue("short", 200);
    assert_eq!(toasts.next_deadline_ms(), Some(1_200));
}

#[test]
fn listeners_see_queue_after_each_change() {
    let (clock, toasts) = controller();
    let hits = Arc::new(AtomicUsize::new(0));
    let last_len = Arc::new(AtomicUsize::new(usize::MAX));
    let _sub = {
        let hits = Arc::clone(&hits);
        let last_len = Arc::clone(&last_len);
        toasts.subscribe(move |queue| {
            hits.fetch_add(1, Ordering::SeqCst);
            last_len.store(queue.len(), Ordering::SeqCst);
        })
    };

    let id = toasts.enqueue("x", 100);
    assert_eq!(last_len.load(Ordering::SeqCst), 1);
    toasts.dismiss(ToastId(42));
    toasts.dismiss(id);
    assert_eq!(last_len.load(Ordering::SeqCst), 0);

    toasts.enqueue("y", 100);
    clock.advance(100);
    toasts.expire();
    toasts.expire();
    assert_eq!(hits.load(Ordering::SeqCst), 4);
    assert_eq!(last_len.load(Ordering::SeqCst), 0);
}

#[test]
fn toast_kind_strings() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
    assert_eq!(ToastKind::Success.as_str(), "success");
    assert_eq!(ToastKind::Error.as_str(), "error");
}
