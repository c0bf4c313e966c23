use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[test]
fn notify_reaches_every_listener_in_order() {
    let listeners = Listeners::<u32>::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let a = {
        let seen = Arc::clone(&seen);
        listeners.subscribe(move |v| seen.lock().unwrap().push(("a", *v)))
    };
    let b = {
        let seen = Arc::clone(&seen);
        listeners.subscribe(move |v| seen.lock().unwrap().push(("b", *v)))
    };

    listeners.notify(&7);
    assert_eq!(*seen.lock().unwrap(), vec![("a", 7), ("b", 7)]);
    drop((a, b));
}

#[test]
fn dropping_subscription_unsubscribes() {
    let listeners = Listeners::<()>::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let sub = {
        let hits = Arc::clone(&hits);
        listeners.subscribe(move |()| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };

    listeners.notify(&());
    drop(sub);
    listeners.notify(&());

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(listeners.len(), 0);
}

#[test]
fn detached_subscription_stays_registered() {
    let listeners = Listeners::<()>::new();
    let hits = Arc::new(AtomicUsize::new(0));
    {
        let hits = Arc::clone(&hits);
        listeners
            .subscribe(move |()| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
            .detach();
    }

    listeners.notify(&());
    listeners.notify(&());
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn subscription_outliving_registry_drops_cleanly() {
    let listeners = Listeners::<()>::new();
    let sub = listeners.subscribe(|()| {});
    drop(listeners);
    drop(sub);
}

#[test]
fn clear_removes_all_listeners() {
    let listeners = Listeners::<()>::new();
    let _a = listeners.subscribe(|()| {});
    let _b = listeners.subscribe(|()| {});
    assert_eq!(listeners.len(), 2);
    listeners.clear();
    assert_eq!(listeners.len(), 0);
}
