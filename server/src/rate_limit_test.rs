use super::*;

#[test]
fn per_client_allows_up_to_limit() {
    let rl = RateLimiter::default();
    let now = Instant::now();

    for i in 0..DEFAULT_PER_CLIENT_LIMIT {
        assert!(rl.check_and_record_at("10.0.0.1", now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("10.0.0.1", now),
        Err(RateLimitError::PerClientExceeded { limit: DEFAULT_PER_CLIENT_LIMIT, .. })
    ));
}

#[test]
fn global_allows_up_to_limit() {
    let rl = RateLimiter::default();
    let now = Instant::now();

    // Distinct clients so the per-client limit never trips first.
    for i in 0..DEFAULT_GLOBAL_LIMIT {
        let client = format!("10.0.1.{i}");
        assert!(rl.check_and_record_at(&client, now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("10.0.2.1", now),
        Err(RateLimitError::GlobalExceeded { .. })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = RateLimiter::default();
    let start = Instant::now();

    for _ in 0..DEFAULT_PER_CLIENT_LIMIT {
        rl.check_and_record_at("10.0.0.1", start).unwrap();
    }
    assert!(rl.check_and_record_at("10.0.0.1", start).is_err());

    let after_window = start + DEFAULT_WINDOW + Duration::from_millis(1);
    assert!(rl.check_and_record_at("10.0.0.1", after_window).is_ok());
}

#[test]
fn distinct_clients_do_not_interfere() {
    let rl = RateLimiter::default();
    let now = Instant::now();

    for _ in 0..DEFAULT_PER_CLIENT_LIMIT {
        rl.check_and_record_at("10.0.0.1", now).unwrap();
    }
    assert!(rl.check_and_record_at("10.0.0.1", now).is_err());
    assert!(rl.check_and_record_at("10.0.0.2", now).is_ok());
}

#[test]
fn rejected_request_is_not_recorded() {
    let rl = RateLimiter::new(RateLimitConfig { per_client_limit: 1, global_limit: 2, window: DEFAULT_WINDOW });
    let now = Instant::now();

    rl.check_and_record_at("a", now).unwrap();
    assert!(rl.check_and_record_at("a", now).is_err());
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn sweep_forgets_idle_clients() {
    let rl = RateLimiter::new(RateLimitConfig { per_client_limit: 5, global_limit: 5, window: Duration::ZERO });
    let past = Instant::now().checked_sub(Duration::from_millis(5)).unwrap_or_else(Instant::now);
    rl.check_and_record_at("a", past).unwrap();
    assert_eq!(rl.tracked_clients(), 1);

    std::thread::sleep(Duration::from_millis(2));
    rl.sweep();
    assert_eq!(rl.tracked_clients(), 0);
}
