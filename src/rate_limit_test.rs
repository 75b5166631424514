use std::net::{Ipv4Addr, Ipv6Addr};

use super::*;

fn client(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(203, 0, 113, last))
}

fn limiter(per_client: usize, global: usize) -> RateLimiter {
    RateLimiter::new(RateLimitConfig {
        per_client_limit: per_client,
        per_client_window: Duration::from_secs(60),
        global_limit: global,
        global_window: Duration::from_secs(60),
    })
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter(3, 100);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(client(1), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(client(1), now),
        Err(RateLimitError::PerClientExceeded { limit: 3, window_secs: 60 })
    );
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(100, 4);
    let now = Instant::now();

    // Distinct clients so the per-client limit never trips first.
    for i in 0..4 {
        assert!(rl.check_and_record_at(client(i), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(client(99), now),
        Err(RateLimitError::GlobalExceeded { limit: 4, window_secs: 60 })
    );
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(2, 100);
    let start = Instant::now();

    for _ in 0..2 {
        rl.check_and_record_at(client(1), start).unwrap();
    }
    assert!(rl.check_and_record_at(client(1), start).is_err());

    let after_window = start + Duration::from_secs(60) + Duration::from_millis(1);
    assert!(rl.check_and_record_at(client(1), after_window).is_ok());
}

#[test]
fn distinct_clients_do_not_interfere() {
    let rl = limiter(1, 100);
    let now = Instant::now();

    rl.check_and_record_at(client(1), now).unwrap();
    assert!(rl.check_and_record_at(client(1), now).is_err());
    assert!(rl.check_and_record_at(client(2), now).is_ok());
    assert!(rl.check_and_record_at(IpAddr::V6(Ipv6Addr::LOCALHOST), now).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter(1, 2);
    let start = Instant::now();

    rl.check_and_record_at(client(1), start).unwrap();
    for _ in 0..5 {
        assert!(rl.check_and_record_at(client(1), start).is_err());
    }
    // Only one global slot is used, so another client still fits.
    assert!(rl.check_and_record_at(client(2), start).is_ok());
}

#[test]
fn prune_idle_drops_expired_clients() {
    let rl = limiter(5, 100);
    let start = Instant::now();

    rl.check_and_record_at(client(1), start).unwrap();
    rl.check_and_record_at(client(2), start + Duration::from_secs(30)).unwrap();
    assert_eq!(rl.tracked_clients(), 2);

    rl.prune_idle_at(start + Duration::from_secs(61));
    assert_eq!(rl.tracked_clients(), 1);
}

#[test]
fn error_messages_name_the_limit() {
    let err = RateLimitError::PerClientExceeded { limit: 5, window_secs: 600 };
    assert_eq!(err.to_string(), "per-client rate limit exceeded (max 5 requests/600s)");
}

#[test]
fn default_config_matches_documented_limits() {
    let cfg = RateLimitConfig::default();
    assert_eq!(cfg.per_client_limit, 5);
    assert_eq!(cfg.per_client_window, Duration::from_secs(600));
    assert_eq!(cfg.global_limit, 50);
    assert_eq!(cfg.global_window, Duration::from_secs(3600));
}
