//! Per-client rate limiting for the contact endpoint.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Sliding-window rate limiter keyed by client identifier.
///
/// Tracks the epoch-millisecond timestamps of recent attempts per client.
/// State lives in memory only: it resets on restart and does not extend
/// across multiple server instances, which is acceptable for a
/// single-process deployment.
pub struct RateLimiter {
    window_ms: u64,
    max_requests: usize,
    attempts: Mutex<HashMap<String, Vec<u64>>>,
}

impl RateLimiter {
    /// Create a limiter allowing `max_requests` per `window_ms` per client.
    pub fn new(window_ms: u64, max_requests: usize) -> Self {
        Self {
            window_ms,
            max_requests,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Check whether `client_id` may proceed, recording the attempt if so.
    ///
    /// Returns `false` when the client already has `max_requests` attempts
    /// inside the trailing window. Denied attempts are not recorded.
    pub fn check_and_record(&self, client_id: &str) -> bool {
        self.check_at(client_id, epoch_ms())
    }

    fn check_at(&self, client_id: &str, now_ms: u64) -> bool {
        let mut attempts = self.attempts.lock().expect("rate limiter mutex poisoned");

        // Lazy sweep: prune expired timestamps everywhere and drop clients
        // left with none, so the map stays bounded across many distinct
        // clients without a background timer.
        attempts.retain(|_, timestamps| {
            timestamps.retain(|&ts| now_ms.saturating_sub(ts) < self.window_ms);
            !timestamps.is_empty()
        });

        let timestamps = attempts.entry(client_id.to_string()).or_default();
        if timestamps.len() >= self.max_requests {
            return false;
        }

        timestamps.push(now_ms);
        true
    }
}

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: u64 = 60 * 60 * 1000;

    #[test]
    fn allows_up_to_limit_then_denies() {
        let limiter = RateLimiter::new(HOUR_MS, 5);
        for i in 0..5 {
            assert!(limiter.check_at("1.2.3.4", 1_000 + i), "attempt {i}");
        }
        assert!(!limiter.check_at("1.2.3.4", 1_010));
    }

    #[test]
    fn denied_attempts_are_not_recorded() {
        let limiter = RateLimiter::new(HOUR_MS, 1);
        assert!(limiter.check_at("c", 0));
        // Repeated denials must not extend the window.
        assert!(!limiter.check_at("c", 100));
        assert!(!limiter.check_at("c", 200));
        assert!(limiter.check_at("c", HOUR_MS));
    }

    #[test]
    fn window_resets_after_expiry() {
        let limiter = RateLimiter::new(HOUR_MS, 5);
        for i in 0..5 {
            assert!(limiter.check_at("1.2.3.4", i));
        }
        assert!(!limiter.check_at("1.2.3.4", HOUR_MS - 1));
        assert!(limiter.check_at("1.2.3.4", HOUR_MS + 4));
    }

    #[test]
    fn clients_are_independent() {
        let limiter = RateLimiter::new(HOUR_MS, 1);
        assert!(limiter.check_at("a", 0));
        assert!(limiter.check_at("b", 0));
        assert!(!limiter.check_at("a", 1));
    }

    #[test]
    fn sweep_drops_idle_clients() {
        let limiter = RateLimiter::new(HOUR_MS, 5);
        for i in 0..100 {
            assert!(limiter.check_at(&format!("client-{i}"), 0));
        }
        // A single call from anyone after the window sweeps the whole map.
        assert!(limiter.check_at("fresh", HOUR_MS + 1));
        let attempts = limiter.attempts.lock().unwrap();
        assert_eq!(attempts.len(), 1);
        assert!(attempts.contains_key("fresh"));
    }
}
