//! ADS rate-limit header tracking.
//!
//! Every API response carries `x-ratelimit-*` headers describing the
//! remaining request quota. The tracker records the most recent set so the
//! CLI can report them after a run. It never throttles or sleeps; respecting
//! the quota is up to the caller.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// The rate-limit headers from the most recent API response, as raw strings.
#[derive(Debug, Clone, Default)]
pub struct RateLimitSnapshot {
    pub remaining: Option<String>,
    pub limit: Option<String>,
    pub reset: Option<String>,
}

impl RateLimitSnapshot {
    /// The reset time as a UTC timestamp. A missing or malformed reset
    /// header falls back to the Unix epoch.
    pub fn reset_utc(&self) -> DateTime<Utc> {
        let secs = self
            .reset
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(0);
        Utc.timestamp_opt(secs, 0)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// The reset time formatted in ctime style, e.g. `Thu Jan  1 00:00:00 1970`.
    pub fn reset_time_string(&self) -> String {
        self.reset_utc().format("%a %b %e %H:%M:%S %Y").to_string()
    }
}

/// Shared tracker updated by the client after each request.
#[derive(Debug, Clone, Default)]
pub struct RateLimitTracker {
    inner: Arc<Mutex<RateLimitSnapshot>>,
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rate-limit headers from an API response. Headers that are
    /// absent leave the previous value untouched.
    pub fn update_from_headers(&self, headers: &reqwest::header::HeaderMap) {
        let header_value = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };

        let mut snapshot = self.lock();
        if let Some(value) = header_value("x-ratelimit-remaining") {
            snapshot.remaining = Some(value);
        }
        if let Some(value) = header_value("x-ratelimit-limit") {
            snapshot.limit = Some(value);
        }
        if let Some(value) = header_value("x-ratelimit-reset") {
            snapshot.reset = Some(value);
        }
    }

    /// The most recent snapshot.
    pub fn snapshot(&self) -> RateLimitSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RateLimitSnapshot> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    fn headers(remaining: &str, limit: &str, reset: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert("x-ratelimit-remaining", HeaderValue::from_str(remaining).unwrap());
        map.insert("x-ratelimit-limit", HeaderValue::from_str(limit).unwrap());
        map.insert("x-ratelimit-reset", HeaderValue::from_str(reset).unwrap());
        map
    }

    #[test]
    fn test_update_from_headers() {
        let tracker = RateLimitTracker::new();
        tracker.update_from_headers(&headers("4998", "5000", "1664897520"));

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.remaining.as_deref(), Some("4998"));
        assert_eq!(snapshot.limit.as_deref(), Some("5000"));
        assert_eq!(snapshot.reset.as_deref(), Some("1664897520"));
    }

    #[test]
    fn test_absent_headers_keep_previous_values() {
        let tracker = RateLimitTracker::new();
        tracker.update_from_headers(&headers("10", "5000", "1664897520"));
        tracker.update_from_headers(&HeaderMap::new());

        assert_eq!(tracker.snapshot().remaining.as_deref(), Some("10"));
    }

    #[test]
    fn test_reset_utc() {
        let snapshot = RateLimitSnapshot {
            reset: Some("1664897520".to_string()),
            ..RateLimitSnapshot::default()
        };
        assert_eq!(snapshot.reset_utc().timestamp(), 1664897520);
    }

    #[test]
    fn test_malformed_reset_falls_back_to_epoch() {
        let snapshot = RateLimitSnapshot {
            reset: Some("not-a-number".to_string()),
            ..RateLimitSnapshot::default()
        };
        assert_eq!(snapshot.reset_utc(), DateTime::UNIX_EPOCH);
        assert_eq!(snapshot.reset_time_string(), "Thu Jan  1 00:00:00 1970");
    }

    #[test]
    fn test_missing_reset_falls_back_to_epoch() {
        let snapshot = RateLimitSnapshot::default();
        assert_eq!(snapshot.reset_utc(), DateTime::UNIX_EPOCH);
    }
}
