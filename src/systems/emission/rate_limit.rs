use std::collections::HashMap;

/// Minimum wall-clock gap between emissions, tracked per feature id
pub struct RateLimiter {
    min_interval_ms: f64,
    last_emit_ms: HashMap<u32, f64>,
}

impl RateLimiter {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_emit_ms: HashMap::new(),
        }
    }

    /// A feature that never emitted is always ready
    pub fn ready(&self, feature_id: u32, now_ms: f64) -> bool {
        match self.last_emit_ms.get(&feature_id) {
            None => true,
            Some(&last) => now_ms - last > self.min_interval_ms,
        }
    }

    pub fn record(&mut self, feature_id: u32, now_ms: f64) {
        self.last_emit_ms.insert(feature_id, now_ms);
    }

    pub fn last_emit_ms(&self, feature_id: u32) -> Option<f64> {
        self.last_emit_ms.get(&feature_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_must_be_strictly_exceeded() {
        let mut limiter = RateLimiter::new(10.0);
        assert!(limiter.ready(0, 0.0));
        limiter.record(0, 100.0);
        assert!(!limiter.ready(0, 105.0));
        assert!(!limiter.ready(0, 110.0));
        assert!(limiter.ready(0, 110.5));
    }

    #[test]
    fn features_are_limited_independently() {
        let mut limiter = RateLimiter::new(10.0);
        limiter.record(0, 100.0);
        assert!(!limiter.ready(0, 101.0));
        assert!(limiter.ready(1, 101.0));
        assert_eq!(limiter.last_emit_ms(0), Some(100.0));
        assert_eq!(limiter.last_emit_ms(1), None);
    }
}
