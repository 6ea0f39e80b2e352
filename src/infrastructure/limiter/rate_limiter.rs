use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::{task::JoinHandle, time::sleep};

/// A token bucket which allows fractional tokens for precise refill
#[derive(Debug)]
struct TokenBucket {
    capacity: f64,
    tokens: f64,
    refill_per_sec: f64,
    last_refill: Instant,
    last_seen: Instant,
}

impl TokenBucket {
    fn new(capacity: f64, refill_per_sec: f64) -> Self {
        let now = Instant::now();
        Self {
            capacity,
            tokens: capacity,
            refill_per_sec,
            last_refill: now,
            last_seen: now,
        }
    }

    fn refill(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        if elapsed > 0.0 {
            self.tokens = (self.tokens + elapsed * self.refill_per_sec).min(self.capacity);
            self.last_refill = now;
        }
    }

    /// Takes one token, or returns the whole seconds until one is available.
    fn try_acquire(&mut self) -> Result<(), u64> {
        let now = Instant::now();
        self.last_seen = now;
        self.refill(now);

        // Small epsilon to avoid fp surprises
        if self.tokens + 1e-12 >= 1.0 {
            self.tokens -= 1.0;
            Ok(())
        } else {
            let missing = 1.0 - self.tokens;
            Err(((missing / self.refill_per_sec).ceil() as u64).max(1))
        }
    }
}

type Key = String;

/// Per-client token buckets for public submission endpoints.
#[derive(Clone)]
pub struct RateLimiterStore {
    map: Arc<DashMap<Key, Arc<Mutex<TokenBucket>>>>,
    capacity: f64,
    refill_per_sec: f64,
}

impl RateLimiterStore {
    /// `burst` requests are allowed at once; one more becomes available
    /// every `refill_every`.
    pub fn new(burst: u32, refill_every: Duration) -> Self {
        let refill_secs = refill_every.as_secs_f64().max(f64::EPSILON);
        Self {
            map: Arc::new(DashMap::new()),
            capacity: f64::from(burst.max(1)),
            refill_per_sec: 1.0 / refill_secs,
        }
    }

    fn get_bucket(&self, key: &str) -> Arc<Mutex<TokenBucket>> {
        if let Some(existing) = self.map.get(key) {
            return existing.clone();
        }

        self.map
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(TokenBucket::new(self.capacity, self.refill_per_sec))))
            .clone()
    }

    /// `Err(retry_after_secs)` when `key` has exhausted its bucket.
    pub fn check(&self, key: &str) -> Result<(), u64> {
        let bucket = self.get_bucket(key);
        let mut bucket = bucket.lock();
        bucket.try_acquire()
    }

    /// Drops buckets idle for longer than `ttl`, checking every `interval`.
    /// Must be called from within a tokio runtime.
    pub fn spawn_eviction(&self, interval: Duration, ttl: Duration) -> JoinHandle<()> {
        let map = self.map.clone();
        tokio::spawn(async move {
            loop {
                sleep(interval).await;
                let now = Instant::now();
                let before = map.len();
                map.retain(|_, bucket| now.duration_since(bucket.lock().last_seen) <= ttl);
                let evicted = before.saturating_sub(map.len());
                if evicted > 0 {
                    tracing::debug!(evicted, "Evicted idle rate limit buckets");
                }
            }
        })
    }

    pub fn tracked_clients(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_is_allowed_then_limited() {
        let store = RateLimiterStore::new(3, Duration::from_secs(60));

        for _ in 0..3 {
            assert!(store.check("10.0.0.1").is_ok());
        }

        let retry_after = store.check("10.0.0.1").unwrap_err();
        assert!(retry_after >= 1 && retry_after <= 60);
    }

    #[test]
    fn clients_are_limited_independently() {
        let store = RateLimiterStore::new(1, Duration::from_secs(60));

        assert!(store.check("a").is_ok());
        assert!(store.check("a").is_err());
        assert!(store.check("b").is_ok());
        assert_eq!(store.tracked_clients(), 2);
    }

    #[tokio::test]
    async fn idle_buckets_are_evicted() {
        let store = RateLimiterStore::new(1, Duration::from_secs(60));
        store.check("a").unwrap();

        let handle = store.spawn_eviction(Duration::from_millis(10), Duration::ZERO);
        sleep(Duration::from_millis(50)).await;
        handle.abort();

        assert_eq!(store.tracked_clients(), 0);
    }
}
