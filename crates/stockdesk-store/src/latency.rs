//! # Simulated Latency
//!
//! The stores emulate backend calls with an artificial delay drawn from a
//! fixed window. The delay is cosmetic: it affects timing, never
//! correctness, and it is injectable so test suites run with zero delay.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Latency Configuration                             │
//! │                                                                     │
//! │  Production profile          Test profile                           │
//! │  ──────────────────          ────────────                           │
//! │  load:  500..1000 ms         load:  0                               │
//! │  fetch: 300..600 ms          fetch: 0                               │
//! │                                                                     │
//! │  Latency::wait() samples a uniform point in the window and sleeps.  │
//! │  A zero window returns immediately without touching the timer.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use rand::Rng;

// =============================================================================
// Latency Window
// =============================================================================

/// A half-open delay window `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    min: Duration,
    max: Duration,
}

impl Latency {
    /// Creates a window. `max` below `min` is clamped up to `min`.
    pub fn new(min: Duration, max: Duration) -> Self {
        Latency {
            min,
            max: max.max(min),
        }
    }

    /// A fixed (jitter-free) delay.
    pub fn fixed(delay: Duration) -> Self {
        Latency::new(delay, delay)
    }

    /// No delay at all. Use this in tests.
    pub const fn none() -> Self {
        Latency {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.max.is_zero()
    }

    /// Draws a delay uniformly from the window.
    fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..self.max)
    }

    /// Sleeps for a sampled delay. A zero window skips the timer entirely,
    /// so zero-latency tests never depend on the tokio clock.
    pub async fn wait(&self) {
        if self.is_zero() {
            return;
        }
        tokio::time::sleep(self.sample()).await;
    }
}

// =============================================================================
// Store Profile
// =============================================================================

/// Per-operation latency profile for [`crate::ProductStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLatency {
    /// Applied by `load()` (bulk fetch).
    pub load: Latency,

    /// Applied by `get()` (single-record fetch).
    pub fetch: Latency,
}

impl StoreLatency {
    /// Zero-delay profile for deterministic tests.
    pub const fn none() -> Self {
        StoreLatency {
            load: Latency::none(),
            fetch: Latency::none(),
        }
    }
}

impl Default for StoreLatency {
    /// The windows the original interface shipped with: 500-1000 ms for the
    /// bulk load, 300-600 ms for a single fetch.
    fn default() -> Self {
        StoreLatency {
            load: Latency::new(Duration::from_millis(500), Duration::from_millis(1000)),
            fetch: Latency::new(Duration::from_millis(300), Duration::from_millis(600)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stays_in_window() {
        let latency = Latency::new(Duration::from_millis(300), Duration::from_millis(600));
        for _ in 0..100 {
            let d = latency.sample();
            assert!(d >= Duration::from_millis(300));
            assert!(d < Duration::from_millis(600));
        }
    }

    #[test]
    fn test_fixed_window_samples_itself() {
        let latency = Latency::fixed(Duration::from_millis(50));
        assert_eq!(latency.sample(), Duration::from_millis(50));
    }

    #[test]
    fn test_inverted_window_is_clamped() {
        let latency = Latency::new(Duration::from_millis(100), Duration::from_millis(10));
        assert_eq!(latency.sample(), Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_zero_latency_returns_immediately() {
        let start = std::time::Instant::now();
        Latency::none().wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_default_profile_windows() {
        let profile = StoreLatency::default();
        assert!(!profile.load.is_zero());
        assert!(!profile.fetch.is_zero());
        assert!(StoreLatency::none().load.is_zero());
    }
}
