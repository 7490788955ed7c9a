//! Settle detection
//!
//! Every raw scroll notification restarts a quiet window. When the window
//! expires without further scrolling, the scroll position is considered
//! settled and the engine commits the index under the viewport.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::timer::Debounce;

#[derive(Debug, Clone)]
pub struct SettleDetector {
    timer: Debounce,
}

impl SettleDetector {
    pub fn new(delay: Duration) -> Self {
        Self {
            timer: Debounce::new(delay),
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.timer.set_delay(delay);
    }

    /// Record a scroll notification at `now`.
    pub fn notify_scroll(&mut self, now: Instant) {
        let restarted = self.timer.is_pending();
        self.timer.schedule(now);
        trace!(restarted, "settle window armed");
    }

    /// Drop any pending settle (drag start, reconfiguration).
    pub fn cancel(&mut self) -> bool {
        self.timer.cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// True exactly once per quiet window, when it has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.timer.fire(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_scrolls_settles_once() {
        let t0 = Instant::now();
        let mut detector = SettleDetector::new(Duration::from_millis(75));
        for ms in [0u64, 16, 32, 48] {
            detector.notify_scroll(t0 + Duration::from_millis(ms));
            assert!(!detector.poll(t0 + Duration::from_millis(ms + 1)));
        }

        assert!(!detector.poll(t0 + Duration::from_millis(100)));
        assert!(detector.poll(t0 + Duration::from_millis(123)));
        assert!(!detector.poll(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn cancel_prevents_stale_settle() {
        let t0 = Instant::now();
        let mut detector = SettleDetector::new(Duration::from_millis(75));
        detector.notify_scroll(t0);
        assert!(detector.cancel());
        assert!(!detector.poll(t0 + Duration::from_secs(1)));
    }
}
