//! Monotonic time sources.
//!
//! Times are offsets from an arbitrary origin (page load in the browser).
//! `std::time::Instant` is unavailable on `wasm32-unknown-unknown`, so the
//! browser reads `performance.now()` instead.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A monotonic clock.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Manually advanced clock for deterministic tests and simulations.
///
/// Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: Rc<Cell<Duration>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// `performance.now()` of the current window.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct PerformanceClock;

#[cfg(target_arch = "wasm32")]
impl Clock for PerformanceClock {
    fn now(&self) -> Duration {
        let millis = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now);
        Duration::from_secs_f64(millis.max(0.0) / 1000.0)
    }
}

/// Clock anchored at its creation, for native hosts.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_clock_advances() {
        let clock = VirtualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);

        clock.advance_ms(2500);
        assert_eq!(clock.now(), Duration::from_millis(2500));
    }

    #[test]
    fn test_virtual_clock_clones_share_time() {
        let clock = VirtualClock::new();
        let other = clock.clone();
        other.advance_ms(160);
        assert_eq!(clock.now(), Duration::from_millis(160));

        clock.set(Duration::from_secs(1));
        assert_eq!(other.now(), Duration::from_secs(1));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::default();
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
