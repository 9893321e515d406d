use super::{Instant, SystemTime, system::since_unix_epoch};
use crate::TimeSource;
use core::time::Duration;

/// A monotonic time source that reports Unix-epoch time with nanosecond
/// resolution.
///
/// This avoids wall-clock adjustments (e.g., NTP or daylight savings changes)
/// while still aligning timestamps to the Unix epoch.
///
/// Internally, the clock captures `Instant::now()` and `SystemTime::now()` once
/// at construction. Every reading is the captured wall-clock offset plus the
/// monotonic time elapsed since construction, so readings from one clock (and
/// its copies) never go backward, even if the system clock is adjusted
/// externally. The price is drift: a long-lived clock does not follow
/// corrections applied to the system clock after it was created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
    epoch_offset: Duration,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Anchors a new clock to the current wall-clock time.
    ///
    /// A system clock set before 1970 anchors the clock at the Unix epoch.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use conjure::{MonotonicClock, TimeSource};
    ///
    /// let clock = MonotonicClock::new();
    /// let before = clock.current_nanos();
    ///
    /// std::thread::sleep(Duration::from_millis(5));
    ///
    /// let after = clock.current_nanos();
    /// assert!(after - before >= 5_000_000);
    /// ```
    pub fn new() -> Self {
        let start = Instant::now();
        let epoch_offset = since_unix_epoch(SystemTime::now());
        Self {
            start,
            epoch_offset,
        }
    }
}

impl TimeSource for MonotonicClock {
    /// Returns the anchored wall-clock offset plus the monotonic time elapsed
    /// since construction.
    fn current_nanos(&self) -> u128 {
        (self.epoch_offset + self.start.elapsed()).as_nanos()
    }
}
