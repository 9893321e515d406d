use super::{SystemTime, UNIX_EPOCH};
use crate::TimeSource;
use core::time::Duration;

/// A time source that reads the system wall clock on every call.
///
/// Readings follow every adjustment made to the system clock (NTP slews,
/// manual changes), so consecutive readings may go backward. Prefer
/// [`MonotonicClock`] when ordering matters.
///
/// [`MonotonicClock`]: crate::MonotonicClock
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_nanos(&self) -> u128 {
        since_unix_epoch(SystemTime::now()).as_nanos()
    }
}

/// Saturates to zero for clocks set before 1970.
pub(crate) fn since_unix_epoch(now: SystemTime) -> Duration {
    now.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO)
}
