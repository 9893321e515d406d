use crate::NANOS_PER_MILLI;

/// A trait for time sources that report wall-clock time relative to the Unix
/// epoch.
///
/// This abstraction allows you to plug in a real system clock, a monotonic
/// timer, or a mocked time source in tests. Only [`current_nanos`] is
/// required; the millisecond reading is derived from it so both views of the
/// same instant always agree.
///
/// # Example
///
/// ```
/// use conjure::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_nanos(&self) -> u128 {
///         1_234_567_890
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
///
/// [`current_nanos`]: TimeSource::current_nanos
pub trait TimeSource {
    /// Returns the current time in nanoseconds since the Unix epoch.
    fn current_nanos(&self) -> u128;

    /// Returns the current time in whole milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64 {
        (self.current_nanos() / NANOS_PER_MILLI) as u64
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_nanos(&self) -> u128 {
        (**self).current_nanos()
    }
}
