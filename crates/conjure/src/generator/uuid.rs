use crate::{EntropySource, NANOS_PER_MILLI, TimeSource, Uuid};
use tracing::instrument;

/// Generates version 4 and version 7 UUIDs from injected capabilities.
///
/// The generator is stateless beyond its two sources: every call reads the
/// clock and draws fresh bytes, so it can be shared freely across threads
/// whenever `T` and `R` can.
///
/// # Example
/// ```
/// use conjure::{MonotonicClock, SystemRandom, UuidGenerator};
///
/// let generator = UuidGenerator::new(MonotonicClock::default(), SystemRandom::default());
///
/// let a = generator.v7();
/// let b = generator.v7();
/// assert_eq!(a.version(), 7);
/// assert!(b.timestamp() >= a.timestamp());
/// ```
#[derive(Default, Clone, Copy, Debug)]
pub struct UuidGenerator<T, R> {
    time: T,
    rng: R,
}

impl<T, R> UuidGenerator<T, R>
where
    T: TimeSource,
    R: EntropySource,
{
    /// Creates a new [`UuidGenerator`] with the provided time source and
    /// entropy source.
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Returns a random UUID: 122 random bits plus the version and variant.
    #[instrument(level = "trace", skip(self))]
    pub fn v4(&self) -> Uuid {
        let mut bytes = [0_u8; 16];
        self.rng.fill(&mut bytes);
        Uuid::from_bytes(bytes)
            .with_version(4)
            .with_rfc4122_variant()
    }

    /// Returns a time-ordered UUID.
    ///
    /// A single clock reading provides both the millisecond timestamp and the
    /// 12-bit sub-millisecond fraction, so identifiers from one monotonic
    /// clock sort in generation order down to 1/4096 ms. The low 62 bits are
    /// random.
    #[instrument(level = "trace", skip(self))]
    pub fn v7(&self) -> Uuid {
        let nanos = self.time.current_nanos();
        let millis = (nanos / NANOS_PER_MILLI) as u64;
        let fraction = sub_millisecond_fraction(nanos);

        let mut random = [0_u8; 8];
        self.rng.fill(&mut random);
        Uuid::from_v7_parts(millis, fraction, u64::from_be_bytes(random))
    }
}

/// Scales the nanoseconds within the current millisecond into
/// [`FRACTION_TICKS`] ticks.
///
/// [`FRACTION_TICKS`]: crate::FRACTION_TICKS
pub fn sub_millisecond_fraction(nanos: u128) -> u16 {
    let within = nanos % NANOS_PER_MILLI;
    (within * u128::from(crate::FRACTION_TICKS) / NANOS_PER_MILLI) as u16
}
