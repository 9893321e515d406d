use crate::{EntropySource, Result, Sampler, TimeSource};
use tracing::instrument;

/// Default length of a numeric short id: a 13-digit millisecond timestamp
/// followed by six random digits.
pub const DEFAULT_NUMERIC_ID_LEN: usize = 19;

/// Generates time-prefixed decimal identifiers.
///
/// An id is the current Unix-millisecond timestamp in decimal, followed by
/// random decimal digits, cut to the requested length. Ids of the default
/// length sort by generation millisecond.
#[derive(Default, Clone, Copy, Debug)]
pub struct NumericIdGenerator<T, R> {
    time: T,
    sampler: Sampler<R>,
}

impl<T, R> NumericIdGenerator<T, R>
where
    T: TimeSource,
    R: EntropySource,
{
    pub const fn new(time: T, rng: R) -> Self {
        Self {
            time,
            sampler: Sampler::new(rng),
        }
    }

    /// Returns an id of exactly `length` ASCII digits. A zero length yields
    /// the empty string.
    ///
    /// # Errors
    ///
    /// - [`Error::EntropyExhausted`] if a random digit could not be drawn.
    ///
    /// [`Error::EntropyExhausted`]: crate::Error::EntropyExhausted
    #[instrument(level = "trace", skip(self))]
    pub fn generate(&self, length: usize) -> Result<String> {
        let mut id = self.time.current_millis().to_string();
        id.truncate(length);
        while id.len() < length {
            let digit = self.sampler.uniform_index(10)? as u8;
            id.push(char::from(b'0' + digit));
        }
        Ok(id)
    }
}
