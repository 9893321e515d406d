use crate::{EntropySource, Error, Result, Sampler};

/// Longest decimal number that always fits a `u64`.
pub const MAX_NUMBER_DIGITS: u32 = 19;

impl<R> Sampler<R>
where
    R: EntropySource,
{
    /// Returns a random number with exactly `digits` decimal digits, uniform
    /// over `[10^(digits-1), 10^digits - 1]`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] if `digits` is zero or above
    ///   [`MAX_NUMBER_DIGITS`].
    /// - [`Error::EntropyExhausted`] if every allowed draw was rejected.
    ///
    /// # Example
    /// ```
    /// use conjure::{Sampler, ThreadRandom};
    ///
    /// let pin = Sampler::new(ThreadRandom).number(4).unwrap();
    /// assert_eq!(pin.to_string().len(), 4);
    /// ```
    pub fn number(&self, digits: u32) -> Result<u64> {
        if digits == 0 || digits > MAX_NUMBER_DIGITS {
            return Err(Error::InvalidRange {
                reason: "digits must be between 1 and 19",
            });
        }
        let lo = 10_u64.pow(digits - 1);
        let hi = 10_u64.pow(digits) - 1;
        self.uniform_u64_inclusive(lo, hi)
    }
}
