use crate::{EntropySource, Error, Result};
use tracing::instrument;

/// Upper bound on rejected draws before sampling gives up.
///
/// Every draw is accepted with probability of at least one half, so a healthy
/// source exhausts this budget with probability at most 2^-128.
pub const MAX_DRAWS: u32 = 128;

/// Widest sample accumulated from the entropy source, in bytes.
pub const MAX_SAMPLE_BYTES: usize = 8;

/// Draws unbiased integers from bounded ranges.
///
/// Samples are built from as few bytes as cover the range (one byte for
/// ranges up to 256, two up to 65 536, and so on up to eight), interpreted
/// big-endian. A sample is only reduced modulo the range when it falls below
/// the largest multiple of the range that fits the sample space; otherwise it
/// is discarded and redrawn. This removes the modulo bias a plain
/// `sample % max` would carry.
///
/// The sampler holds nothing but its entropy source, so it is as cheap to copy
/// and as thread-safe as that source.
///
/// # Example
/// ```
/// use conjure::{Sampler, ThreadRandom};
///
/// let sampler = Sampler::new(ThreadRandom);
/// let die = sampler.uniform_between(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// ```
#[derive(Default, Clone, Copy, Debug)]
pub struct Sampler<R> {
    rng: R,
}

impl<R> Sampler<R>
where
    R: EntropySource,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the underlying entropy source.
    pub const fn source(&self) -> &R {
        &self.rng
    }

    /// Returns an integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] if `max` is zero.
    /// - [`Error::EntropyExhausted`] if every allowed draw was rejected.
    #[instrument(level = "trace", skip(self))]
    pub fn uniform_index(&self, max: u64) -> Result<u64> {
        if max == 0 {
            return Err(Error::InvalidRange {
                reason: "max must be positive",
            });
        }
        self.below(u128::from(max)).map(|n| n as u64)
    }

    /// Returns an integer in `[min(lo, hi), max(lo, hi)]`, both ends inclusive.
    ///
    /// The bounds may be given in either order, and `lo == hi` returns `lo`.
    /// The full `i64` range is supported.
    ///
    /// # Errors
    ///
    /// - [`Error::EntropyExhausted`] if every allowed draw was rejected.
    #[instrument(level = "trace", skip(self))]
    pub fn uniform_between(&self, lo: i64, hi: i64) -> Result<i64> {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        // At most 2^64, which is exactly the eight-byte sample space.
        let span = (i128::from(hi) - i128::from(lo)) as u128 + 1;
        let offset = self.below(span)?;
        Ok((i128::from(lo) + offset as i128) as i64)
    }

    /// Returns an integer in `[lo, hi]` for unsigned bounds with `lo <= hi`.
    pub(crate) fn uniform_u64_inclusive(&self, lo: u64, hi: u64) -> Result<u64> {
        debug_assert!(lo <= hi);
        let span = u128::from(hi - lo) + 1;
        Ok(lo + self.below(span)? as u64)
    }

    /// Returns a uniformly chosen element of `items`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] if `items` is empty.
    /// - [`Error::EntropyExhausted`] if every allowed draw was rejected.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Result<&'a T> {
        let index = self.uniform_index(items.len() as u64)?;
        Ok(&items[index as usize])
    }

    /// Shuffles `items` in place with a Fisher–Yates pass, so every
    /// permutation is equally likely.
    ///
    /// # Errors
    ///
    /// - [`Error::EntropyExhausted`] if every allowed draw was rejected. The
    ///   slice is left partially shuffled in that case.
    pub fn shuffle<T>(&self, items: &mut [T]) -> Result<()> {
        for i in (1..items.len()).rev() {
            let j = self.uniform_index(i as u64 + 1)? as usize;
            items.swap(i, j);
        }
        Ok(())
    }

    /// Rejection-samples an integer in `[0, bound)` for `bound` in `1..=2^64`.
    fn below(&self, bound: u128) -> Result<u128> {
        debug_assert!((1..=1 << 64).contains(&bound));
        if bound == 1 {
            return Ok(0);
        }

        let width = sample_width(bound);
        let space = 1_u128 << (8 * width);
        let limit = space - space % bound;

        let mut raw = [0_u8; MAX_SAMPLE_BYTES];
        let buf = &mut raw[..width];
        for _ in 0..MAX_DRAWS {
            self.rng.fill(buf);
            let sample = buf
                .iter()
                .fold(0_u128, |acc, &b| (acc << 8) | u128::from(b));
            if sample < limit {
                return Ok(sample % bound);
            }
        }

        tracing::error!(%bound, attempts = MAX_DRAWS, "every rejection-sampling draw was rejected");
        Err(Error::EntropyExhausted {
            attempts: MAX_DRAWS,
        })
    }
}

/// Number of bytes needed to represent every value in `[0, bound)`.
fn sample_width(bound: u128) -> usize {
    let bits = u128::BITS - (bound - 1).leading_zeros();
    (bits as usize).div_ceil(8).max(1)
}

#[cfg(test)]
mod width_tests {
    use super::sample_width;

    #[test]
    fn single_byte_covers_up_to_256() {
        assert_eq!(sample_width(2), 1);
        assert_eq!(sample_width(255), 1);
        assert_eq!(sample_width(256), 1);
    }

    #[test]
    fn wider_ranges_use_more_bytes() {
        assert_eq!(sample_width(257), 2);
        assert_eq!(sample_width(65_536), 2);
        assert_eq!(sample_width(65_537), 3);
        assert_eq!(sample_width(u128::from(u64::MAX)), 8);
        assert_eq!(sample_width(1 << 64), 8);
    }
}
