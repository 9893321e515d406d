use crate::{EntropySource, Error, PasswordPolicy, Result, Sampler};
use tracing::instrument;

/// Generates passwords that satisfy a [`PasswordPolicy`].
///
/// The class minimums are drawn first, the remaining positions are filled
/// from the combined alphabet, and the whole sequence is then shuffled so the
/// guaranteed characters do not sit at predictable positions. Every draw goes
/// through the unbiased [`Sampler`].
///
/// # Example
/// ```
/// use conjure::{PasswordGenerator, PasswordPolicy, SystemRandom};
///
/// let generator = PasswordGenerator::new(SystemRandom::default());
/// let password = generator.generate(&PasswordPolicy::new(12, 2, 2, 2)).unwrap();
/// assert_eq!(password.len(), 12);
/// ```
#[derive(Default, Clone, Copy, Debug)]
pub struct PasswordGenerator<R> {
    sampler: Sampler<R>,
}

impl<R> PasswordGenerator<R>
where
    R: EntropySource,
{
    pub const fn new(rng: R) -> Self {
        Self {
            sampler: Sampler::new(rng),
        }
    }

    /// Returns a password of exactly `policy.length` characters.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfiguration`] if the class minimums add up to more
    ///   than `policy.length`, or overflow.
    /// - [`Error::EntropyExhausted`] if a character could not be drawn.
    #[instrument(level = "trace", skip(self))]
    pub fn generate(&self, policy: &PasswordPolicy) -> Result<String> {
        let length = policy.length;
        match policy.required() {
            Some(required) if required <= length => {}
            required => {
                return Err(Error::InvalidConfiguration {
                    length,
                    required: required.unwrap_or(usize::MAX),
                });
            }
        }

        let mut chars = Vec::with_capacity(length);
        for (min, class) in policy.classes() {
            for _ in 0..min {
                chars.push(*self.sampler.pick(class)?);
            }
        }

        let alphabet = policy.alphabet();
        while chars.len() < length {
            chars.push(*self.sampler.pick(&alphabet)?);
        }

        self.sampler.shuffle(&mut chars)?;
        Ok(chars.into_iter().map(char::from).collect())
    }
}
