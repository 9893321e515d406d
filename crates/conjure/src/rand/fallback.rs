use crate::{EntropySource, OsRandom, PseudoRandom, TryEntropySource};

/// The default entropy source: the OS generator, degrading to
/// [`PseudoRandom`] with a warning when the OS cannot serve a request.
pub type SystemRandom = Fallback<OsRandom, PseudoRandom>;

/// Combines a fallible secure source with an infallible degraded one.
///
/// Every [`EntropySource::fill`] first asks `primary`. If it fails, exactly one
/// `WARN` event is emitted for that call and the buffer is filled from
/// `fallback` instead, so the caller always receives the requested number of
/// bytes.
///
/// # Example
/// ```
/// use conjure::{EntropySource, EntropyUnavailable, Fallback, PseudoRandom, TryEntropySource};
///
/// struct NoDevice;
/// impl TryEntropySource for NoDevice {
///     fn try_fill(&self, _buf: &mut [u8]) -> Result<(), EntropyUnavailable> {
///         Err(EntropyUnavailable::new("no /dev/urandom"))
///     }
/// }
///
/// let source = Fallback::new(NoDevice, PseudoRandom);
/// assert_eq!(source.bytes(16).len(), 16);
/// ```
#[derive(Default, Clone, Copy, Debug)]
pub struct Fallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Fallback<P, F>
where
    P: TryEntropySource,
    F: EntropySource,
{
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> EntropySource for Fallback<P, F>
where
    P: TryEntropySource,
    F: EntropySource,
{
    fn fill(&self, buf: &mut [u8]) {
        if let Err(err) = self.primary.try_fill(buf) {
            tracing::warn!(
                len = buf.len(),
                reason = err.reason(),
                "secure entropy unavailable; using non-cryptographic fallback"
            );
            self.fallback.fill(buf);
        }
    }
}
