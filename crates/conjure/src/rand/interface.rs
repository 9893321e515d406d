/// A trait for sources of raw random bytes.
///
/// This abstraction allows you to plug in the platform's secure generator, a
/// degraded fallback, or a mocked source in tests. Implementations must fill
/// the whole buffer on every call and must never fail; a source that can fail
/// should implement [`TryEntropySource`] and be wrapped in a [`Fallback`].
///
/// # Example
/// ```
/// use conjure::EntropySource;
///
/// struct FixedBytes;
/// impl EntropySource for FixedBytes {
///     fn fill(&self, buf: &mut [u8]) {
///         buf.fill(0xAB);
///     }
/// }
///
/// assert_eq!(FixedBytes.bytes(3), vec![0xAB, 0xAB, 0xAB]);
/// ```
///
/// [`Fallback`]: crate::Fallback
pub trait EntropySource {
    /// Overwrites every byte of `buf` with fresh random bytes.
    fn fill(&self, buf: &mut [u8]);

    /// Returns `n` fresh random bytes.
    fn bytes(&self, n: usize) -> Vec<u8> {
        let mut buf = vec![0; n];
        self.fill(&mut buf);
        buf
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill(&self, buf: &mut [u8]) {
        (**self).fill(buf);
    }
}

/// A source of random bytes that may be unavailable at runtime.
///
/// The OS generator is the canonical example: on exotic or sandboxed platforms
/// the underlying syscall can fail.
pub trait TryEntropySource {
    /// Attempts to overwrite every byte of `buf` with fresh random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyUnavailable`] if the source cannot produce bytes. The
    /// contents of `buf` are unspecified in that case.
    fn try_fill(&self, buf: &mut [u8]) -> Result<(), EntropyUnavailable>;
}

/// A secure entropy source could not produce bytes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("entropy source unavailable: {reason}")]
pub struct EntropyUnavailable {
    reason: String,
}

impl EntropyUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The platform's description of the failure.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
