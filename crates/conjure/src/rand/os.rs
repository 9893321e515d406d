use crate::{EntropyUnavailable, TryEntropySource};
use rand::{TryRngCore, rngs::OsRng};

/// A `TryEntropySource` backed by the operating system's secure generator
/// (`getrandom(2)`, `BCryptGenRandom`, `crypto.getRandomValues`, ...).
///
/// Every call goes to the OS, so this is slower than [`ThreadRandom`], but it
/// holds no state and reports failure instead of hiding it. Wrap it in a
/// [`Fallback`] to obtain an infallible [`EntropySource`].
///
/// [`ThreadRandom`]: crate::ThreadRandom
/// [`Fallback`]: crate::Fallback
/// [`EntropySource`]: crate::EntropySource
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl TryEntropySource for OsRandom {
    fn try_fill(&self, buf: &mut [u8]) -> Result<(), EntropyUnavailable> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| EntropyUnavailable::new(e.to_string()))
    }
}
