use crate::{EntropySource, SystemClock, TimeSource};
use portable_atomic::{AtomicU64, Ordering};
use rand::{RngCore, SeedableRng, rngs::SmallRng};

/// Distinguishes seeds drawn within the same clock tick.
static SEED_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Golden-ratio increment used to spread sequential seeds across the seed
/// space.
const SEED_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// A **non-cryptographic** `EntropySource` for environments without a secure
/// generator.
///
/// Each call seeds a fresh `SmallRng` from the wall clock and a process-wide
/// sequence number, so buffers are independent across calls but are
/// predictable to anyone who can estimate when they were drawn. Never use it
/// on its own for secrets; it exists as the degraded half of a [`Fallback`]
/// and as an injectable source for constrained environments.
///
/// [`Fallback`]: crate::Fallback
#[derive(Default, Clone, Copy, Debug)]
pub struct PseudoRandom;

impl EntropySource for PseudoRandom {
    fn fill(&self, buf: &mut [u8]) {
        let sequence = SEED_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemClock.current_nanos() as u64;
        let seed = nanos ^ sequence.wrapping_mul(SEED_SPREAD);
        SmallRng::seed_from_u64(seed).fill_bytes(buf);
    }
}
