//! Process-wide convenience functions.
//!
//! Each function builds its generator on the spot from [`SystemRandom`] and a
//! process-wide [`MonotonicClock`]. Neither holds mutable state, so these are
//! safe to call from any thread without coordination.
//!
//! # Example
//! ```rust
//! let id = conjure::generate_uuid7();
//! let short = conjure::generate_short_uuid(&id).unwrap();
//! assert_eq!(conjure::decode_short_uuid(&short).unwrap(), id);
//! ```

use crate::{
    Fallback, LoremFormat, LoremGenerator, MonotonicClock, NumericIdGenerator, OsRandom,
    PasswordGenerator, PasswordPolicy, PasswordStrength, PseudoRandom, Result, Sampler,
    SystemRandom, Uuid, UuidGenerator, check_strength, decode_short, encode_short,
};
use chrono::SecondsFormat;
use std::sync::LazyLock;
use tracing::instrument;

/// A global clock anchored once per process, so v7 timestamps from every
/// thread share one monotonic timeline.
static GLOBAL_MONOTONIC_CLOCK: LazyLock<MonotonicClock> = LazyLock::new(MonotonicClock::new);

const SYSTEM_RANDOM: SystemRandom = Fallback::new(OsRandom, PseudoRandom);

fn uuid_generator() -> UuidGenerator<MonotonicClock, SystemRandom> {
    UuidGenerator::new(*GLOBAL_MONOTONIC_CLOCK, SYSTEM_RANDOM)
}

/// Returns a random (version 4) UUID as canonical text.
pub fn generate_uuid4() -> String {
    uuid_generator().v4().to_string()
}

/// Returns a time-ordered (version 7) UUID as canonical text.
///
/// Two calls in immediate succession decode to non-decreasing timestamps.
pub fn generate_uuid7() -> String {
    uuid_generator().v7().to_string()
}

/// Recovers the generation time of a version 7 UUID as an ISO-8601 UTC
/// string with millisecond precision.
///
/// # Errors
///
/// - [`Error::InvalidFormat`] unless `uuid` holds 32 hex digits once dashes
///   are removed.
/// - [`Error::WrongVersion`] unless the version nibble is 7.
/// - [`Error::InvalidTimestamp`] if the timestamp is not a calendar time.
///
/// [`Error::InvalidFormat`]: crate::Error::InvalidFormat
/// [`Error::WrongVersion`]: crate::Error::WrongVersion
/// [`Error::InvalidTimestamp`]: crate::Error::InvalidTimestamp
///
/// # Example
/// ```rust
/// let at = conjure::decode_uuid7("01950636-e549-7660-92b3-6ca21fbdd611").unwrap();
/// assert_eq!(at, "2025-02-14T20:46:55.817Z");
/// ```
#[instrument(level = "trace")]
pub fn decode_uuid7(uuid: &str) -> Result<String> {
    let datetime = Uuid::parse(uuid)?.datetime()?;
    Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Converts UUID text to its 22-character short identifier.
///
/// See [`encode_short`] for the accepted input.
pub fn generate_short_uuid(uuid: &str) -> Result<String> {
    encode_short(uuid)
}

/// Converts a short identifier back to canonical UUID text.
///
/// See [`decode_short`] for the accepted input.
pub fn decode_short_uuid(short: &str) -> Result<String> {
    decode_short(short)
}

/// Returns an unbiased integer in `[0, max)`. See [`Sampler::uniform_index`].
pub fn uniform_index(max: u64) -> Result<u64> {
    Sampler::new(SYSTEM_RANDOM).uniform_index(max)
}

/// Returns an unbiased integer between `lo` and `hi` inclusive, in either
/// order. See [`Sampler::uniform_between`].
pub fn uniform_between(lo: i64, hi: i64) -> Result<i64> {
    Sampler::new(SYSTEM_RANDOM).uniform_between(lo, hi)
}

/// Returns a random number with exactly `digits` decimal digits. See
/// [`Sampler::number`].
pub fn generate_number(digits: u32) -> Result<u64> {
    Sampler::new(SYSTEM_RANDOM).number(digits)
}

/// Returns a password of `length` characters with at least the given number
/// of uppercase letters, digits and symbols.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if the minimums add up to more
/// than `length`.
///
/// [`Error::InvalidConfiguration`]: crate::Error::InvalidConfiguration
///
/// # Example
/// ```rust
/// let password = conjure::generate_password(12, 2, 2, 2).unwrap();
/// assert_eq!(password.len(), 12);
/// ```
pub fn generate_password(
    length: usize,
    uppercase: usize,
    digits: usize,
    symbols: usize,
) -> Result<String> {
    let policy = PasswordPolicy::new(length, uppercase, digits, symbols);
    PasswordGenerator::new(SYSTEM_RANDOM).generate(&policy)
}

/// Scores `text` against `policy`. See [`check_strength`].
pub fn check_password_strength(text: &str, policy: &PasswordPolicy) -> PasswordStrength {
    check_strength(text, policy)
}

/// Returns a time-prefixed numeric id of exactly `length` digits. See
/// [`NumericIdGenerator::generate`].
///
/// [`DEFAULT_NUMERIC_ID_LEN`] gives ids that sort by generation millisecond.
///
/// [`DEFAULT_NUMERIC_ID_LEN`]: crate::DEFAULT_NUMERIC_ID_LEN
pub fn generate_short_id(length: usize) -> Result<String> {
    NumericIdGenerator::new(*GLOBAL_MONOTONIC_CLOCK, SYSTEM_RANDOM).generate(length)
}

/// Returns `count` words, sentences or paragraphs of placeholder text. See
/// [`LoremGenerator::generate`].
pub fn generate_lorem_ipsum(count: usize, format: LoremFormat) -> Result<String> {
    LoremGenerator::new(SYSTEM_RANDOM).generate(count, format)
}
