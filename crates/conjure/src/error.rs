/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `conjure` can produce.
///
/// Every variant is raised synchronously by the call that detected it. Nothing
/// is retried or approximated on the caller's behalf: a degraded entropy source
/// is reported through `tracing` instead, and never surfaces here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input text is not a UUID or short identifier.
    ///
    /// For UUIDs this means the text does not hold exactly 32 hex digits once
    /// dashes are removed. For short identifiers it means the text is not valid
    /// base64.
    #[error("invalid format: {reason}")]
    InvalidFormat {
        /// What was wrong with the input.
        reason: &'static str,
    },

    /// A UUID of one version was handed to an operation that needs another.
    #[error("wrong uuid version: expected {expected}, found {found}")]
    WrongVersion {
        /// The version the operation understands.
        expected: u8,
        /// The version nibble found in the input.
        found: u8,
    },

    /// A short identifier decoded to the wrong number of bytes.
    #[error("invalid length: expected {expected} bytes, found {found}")]
    InvalidLength {
        /// Required byte count.
        expected: usize,
        /// Decoded byte count.
        found: usize,
    },

    /// A sampling bound is zero or exceeds what the sampler supports.
    #[error("invalid range: {reason}")]
    InvalidRange {
        /// Which bound was rejected.
        reason: &'static str,
    },

    /// The password class minimums do not fit in the requested length.
    #[error("invalid configuration: {required} required characters exceed length {length}")]
    InvalidConfiguration {
        /// Requested password length.
        length: usize,
        /// Sum of the class minimums, saturated at `usize::MAX`.
        required: usize,
    },

    /// A decoded UUIDv7 timestamp cannot be represented as a calendar time.
    #[error("invalid timestamp: {millis} ms since the unix epoch")]
    InvalidTimestamp {
        /// The decoded millisecond timestamp.
        millis: u64,
    },

    /// Rejection sampling discarded every draw it was allowed to make.
    ///
    /// Each draw is accepted with probability of at least one half, so this
    /// is only reachable with a degenerate [`EntropySource`].
    ///
    /// [`EntropySource`]: crate::EntropySource
    #[error("entropy exhausted after {attempts} rejected draws")]
    EntropyExhausted {
        /// How many draws were rejected.
        attempts: u32,
    },
}
