use crate::{
    Error, Result, decode_short_bytes, decode_uuid_hex, encode_short_bytes, encode_uuid_hex,
    UUID_TEXT_LEN,
};
use chrono::{DateTime, Utc};
use core::{fmt, str::FromStr};

/// Ticks per millisecond in the UUIDv7 sub-millisecond fraction.
pub const FRACTION_TICKS: u16 = 4096;

/// A 128-bit RFC 4122 identifier.
///
/// The value is stored big-endian: raw byte 0 holds the most significant
/// eight bits. For version 7 the fields are laid out as
///
/// ```text
///  Bit Index:  127             80 79   76 75        64 63  62 61         0
///              +-----------------+-------+------------+------+-----------+
///  Field:      | timestamp (48)  | ver 4 | fraction 12| var 2| random 62 |
///              +-----------------+-------+------------+------+-----------+
///              |<------------- MSB ---- 128 bits ---- LSB -------------->|
/// ```
///
/// Version 4 keeps only the version and variant fields; every other bit is
/// random.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Uuid {
    id: u128,
}

impl Uuid {
    pub const RANDOM_BITS: u32 = 62;
    pub const VARIANT_BITS: u32 = 2;
    pub const FRACTION_BITS: u32 = 12;
    pub const VERSION_BITS: u32 = 4;
    pub const TIMESTAMP_BITS: u32 = 48;

    pub const RANDOM_SHIFT: u32 = 0;
    pub const VARIANT_SHIFT: u32 = Self::RANDOM_SHIFT + Self::RANDOM_BITS;
    pub const FRACTION_SHIFT: u32 = Self::VARIANT_SHIFT + Self::VARIANT_BITS;
    pub const VERSION_SHIFT: u32 = Self::FRACTION_SHIFT + Self::FRACTION_BITS;
    pub const TIMESTAMP_SHIFT: u32 = Self::VERSION_SHIFT + Self::VERSION_BITS;

    pub const RANDOM_MASK: u128 = (1 << Self::RANDOM_BITS) - 1;
    pub const VARIANT_MASK: u128 = (1 << Self::VARIANT_BITS) - 1;
    pub const FRACTION_MASK: u128 = (1 << Self::FRACTION_BITS) - 1;
    pub const VERSION_MASK: u128 = (1 << Self::VERSION_BITS) - 1;
    pub const TIMESTAMP_MASK: u128 = (1 << Self::TIMESTAMP_BITS) - 1;

    /// The `10` variant bits defined by RFC 4122.
    pub const RFC4122_VARIANT: u8 = 0b10;

    /// The all-zero UUID.
    pub const NIL: Self = Self::from_raw(0);

    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self { id: raw }
    }

    #[must_use]
    pub const fn to_raw(&self) -> u128 {
        self.id
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self::from_raw(u128::from_be_bytes(bytes))
    }

    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.id.to_be_bytes()
    }

    /// Packs a version 7 UUID from its fields.
    ///
    /// Only the low 48 bits of `millis`, the low 12 bits of `fraction` and the
    /// low 62 bits of `random` are kept. The version and variant fields are
    /// set.
    #[must_use]
    pub const fn from_v7_parts(millis: u64, fraction: u16, random: u64) -> Self {
        let t = (millis as u128 & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let f = (fraction as u128 & Self::FRACTION_MASK) << Self::FRACTION_SHIFT;
        let r = (random as u128 & Self::RANDOM_MASK) << Self::RANDOM_SHIFT;
        Self::from_raw(t | f | r)
            .with_version(7)
            .with_rfc4122_variant()
    }

    /// The version nibble, found at text position 14.
    #[must_use]
    pub const fn version(&self) -> u8 {
        ((self.id >> Self::VERSION_SHIFT) & Self::VERSION_MASK) as u8
    }

    /// The two high bits of raw byte 8.
    #[must_use]
    pub const fn variant(&self) -> u8 {
        ((self.id >> Self::VARIANT_SHIFT) & Self::VARIANT_MASK) as u8
    }

    /// Returns a copy with the version nibble replaced by the low four bits of
    /// `version`.
    #[must_use]
    pub const fn with_version(self, version: u8) -> Self {
        let cleared = self.id & !(Self::VERSION_MASK << Self::VERSION_SHIFT);
        let v = (version as u128 & Self::VERSION_MASK) << Self::VERSION_SHIFT;
        Self::from_raw(cleared | v)
    }

    /// Returns a copy with the variant bits forced to `10`.
    #[must_use]
    pub const fn with_rfc4122_variant(self) -> Self {
        let cleared = self.id & !(Self::VARIANT_MASK << Self::VARIANT_SHIFT);
        Self::from_raw(cleared | ((Self::RFC4122_VARIANT as u128) << Self::VARIANT_SHIFT))
    }

    /// Milliseconds since the Unix epoch held in the top 48 bits.
    ///
    /// This is only meaningful for version 7; see [`Self::datetime`] for the
    /// checked form.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        ((self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK) as u64
    }

    /// The 12-bit sub-millisecond fraction of a version 7 UUID, in units of
    /// 1/[`FRACTION_TICKS`] ms.
    #[must_use]
    pub const fn fraction(&self) -> u16 {
        ((self.id >> Self::FRACTION_SHIFT) & Self::FRACTION_MASK) as u16
    }

    /// The bits below the variant field.
    #[must_use]
    pub const fn random(&self) -> u64 {
        ((self.id >> Self::RANDOM_SHIFT) & Self::RANDOM_MASK) as u64
    }

    /// Parses UUID text, ignoring dashes and accepting either hex case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] unless exactly 32 hex digits remain
    /// once dashes are removed.
    pub fn parse(text: &str) -> Result<Self> {
        decode_uuid_hex(text).map(Self::from_bytes)
    }

    /// Recovers the generation time of a version 7 UUID at millisecond
    /// precision.
    ///
    /// # Errors
    ///
    /// - [`Error::WrongVersion`] unless the version nibble is 7.
    /// - [`Error::InvalidTimestamp`] if the timestamp is not a representable
    ///   calendar time.
    ///
    /// # Example
    /// ```
    /// use conjure::Uuid;
    ///
    /// let id: Uuid = "01950636-e549-7660-92b3-6ca21fbdd611".parse().unwrap();
    /// assert_eq!(id.datetime().unwrap().timestamp_millis(), 1_739_566_015_817);
    /// ```
    pub fn datetime(&self) -> Result<DateTime<Utc>> {
        let found = self.version();
        if found != 7 {
            return Err(Error::WrongVersion { expected: 7, found });
        }
        let millis = self.timestamp();
        i64::try_from(millis)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or(Error::InvalidTimestamp { millis })
    }

    /// Encodes this UUID as a 22-character short identifier.
    #[must_use]
    pub fn to_short(&self) -> String {
        encode_short_bytes(&self.to_bytes())
    }

    /// Decodes a short identifier produced by [`Self::to_short`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFormat`] if `short` is not base64.
    /// - [`Error::InvalidLength`] if it does not decode to 16 bytes.
    pub fn from_short(short: &str) -> Result<Self> {
        decode_short_bytes(short).map(Self::from_bytes)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0_u8; UUID_TEXT_LEN];
        encode_uuid_hex(&self.to_bytes(), &mut buf);
        f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("Uuid");
        dbg.field("id", &format_args!("{self}"));
        dbg.field("version", &self.version());
        dbg.field("variant", &format_args!("{:#04b}", self.variant()));
        if self.version() == 7 {
            dbg.field("timestamp", &self.timestamp());
            dbg.field("fraction", &self.fraction());
        }
        dbg.finish()
    }
}

impl FromStr for Uuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<u128> for Uuid {
    fn from(raw: u128) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Uuid> for u128 {
    fn from(id: Uuid) -> Self {
        id.to_raw()
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Uuid> for String {
    fn from(id: Uuid) -> Self {
        id.to_string()
    }
}

impl PartialEq<str> for Uuid {
    fn eq(&self, other: &str) -> bool {
        Self::parse(other).is_ok_and(|id| id == *self)
    }
}

impl PartialEq<&str> for Uuid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
