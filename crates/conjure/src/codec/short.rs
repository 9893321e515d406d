use super::{decode_uuid_hex, to_canonical};
use crate::{Error, Result};
use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use tracing::instrument;

/// Length of a short UUID: 16 bytes in unpadded base64.
pub const SHORT_UUID_LEN: usize = 22;

/// Encodes UUID text as a 22-character URL-safe short identifier.
///
/// The 16 raw bytes are written in the URL-safe base64 alphabet (`-` and `_`
/// in place of `+` and `/`) without padding. The encoding is injective:
/// distinct UUIDs never share a short form.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] unless `uuid` holds exactly 32 hex digits
/// once dashes are removed.
///
/// # Example
/// ```
/// let short = conjure::encode_short("2ededb11-c6ad-4af9-bcd6-30896a32c8b4").unwrap();
/// assert_eq!(short, "Lt7bEcatSvm81jCJajLItA");
/// ```
#[instrument(level = "trace")]
pub fn encode_short(uuid: &str) -> Result<String> {
    Ok(encode_short_bytes(&decode_uuid_hex(uuid)?))
}

/// Encodes 16 raw UUID bytes as a short identifier.
pub fn encode_short_bytes(bytes: &[u8; 16]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes a short identifier back to canonical lowercase UUID text.
///
/// This is the exact left inverse of [`encode_short`] over canonical input.
///
/// # Errors
///
/// - [`Error::InvalidFormat`] if `short` is not base64.
/// - [`Error::InvalidLength`] if it does not decode to exactly 16 bytes.
///
/// # Example
/// ```
/// let uuid = conjure::decode_short("Lt7bEcatSvm81jCJajLItA").unwrap();
/// assert_eq!(uuid, "2ededb11-c6ad-4af9-bcd6-30896a32c8b4");
/// ```
#[instrument(level = "trace")]
pub fn decode_short(short: &str) -> Result<String> {
    Ok(to_canonical(&decode_short_bytes(short)?))
}

/// Decodes a short identifier to its 16 raw bytes.
///
/// URL-safe characters are mapped back to the standard alphabet and the text
/// is re-padded to a multiple of four before decoding, so standard-alphabet
/// and padded inputs are accepted too.
pub fn decode_short_bytes(short: &str) -> Result<[u8; 16]> {
    let mut standard: String = short
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    let bytes = STANDARD.decode(&standard).map_err(|_| Error::InvalidFormat {
        reason: "short uuid is not valid base64",
    })?;
    let found = bytes.len();
    <[u8; 16]>::try_from(bytes).map_err(|_| Error::InvalidLength {
        expected: 16,
        found,
    })
}
