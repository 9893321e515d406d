use crate::{Error, Result};

const ALPHABET: &[u8; 16] = b"0123456789abcdef";
const NO_VALUE: u8 = 255;

/// Hex digits in a UUID once dashes are removed.
pub const UUID_HEX_LEN: usize = 32;

/// Length of the canonical dashed form.
pub const UUID_TEXT_LEN: usize = 36;

/// Raw byte offsets that are preceded by a dash in the canonical form,
/// producing the 8-4-4-4-12 grouping.
const DASH_BEFORE_BYTE: [usize; 4] = [4, 6, 8, 10];

/// Lookup table for hex decoding, accepting either case.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 16 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[(c - 32) as usize] = i; // uppercase letter
        }
        i += 1;
    }
    lut
};

/// Parses UUID text into its 16 raw bytes.
///
/// Every `-` is ignored wherever it appears; what remains must be exactly
/// [`UUID_HEX_LEN`] hex digits of either case.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for a non-hex character or the wrong
/// number of digits.
pub fn decode_uuid_hex(text: &str) -> Result<[u8; 16]> {
    let mut out = [0_u8; 16];
    let mut nibbles = 0;
    for b in text.bytes().filter(|&b| b != b'-') {
        let val = LOOKUP[b as usize];
        if val == NO_VALUE {
            return Err(Error::InvalidFormat {
                reason: "uuid contains a non-hex character",
            });
        }
        if nibbles == UUID_HEX_LEN {
            return Err(Error::InvalidFormat {
                reason: "uuid must contain exactly 32 hex digits",
            });
        }
        // High nibble first.
        out[nibbles / 2] |= val << (4 * (1 - nibbles % 2));
        nibbles += 1;
    }
    if nibbles != UUID_HEX_LEN {
        return Err(Error::InvalidFormat {
            reason: "uuid must contain exactly 32 hex digits",
        });
    }
    Ok(out)
}

/// Renders 16 raw bytes as lowercase `8-4-4-4-12` text into `buf`.
pub fn encode_uuid_hex(bytes: &[u8; 16], buf: &mut [u8; UUID_TEXT_LEN]) {
    let mut out = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if DASH_BEFORE_BYTE.contains(&i) {
            buf[out] = b'-';
            out += 1;
        }
        buf[out] = ALPHABET[(b >> 4) as usize];
        buf[out + 1] = ALPHABET[(b & 0x0F) as usize];
        out += 2;
    }
}

/// Allocating form of [`encode_uuid_hex`].
pub fn to_canonical(bytes: &[u8; 16]) -> String {
    let mut buf = [0_u8; UUID_TEXT_LEN];
    encode_uuid_hex(bytes, &mut buf);
    buf.iter().copied().map(char::from).collect()
}
