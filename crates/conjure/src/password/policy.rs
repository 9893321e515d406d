/// Lowercase letters. Every password draws from this class.
pub const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase letters.
pub const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &[u8; 10] = b"0123456789";

/// Symbols that survive shells, URLs and most form validators.
pub const SYMBOLS: &[u8; 11] = b"!@#$%&()_+?";

/// Length and per-class minimums for generating or checking a password.
///
/// A class with a minimum of zero is not requested: the generator leaves it
/// out of the alphabet entirely, and the checker does not require it.
///
/// # Example
/// ```
/// use conjure::PasswordPolicy;
///
/// let policy = PasswordPolicy {
///     length: 16,
///     symbols: 0,
///     ..PasswordPolicy::default()
/// };
/// assert_eq!(policy.required(), Some(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PasswordPolicy {
    /// Exact length of a generated password, or the minimum length of a
    /// checked one.
    pub length: usize,
    /// Minimum count of [`UPPERCASE`] characters.
    pub uppercase: usize,
    /// Minimum count of [`DIGITS`].
    pub digits: usize,
    /// Minimum count of [`SYMBOLS`].
    pub symbols: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 8,
            uppercase: 1,
            digits: 1,
            symbols: 1,
        }
    }
}

impl PasswordPolicy {
    pub const fn new(length: usize, uppercase: usize, digits: usize, symbols: usize) -> Self {
        Self {
            length,
            uppercase,
            digits,
            symbols,
        }
    }

    /// Sum of the class minimums, or `None` if it overflows.
    pub const fn required(&self) -> Option<usize> {
        match self.uppercase.checked_add(self.digits) {
            Some(n) => n.checked_add(self.symbols),
            None => None,
        }
    }

    /// The generation alphabet: lowercase plus every requested class.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut alphabet = LOWERCASE.to_vec();
        for (min, class) in self.classes() {
            if min > 0 {
                alphabet.extend_from_slice(class);
            }
        }
        alphabet
    }

    pub(crate) fn classes(&self) -> [(usize, &'static [u8]); 3] {
        [
            (self.uppercase, &UPPERCASE[..]),
            (self.digits, &DIGITS[..]),
            (self.symbols, &SYMBOLS[..]),
        ]
    }
}
